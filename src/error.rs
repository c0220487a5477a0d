//! Error types for the validation layer.
//!
//! The kernels themselves never fail. These errors come from the optional
//! checks that sit above them ([`crate::try_dot`] and `SparseVec::new`).

use thiserror::Error;

/// Input rejected by a checked entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two sequences that must be paired have different lengths.
    #[error("length mismatch in {context}: {left} vs {right}")]
    LengthMismatch {
        /// Which pairing failed (e.g. `"dot"`, `"sparse indices/values"`).
        context: &'static str,
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// A sparse index sequence is not strictly ascending.
    ///
    /// Covers both out-of-order and duplicate indices.
    #[error("sparse index {index} at position {position} does not follow {previous}")]
    UnsortedIndex {
        /// Position of the offending index.
        position: usize,
        /// Index immediately before it.
        previous: i32,
        /// The offending index.
        index: i32,
    },
}

/// Result alias for checked operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn length_mismatch(context: &'static str, left: usize, right: usize) -> Self {
        Self::LengthMismatch {
            context,
            left,
            right,
        }
    }
}
