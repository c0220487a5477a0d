//! Integer dot product kernels.
//!
//! `dotproduct` computes inner products of `i32` vectors into an `i64`
//! accumulator:
//!
//! - **Dense**: [`dot`], [`dot_prefix`], plus the checked forms [`try_dot`]
//!   and [`checked_dot`]
//! - **Sparse**: `sparse_dot` and the validated `SparseVec` view (feature `sparse`)
//!
//! Every product is widened to 64 bits before it is summed, and the sum
//! wraps on overflow. With products bounded by 2^62 that takes at least
//! two worst-case terms; [`checked_dot`] reports it instead.
//!
//! # SIMD Dispatch
//!
//! The dense kernel dispatches to the fastest available instruction set:
//!
//! | Architecture | Instructions | Detection |
//! |--------------|--------------|-----------|
//! | x86_64 | AVX2 | Runtime |
//! | aarch64 | NEON | Always available |
//! | Other | Portable | LLVM auto-vectorizes |
//!
//! Vectors shorter than [`MIN_DIM_SIMD`] use portable code.
//!
//! # Checked vs trusted
//!
//! The kernels do no validation beyond slice bounds. Length and ordering
//! checks live in a separate layer ([`try_dot`], `SparseVec::new`) that
//! returns [`Error`], so the hot loops stay branch-light.
//!
//! # Example
//!
//! ```rust
//! use dotproduct::{dot, try_dot};
//!
//! assert_eq!(dot(&[1, 2, 3], &[4, 5, 6]), 32);
//! assert_eq!(dot(&[-1, 2], &[3, -4]), -11);
//! assert!(try_dot(&[1, 2], &[3]).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod arch;
mod dense;
mod error;

#[cfg(feature = "sparse")]
mod sparse;

pub use dense::{checked_dot, dot, dot_portable, dot_prefix, try_dot};
pub use error::{Error, Result};

#[cfg(feature = "sparse")]
pub use sparse::{sparse_dot, sparse_dot_portable, sparse_dot_prefix, SparseVec};

/// Minimum vector dimension for SIMD to be worthwhile.
///
/// Below this threshold, dispatch overhead outweighs SIMD benefits.
pub const MIN_DIM_SIMD: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_basic() {
        assert_eq!(dot(&[1, 2, 3], &[4, 5, 6]), 32);
    }

    #[test]
    fn test_dot_empty() {
        let a: [i32; 0] = [];
        let b: [i32; 0] = [];
        assert_eq!(dot(&a, &b), 0);
        assert_eq!(dot_prefix(0, &a, &b), 0);
    }

    #[test]
    fn test_dot_commutative() {
        let a = [9, -2, 7, 0, 13];
        let b = [4, 8, -10, 5, 1];
        assert_eq!(dot(&a, &b), dot(&b, &a));
    }

    #[test]
    fn test_try_dot_ok() {
        assert_eq!(try_dot(&[9, 2, 7], &[4, 8, 10]), Ok(122));
    }

    #[cfg(feature = "sparse")]
    #[test]
    fn test_sparse_matches_dense_on_shared_domain() {
        let dense_a = [5, 6];
        let dense_b = [7, 8];
        let idx = [0, 1];
        assert_eq!(
            sparse_dot(&idx, &dense_a, &idx, &dense_b),
            dot(&dense_a, &dense_b)
        );
    }
}
