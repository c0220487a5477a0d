//! Sparse vector operations.
//!
//! Sparse vectors are represented as parallel arrays of sorted indices and values.
//! The merge-join algorithm computes dot products in O(|a| + |b|) time with no
//! allocation.
//!
//! The free functions trust their caller: indices must be strictly ascending,
//! otherwise the result is some value other than the true dot product. Wrap
//! inputs in [`SparseVec`] to validate ordering once, up front.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use crate::error::{Error, Result};

/// Sparse dot product for sorted index arrays.
///
/// Computes the inner product of two sparse vectors represented as
/// (indices, values) pairs. Indices must be strictly ascending.
///
/// # Algorithm
///
/// Uses merge-join: two pointers advance through sorted indices,
/// accumulating products when indices match. Time complexity O(|a| + |b|).
///
/// # Example
///
/// ```rust
/// use dotproduct::sparse_dot;
///
/// // a = {0: 5, 1: 6}, b = {0: 7, 1: 8}
/// assert_eq!(sparse_dot(&[0, 1], &[5, 6], &[0, 1], &[7, 8]), 83);
///
/// // Disjoint supports
/// assert_eq!(sparse_dot(&[0, 1], &[5, 6], &[2, 3], &[7, 8]), 0);
/// ```
#[inline]
#[must_use]
pub fn sparse_dot(a_indices: &[i32], a_values: &[i32], b_indices: &[i32], b_values: &[i32]) -> i64 {
    debug_assert_eq!(
        a_indices.len(),
        a_values.len(),
        "sparse_dot: a indices/values length mismatch"
    );
    debug_assert_eq!(
        b_indices.len(),
        b_values.len(),
        "sparse_dot: b indices/values length mismatch"
    );

    sparse_dot_portable(a_indices, a_values, b_indices, b_values)
}

/// Portable sparse dot product (merge-join algorithm).
///
/// Time complexity: O(|a| + |b|)
/// Space complexity: O(1)
#[inline]
#[must_use]
pub fn sparse_dot_portable(
    a_indices: &[i32],
    a_values: &[i32],
    b_indices: &[i32],
    b_values: &[i32],
) -> i64 {
    let mut result = 0i64;
    merge_join(a_indices, a_values, b_indices, b_values, |prod| {
        result = result.wrapping_add(prod);
        ControlFlow::Continue(())
    });
    result
}

/// Walk two sorted index arrays, handing the widened product of every
/// matching pair to `on_match` until either side runs out or it breaks.
///
/// Each side stops at the shorter of its index and value slices.
#[inline]
fn merge_join<F>(
    a_indices: &[i32],
    a_values: &[i32],
    b_indices: &[i32],
    b_values: &[i32],
    mut on_match: F,
) where
    F: FnMut(i64) -> ControlFlow<()>,
{
    let n_a = a_indices.len().min(a_values.len());
    let n_b = b_indices.len().min(b_values.len());

    let mut i = 0;
    let mut j = 0;

    while i < n_a && j < n_b {
        match a_indices[i].cmp(&b_indices[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                let prod = i64::from(a_values[i]) * i64::from(b_values[j]);
                if on_match(prod).is_break() {
                    return;
                }
                i += 1;
                j += 1;
            }
        }
    }
}

/// Sparse dot product over the first `n_a` and `n_b` entries.
///
/// Count-plus-buffers form for C-style callers. Each count must not exceed
/// the length of its index or value slice.
///
/// # Panics
///
/// Panics if a count is larger than the slices it describes.
#[inline]
#[must_use]
pub fn sparse_dot_prefix(
    n_a: usize,
    a_indices: &[i32],
    a_values: &[i32],
    n_b: usize,
    b_indices: &[i32],
    b_values: &[i32],
) -> i64 {
    sparse_dot(
        &a_indices[..n_a],
        &a_values[..n_a],
        &b_indices[..n_b],
        &b_values[..n_b],
    )
}

/// Borrowed sparse vector with validated index ordering.
///
/// Construction via [`SparseVec::new`] checks that indices and values pair
/// up and that indices are strictly ascending. After that, [`SparseVec::dot`]
/// runs the trusted merge kernel with no further checks.
///
/// # Example
///
/// ```rust
/// use dotproduct::{Error, SparseVec};
///
/// let a = SparseVec::new(&[1, 4, 9], &[2, -1, 3])?;
/// let b = SparseVec::new(&[0, 4, 9], &[10, 5, 5])?;
/// assert_eq!(a.dot(&b), -5 + 15);
///
/// assert!(matches!(
///     SparseVec::new(&[3, 3], &[1, 1]),
///     Err(Error::UnsortedIndex { position: 1, .. })
/// ));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseVec<'a> {
    indices: &'a [i32],
    values: &'a [i32],
}

impl<'a> SparseVec<'a> {
    /// Validate and wrap parallel index/value slices.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] if `indices.len() != values.len()`
    /// - [`Error::UnsortedIndex`] at the first index that is not strictly
    ///   greater than its predecessor (duplicates included)
    pub fn new(indices: &'a [i32], values: &'a [i32]) -> Result<Self> {
        if indices.len() != values.len() {
            log::debug!(
                "SparseVec: {} indices but {} values",
                indices.len(),
                values.len()
            );
            return Err(Error::length_mismatch(
                "sparse indices/values",
                indices.len(),
                values.len(),
            ));
        }

        if let Some(pos) = indices.windows(2).position(|w| w[0] >= w[1]) {
            let err = Error::UnsortedIndex {
                position: pos + 1,
                previous: indices[pos],
                index: indices[pos + 1],
            };
            log::debug!("SparseVec: {}", err);
            return Err(err);
        }

        Ok(Self { indices, values })
    }

    /// Wrap slices without validating index order.
    ///
    /// The caller guarantees equal lengths and strictly ascending indices;
    /// both are only checked by debug assertions.
    #[inline]
    pub fn new_unchecked(indices: &'a [i32], values: &'a [i32]) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices, values }
    }

    /// The zero vector.
    #[inline]
    pub fn empty() -> Self {
        Self {
            indices: &[],
            values: &[],
        }
    }

    /// Positions of the stored entries, strictly ascending.
    #[inline]
    pub fn indices(&self) -> &'a [i32] {
        self.indices
    }

    /// Values at [`Self::indices`].
    #[inline]
    pub fn values(&self) -> &'a [i32] {
        self.values
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// True for the zero vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sparse dot product with another validated vector.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: &SparseVec<'_>) -> i64 {
        sparse_dot_portable(self.indices, self.values, other.indices, other.values)
    }

    /// Sparse dot product with an overflow-checked accumulator.
    ///
    /// Returns `None` if any partial sum leaves the `i64` range.
    #[must_use]
    pub fn checked_dot(&self, other: &SparseVec<'_>) -> Option<i64> {
        let mut result = Some(0i64);
        merge_join(
            self.indices,
            self.values,
            other.indices,
            other.values,
            |prod| {
                result = result.and_then(|acc| acc.checked_add(prod));
                match result {
                    Some(_) => ControlFlow::Continue(()),
                    None => ControlFlow::Break(()),
                }
            },
        );
        result
    }
}

impl Default for SparseVec<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
