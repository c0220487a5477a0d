//! Dense integer dot product with SIMD acceleration.
//!
//! Inputs are `i32` slices; every product is widened to `i64` before it is
//! accumulated, and the accumulator wraps on overflow like fixed-width
//! signed arithmetic.
//!
//! # Performance Hierarchy
//!
//! Runtime dispatch selects the fastest available implementation:
//!
//! | ISA | Min dim | Lanes per register |
//! |-----|---------|--------------------|
//! | AVX2 | 16 | 4 x i64 |
//! | NEON | 16 | 2 x i64 |
//! | Portable | any | 1 (LLVM may auto-vectorize) |
//!
//! Wrapping addition is associative and commutative modulo 2^64, so all
//! paths return the same bits for the same input.

// arch is only used on architectures with SIMD dispatch
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use crate::arch;
use crate::error::{Error, Result};

// MIN_DIM_SIMD is only used on architectures with SIMD dispatch
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use crate::MIN_DIM_SIMD;

/// Dot product of two vectors: `Σ(a[i] * b[i])` in 64-bit precision.
///
/// Returns 0 for empty vectors. Accumulator overflow wraps; use
/// [`checked_dot`] to detect it instead.
///
/// # SIMD Acceleration
///
/// Automatically dispatches to (in order of preference):
/// - AVX2 on x86_64 (runtime detection, n >= 16)
/// - NEON on aarch64 (always available, n >= 16)
/// - Portable fallback otherwise
///
/// # Debug Assertions
///
/// In debug builds, panics if vector lengths differ. In release builds,
/// mismatched lengths silently use the shorter length. Use [`try_dot`]
/// to get an error instead.
///
/// # Example
///
/// ```rust
/// use dotproduct::dot;
///
/// let a = [1, 2, 3];
/// let b = [4, 5, 6];
/// assert_eq!(dot(&a, &b), 32);
/// ```
#[inline]
#[must_use]
pub fn dot(a: &[i32], b: &[i32]) -> i64 {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "dot: dimension mismatch ({} vs {})",
        a.len(),
        b.len()
    );

    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    let n = a.len().min(b.len());

    #[cfg(target_arch = "x86_64")]
    {
        if n >= MIN_DIM_SIMD && is_x86_feature_detected!("avx2") {
            // SAFETY: AVX2 verified via runtime detection.
            return unsafe { arch::x86_64::dot_avx2(a, b) };
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        if n >= MIN_DIM_SIMD {
            // SAFETY: NEON is always available on aarch64.
            return unsafe { arch::aarch64::dot_neon(a, b) };
        }
    }

    #[allow(unreachable_code)]
    dot_portable(a, b)
}

/// Portable (non-SIMD) dot product.
///
/// Reference implementation for the SIMD paths.
#[inline]
#[must_use]
pub fn dot_portable(a: &[i32], b: &[i32]) -> i64 {
    a.iter()
        .zip(b.iter())
        .fold(0i64, |acc, (&x, &y)| {
            acc.wrapping_add(i64::from(x) * i64::from(y))
        })
}

/// Dot product over the first `n` elements of `a` and `b`.
///
/// This is the count-plus-buffers form used by C-style callers. Unlike a
/// raw pointer loop, a slice shorter than `n` panics on the bounds check
/// rather than reading past the end.
///
/// # Panics
///
/// Panics if `n > a.len()` or `n > b.len()`.
///
/// # Example
///
/// ```rust
/// use dotproduct::dot_prefix;
///
/// let a = [1, 2, 3, 100];
/// let b = [4, 5, 6];
/// assert_eq!(dot_prefix(3, &a, &b), 32);
/// assert_eq!(dot_prefix(0, &a, &b), 0);
/// ```
#[inline]
#[must_use]
pub fn dot_prefix(n: usize, a: &[i32], b: &[i32]) -> i64 {
    dot(&a[..n], &b[..n])
}

/// Length-checked dot product.
///
/// Returns [`Error::LengthMismatch`] instead of truncating when the
/// vectors differ in length.
///
/// # Example
///
/// ```rust
/// use dotproduct::{try_dot, Error};
///
/// assert_eq!(try_dot(&[9, 2, 7], &[4, 8, 10]), Ok(122));
/// assert!(matches!(
///     try_dot(&[1, 2], &[1]),
///     Err(Error::LengthMismatch { left: 2, right: 1, .. })
/// ));
/// ```
pub fn try_dot(a: &[i32], b: &[i32]) -> Result<i64> {
    if a.len() != b.len() {
        log::debug!("try_dot: rejecting vectors of length {} and {}", a.len(), b.len());
        return Err(Error::length_mismatch("dot", a.len(), b.len()));
    }
    Ok(dot(a, b))
}

/// Dot product with an overflow-checked accumulator.
///
/// Returns `None` as soon as a partial sum leaves the `i64` range, even if
/// later terms would bring the wrapped total back into range. Individual
/// products never overflow (`|i32::MIN|² = 2^62`).
///
/// # Example
///
/// ```rust
/// use dotproduct::checked_dot;
///
/// assert_eq!(checked_dot(&[2, -3], &[5, 7]), Some(-11));
/// assert_eq!(checked_dot(&[i32::MIN, i32::MIN], &[i32::MIN, i32::MIN]), None);
/// ```
#[must_use]
pub fn checked_dot(a: &[i32], b: &[i32]) -> Option<i64> {
    debug_assert_eq!(a.len(), b.len(), "checked_dot: dimension mismatch");
    a.iter()
        .zip(b.iter())
        .try_fold(0i64, |acc, (&x, &y)| {
            acc.checked_add(i64::from(x) * i64::from(y))
        })
}
