//! aarch64 SIMD implementations using NEON.
//!
//! NEON is always available on aarch64, so no runtime detection needed.
//! However, we still use target_feature for consistency with x86_64.

/// NEON integer dot product with 4-way unrolling.
///
/// Processes 8 `i32` per iteration using widening multiply-accumulate
/// (`smlal`/`smlal2`) into four `int64x2_t` accumulators.
///
/// # Safety
///
/// NEON is always available on aarch64, but we use `target_feature`
/// annotation for consistency and potential future optimizations.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn dot_neon(a: &[i32], b: &[i32]) -> i64 {
    use std::arch::aarch64::{
        int64x2_t, vaddq_s64, vaddvq_s64, vdupq_n_s64, vget_low_s32, vld1q_s32, vmlal_high_s32,
        vmlal_s32,
    };

    let n = a.len().min(b.len());
    if n == 0 {
        return 0;
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let chunks_8 = n / 8;
    let mut sum0: int64x2_t = vdupq_n_s64(0);
    let mut sum1: int64x2_t = vdupq_n_s64(0);
    let mut sum2: int64x2_t = vdupq_n_s64(0);
    let mut sum3: int64x2_t = vdupq_n_s64(0);

    for i in 0..chunks_8 {
        let base = i * 8;
        let va0 = vld1q_s32(a_ptr.add(base));
        let vb0 = vld1q_s32(b_ptr.add(base));
        let va1 = vld1q_s32(a_ptr.add(base + 4));
        let vb1 = vld1q_s32(b_ptr.add(base + 4));

        sum0 = vmlal_s32(sum0, vget_low_s32(va0), vget_low_s32(vb0));
        sum1 = vmlal_high_s32(sum1, va0, vb0);
        sum2 = vmlal_s32(sum2, vget_low_s32(va1), vget_low_s32(vb1));
        sum3 = vmlal_high_s32(sum3, va1, vb1);
    }

    // Combine accumulators
    let sum01 = vaddq_s64(sum0, sum1);
    let sum23 = vaddq_s64(sum2, sum3);
    let mut result = vaddvq_s64(vaddq_s64(sum01, sum23));

    // Scalar tail
    for i in chunks_8 * 8..n {
        let prod = i64::from(*a.get_unchecked(i)) * i64::from(*b.get_unchecked(i));
        result = result.wrapping_add(prod);
    }

    result
}
