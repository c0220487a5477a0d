//! x86_64 SIMD implementations using AVX2.
//!
//! These functions are unsafe and require runtime feature detection
//! before calling. The safe public API handles this.
//!
//! Each 32-bit lane is sign-extended to 64 bits before multiplying, so a
//! 256-bit register holds four `i64` partial sums. Lane sums use wrapping
//! 64-bit addition, the same as the portable path.

/// AVX2 integer dot product with 4-way unrolling.
///
/// Processes 16 `i32` per iteration (4 x 4 widened lanes).
///
/// # Safety
///
/// Caller must verify `is_x86_feature_detected!("avx2")` before calling.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn dot_avx2(a: &[i32], b: &[i32]) -> i64 {
    use std::arch::x86_64::{
        __m256i, _mm256_add_epi64, _mm256_mul_epi32, _mm256_setzero_si256, _mm256_storeu_si256,
    };

    let n = a.len().min(b.len());
    if n == 0 {
        return 0;
    }

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    let chunks_16 = n / 16;
    let mut sum0: __m256i = _mm256_setzero_si256();
    let mut sum1: __m256i = _mm256_setzero_si256();
    let mut sum2: __m256i = _mm256_setzero_si256();
    let mut sum3: __m256i = _mm256_setzero_si256();

    for i in 0..chunks_16 {
        let base = i * 16;
        let va0 = widen(a_ptr.add(base));
        let vb0 = widen(b_ptr.add(base));
        let va1 = widen(a_ptr.add(base + 4));
        let vb1 = widen(b_ptr.add(base + 4));
        let va2 = widen(a_ptr.add(base + 8));
        let vb2 = widen(b_ptr.add(base + 8));
        let va3 = widen(a_ptr.add(base + 12));
        let vb3 = widen(b_ptr.add(base + 12));

        // mul_epi32 multiplies the signed low halves of each 64-bit lane.
        sum0 = _mm256_add_epi64(sum0, _mm256_mul_epi32(va0, vb0));
        sum1 = _mm256_add_epi64(sum1, _mm256_mul_epi32(va1, vb1));
        sum2 = _mm256_add_epi64(sum2, _mm256_mul_epi32(va2, vb2));
        sum3 = _mm256_add_epi64(sum3, _mm256_mul_epi32(va3, vb3));
    }

    // Combine accumulators
    let sum01 = _mm256_add_epi64(sum0, sum1);
    let sum23 = _mm256_add_epi64(sum2, sum3);
    let sum_all = _mm256_add_epi64(sum01, sum23);

    let mut lanes = [0i64; 4];
    _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, sum_all);
    let mut result = lanes.iter().fold(0i64, |acc, &x| acc.wrapping_add(x));

    // Scalar tail
    for i in chunks_16 * 16..n {
        let prod = i64::from(*a.get_unchecked(i)) * i64::from(*b.get_unchecked(i));
        result = result.wrapping_add(prod);
    }

    result
}

/// Load 4 x i32 from `p` and sign-extend to 4 x i64.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[inline]
unsafe fn widen(p: *const i32) -> std::arch::x86_64::__m256i {
    use std::arch::x86_64::{__m128i, _mm256_cvtepi32_epi64, _mm_loadu_si128};

    _mm256_cvtepi32_epi64(_mm_loadu_si128(p as *const __m128i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avx2_matches_portable() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        for n in [0usize, 1, 15, 16, 17, 31, 32, 33, 100] {
            let a: Vec<i32> = (0..n as i32).map(|i| i * 7 - 300).collect();
            let b: Vec<i32> = (0..n as i32).map(|i| 1000 - i * 13).collect();
            // SAFETY: AVX2 checked above.
            let simd = unsafe { dot_avx2(&a, &b) };
            assert_eq!(simd, crate::dot_portable(&a, &b), "n = {}", n);
        }
    }

    #[test]
    fn test_avx2_sign_extension() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        let a = [-1i32; 16];
        let b = [i32::MAX; 16];
        // SAFETY: AVX2 checked above.
        let simd = unsafe { dot_avx2(&a, &b) };
        assert_eq!(simd, -16 * i64::from(i32::MAX));
    }
}
