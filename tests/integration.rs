//! Integration tests for the documented numeric contracts.
//!
//! Each case pins an exact value so regressions in widening, wrapping or
//! merge order show up as a concrete mismatch.

use dotproduct::{dot, dot_prefix, try_dot, Error};

#[test]
fn dense_empty_is_zero() {
    assert_eq!(dot(&[], &[]), 0);
    assert_eq!(dot_prefix(0, &[], &[]), 0);
}

#[test]
fn dense_small_example() {
    // 1*4 + 2*5 + 3*6
    assert_eq!(dot(&[1, 2, 3], &[4, 5, 6]), 32);
}

#[test]
fn dense_negative_values() {
    assert_eq!(dot(&[-1, 2], &[3, -4]), -11);
}

#[test]
fn dense_wrapper_example() {
    // [9, 2, 7] . [4, 8, 10] = 36 + 16 + 70
    assert_eq!(try_dot(&[9, 2, 7], &[4, 8, 10]), Ok(122));
}

#[test]
fn dense_length_mismatch_is_an_error() {
    assert_eq!(
        try_dot(&[9, 2, 7], &[4, 8]),
        Err(Error::LengthMismatch {
            context: "dot",
            left: 3,
            right: 2
        })
    );
}

/// A large vector whose exact sum fits in i64 without wrapping.
#[test]
fn dense_large_exact() {
    let n = 100_000;
    let a: Vec<i32> = (0..n).map(|i| (i % 1_000_001) as i32).collect();
    let b: Vec<i32> = (0..n).map(|i| 1_000_000 - (i % 1_000_001) as i32).collect();

    let expected: i64 = a
        .iter()
        .zip(&b)
        .map(|(&x, &y)| i64::from(x) * i64::from(y))
        .sum();
    assert_eq!(dot(&a, &b), expected);
}

#[test]
fn dense_prefix_uses_only_leading_elements() {
    let a = [1, 2, 3, 4, 5];
    let b = [5, 4, 3, 2, 1, 0, 0];
    assert_eq!(dot_prefix(2, &a, &b), 5 + 8);
    assert_eq!(dot_prefix(5, &a, &b), dot(&a, &b[..5]));
}

#[cfg(feature = "sparse")]
mod sparse {
    use dotproduct::{dot, sparse_dot, sparse_dot_prefix, SparseVec};

    #[test]
    fn disjoint_indices_give_zero() {
        assert_eq!(sparse_dot(&[0, 1], &[5, 6], &[2, 3], &[7, 8]), 0);
    }

    #[test]
    fn full_overlap_matches_dense() {
        assert_eq!(sparse_dot(&[0, 1], &[5, 6], &[0, 1], &[7, 8]), 83);
        assert_eq!(
            sparse_dot(&[0, 1], &[5, 6], &[0, 1], &[7, 8]),
            dot(&[5, 6], &[7, 8])
        );
    }

    #[test]
    fn one_empty_side_gives_zero() {
        let idx = [0, 4, 9, 12];
        let val = [i32::MAX, -3, 8, i32::MIN];
        assert_eq!(sparse_dot(&[], &[], &idx, &val), 0);
        assert_eq!(sparse_dot(&idx, &val, &[], &[]), 0);
        assert_eq!(sparse_dot_prefix(0, &idx, &val, 4, &idx, &val), 0);
    }

    #[test]
    fn six_argument_form() {
        let idx_a = [1, 3, 5, 7];
        let val_a = [1, 1, 1, 1];
        let idx_b = [3, 7, 8];
        let val_b = [10, 100, 1000];
        assert_eq!(sparse_dot_prefix(4, &idx_a, &val_a, 3, &idx_b, &val_b), 110);
        // Truncating B before index 7 drops that match.
        assert_eq!(sparse_dot_prefix(4, &idx_a, &val_a, 1, &idx_b, &val_b), 10);
    }

    #[test]
    fn checked_view_end_to_end() {
        let query = SparseVec::new(&[2, 40, 1000], &[3, 1, 2]).unwrap();
        let doc = SparseVec::new(&[2, 7, 1000, 2000], &[5, 9, 4, 1]).unwrap();
        assert_eq!(query.dot(&doc), 15 + 8);
        assert_eq!(query.checked_dot(&doc), Some(23));
    }
}
