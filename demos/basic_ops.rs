//! Basic Dot Products
//!
//! Dense, prefix, checked and sparse usage in one place.
//!
//! ```bash
//! cargo run --example basic_ops --release
//! ```

use dotproduct::{checked_dot, dot, dot_prefix, sparse_dot, try_dot, SparseVec};

fn main() -> Result<(), dotproduct::Error> {
    // Dense: 9*4 + 2*8 + 7*10 = 36 + 16 + 70 = 122
    let a = [9, 2, 7];
    let b = [4, 8, 10];
    println!("dot(a, b) = {}", dot(&a, &b));
    assert_eq!(dot(&a, &b), 122);

    // Count-plus-buffers form: only the first n elements are used
    println!("dot_prefix(2, a, b) = {}", dot_prefix(2, &a, &b));

    // Length-checked entry point
    match try_dot(&a, &b[..2]) {
        Ok(v) => println!("unexpected: {}", v),
        Err(e) => println!("try_dot rejected input: {}", e),
    }

    // Products are widened, the accumulator wraps
    let big = [i32::MIN, i32::MIN];
    println!("wrapping dot = {}", dot(&big, &big));
    println!("checked dot  = {:?}", checked_dot(&big, &big));

    // Sparse: only indices present in both vectors contribute
    let (a_idx, a_val) = ([0, 3, 9], [5, 6, 7]);
    let (b_idx, b_val) = ([3, 4, 9], [2, 2, 2]);
    println!(
        "sparse_dot = {}",
        sparse_dot(&a_idx, &a_val, &b_idx, &b_val)
    );

    // Validate once, then use the trusted merge
    let sa = SparseVec::new(&a_idx, &a_val)?;
    let sb = SparseVec::new(&b_idx, &b_val)?;
    assert_eq!(sa.dot(&sb), 26);

    if let Err(e) = SparseVec::new(&[4, 2], &[1, 1]) {
        println!("SparseVec rejected input: {}", e);
    }

    Ok(())
}
