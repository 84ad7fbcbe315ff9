//! Example: longest palindromic subsequence two ways.
//!
//! Run with:
//! `cargo run --example palindrome`

use dp_tables::{
    problems::{interval_lps::IntervalPalindromeProblem, lcs::LcsProblem},
    utils::reversed,
    TableEngine,
};

fn main() {
    let x: Vec<char> = "agca".chars().collect();
    let y = reversed(&x);

    // LCS against the reversed sequence: prefix-row layers.
    let solution = TableEngine::new(LcsProblem::new(&x, &y)).solve();
    println!("x: {x:?}");
    println!("y: {y:?}");
    println!("after");
    println!("{}", solution.table);
    println!("answer: {}", solution.cost);

    // Interval form: span-length layers, and the palindrome itself.
    let interval = IntervalPalindromeProblem::new(&x);
    let (len, path) = TableEngine::new(interval.clone()).run();
    let palindrome: String = interval.palindrome(&path).into_iter().collect();
    println!("interval answer: {len} ({palindrome})");
}
