//! Table problems runnable on [`TableEngine`](crate::engine::TableEngine).
//!
//! Sequence problems, layered by prefix row:
//! - [`lcs`]              : Longest common subsequence (and palindromic subsequence via reversal).
//! - [`common_substring`] : Longest common contiguous run.
//! - [`edit_distance`]    : Levenshtein distance with an edit script.
//!
//! Interval problems, layered by span length:
//! - [`cut`]              : Minimum-cost string cutting.
//! - [`interval_lps`]     : Longest palindromic subsequence with a palindrome witness.
//! - [`matrix_chain`]     : Matrix-chain multiplication.

pub mod common_substring;
pub mod cut;
pub mod edit_distance;
pub mod interval_lps;
pub mod lcs;
pub mod matrix_chain;
