//! Table-filling dynamic programs (DP-Tables)
//!
//! This crate runs small dynamic programs the textbook way: allocate a
//! fixed-size table, fill it in a fixed order, read the answer off it, and
//! walk back through it to recover a witness.
//!
//! ## Core idea
//! 1. Model the recurrence as a *layered* table: base cases, then layers
//!    whose cells only read earlier layers.
//! 2. Implement the [`TableProblem`] trait for that recurrence.
//! 3. Let [`TableEngine`] fill the layers in increasing order, extract the
//!    optimal value and reconstruct an optimal witness.
//!
//! For interval problems a layer is one span length, so the engine's outer
//! loop guarantees every sub-interval is final before a longer one reads it.
//!
//! ## Quick start
//! ```
//! use dp_tables::{TableEngine, problems::cut::CutProblem};
//!
//! let problem = CutProblem::new(20, &[3, 10, 12, 15]).unwrap();
//! let (cost, plan) = TableEngine::new(problem).run();
//! assert_eq!(cost, 45);
//! assert_eq!(plan.len(), 4);
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains:
//! - Longest common subsequence (and longest palindromic subsequence)
//! - Longest common substring
//! - Minimum-cost string cutting
//! - Edit distance
//! - Interval palindromic subsequence with a palindrome witness
//! - Matrix-chain multiplication
//!
//! Every problem also implements [`dag::DependencyGraph`], which exposes the
//! table as a DAG for rendering.

pub mod builder;
pub mod dag;
pub mod engine;
pub mod error;
pub mod problems;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::TableEngineBuilder;
pub use crate::engine::{Snapshot, Solution, TableEngine};
pub use crate::error::{DpError, DpResult};
pub use crate::problems::{
    common_substring::longest_common_substring,
    cut::min_cut_cost,
    edit_distance::edit_distance,
    interval_lps::palindromic_subsequence,
    lcs::{lcs_len, longest_palindromic_subsequence},
};
pub use crate::table::DpTable;
pub use crate::traits::TableProblem;
