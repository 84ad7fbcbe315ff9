//! Core trait definitions for layered table-filling dynamic programs.
//!
//! To run a DP through [`TableEngine`](crate::engine::TableEngine), implement
//! [`TableProblem`] for a struct that captures the instance (sequences,
//! boundaries, dimensions).
//!
//! The trait encodes the structure shared by every problem in this crate:
//! - A fixed-size table allocated up front with its base cases.
//! - Layers `0..num_layers()`, filled strictly in increasing order. A layer
//!   is a prefix row for sequence problems and a span length for interval
//!   problems.
//! - Answer extraction and witness reconstruction from the finished table.
//!
//! The engine owns the outer loop over layers; implementations never decide
//! the evaluation order themselves.

use std::fmt::Debug;

use crate::table::DpTable;

/// A table-filling dynamic program instance.
///
/// Semantics:
/// - `init_table()` returns a table whose base-case cells are final.
/// - `fill_layer(l, table)` computes every cell belonging to layer `l`. It may
///   read cells of layers `< l`, base cells, and cells of layer `l` that it
///   has already written.
/// - After all layers, `extract_cost` and `reconstruct` only read the table.
pub trait TableProblem {
    /// A single step of the reconstructed witness.
    /// For sequence DPs a `(row, col)` cell; for interval DPs a split decision.
    type State: Clone + PartialEq + Debug;

    /// Value stored in each table cell.
    type Cost: Copy + Ord + Default + Debug;

    /// Number of layers filled after the base cases.
    fn num_layers(&self) -> usize;

    /// Allocate the table with its final dimensions and base cases.
    fn init_table(&self) -> DpTable<Self::Cost>;

    /// Compute every cell of `layer`.
    fn fill_layer(&self, layer: usize, table: &mut DpTable<Self::Cost>);

    /// Read the optimal objective from a completely filled table.
    fn extract_cost(&self, table: &DpTable<Self::Cost>) -> Self::Cost;

    /// Recover one optimal witness from a completely filled table.
    fn reconstruct(&self, table: &DpTable<Self::Cost>) -> Vec<Self::State>;
}
