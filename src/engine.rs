//! Generic layered table engine.
//!
//! The engine runs a [`TableProblem`] in three steps:
//! 1. Allocate the table with its base cases.
//! 2. Fill layers `0..T` in strictly increasing order.
//! 3. Extract the optimal cost and reconstruct a witness.
//!
//! Interval problems depend on step 2 visiting span lengths in increasing
//! order; keeping the loop here means no problem can get that wrong.

use serde::Serialize;

use crate::table::DpTable;
use crate::traits::TableProblem;

/// Copy of the table taken right after `layer` was filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<C> {
    pub layer: usize,
    pub table: DpTable<C>,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct Solution<P: TableProblem> {
    pub cost: P::Cost,
    pub path: Vec<P::State>,
    /// Final, fully populated table.
    pub table: DpTable<P::Cost>,
    /// Per-layer snapshots; empty unless enabled on the builder.
    pub snapshots: Vec<Snapshot<P::Cost>>,
}

/// Table engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use dp_tables::{TableEngine, problems::lcs::LcsProblem};
///
/// let x: Vec<char> = "agca".chars().collect();
/// let y: Vec<char> = x.iter().rev().copied().collect();
/// let engine = TableEngine::new(LcsProblem::new(&x, &y));
/// let (len, path) = engine.run();
/// assert_eq!(len, 3);
/// assert_eq!(path.last(), Some(&(4, 4)));
/// ```
pub struct TableEngine<P: TableProblem> {
    problem: P,
    snapshots: bool,
}

impl<P: TableProblem> TableEngine<P> {
    /// Create an engine that does not record snapshots.
    pub fn new(problem: P) -> Self {
        Self::with_snapshots(problem, false)
    }

    /// Create an engine, recording a snapshot after every layer if `snapshots`.
    pub fn with_snapshots(problem: P, snapshots: bool) -> Self {
        Self { problem, snapshots }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Whether per-layer snapshots are recorded.
    pub fn records_snapshots(&self) -> bool {
        self.snapshots
    }

    /// Fill the table layer by layer, returning the final table and any
    /// snapshots taken on the way.
    fn fill_table(&self) -> (DpTable<P::Cost>, Vec<Snapshot<P::Cost>>) {
        let layers = self.problem.num_layers();
        let mut table = self.problem.init_table();
        let mut snapshots = Vec::with_capacity(if self.snapshots { layers } else { 0 });

        for layer in 0..layers {
            let span = tracing::trace_span!("fill_layer", layer);
            let _enter = span.enter();
            self.problem.fill_layer(layer, &mut table);
            if self.snapshots {
                snapshots.push(Snapshot {
                    layer,
                    table: table.clone(),
                });
            }
        }

        (table, snapshots)
    }

    /// Run the DP and return `(optimal_cost, witness_states)`.
    pub fn run(&self) -> (P::Cost, Vec<P::State>) {
        let Solution { cost, path, .. } = self.solve();
        (cost, path)
    }

    /// Run the DP and keep the table and snapshots alongside the answer.
    ///
    /// # Panics
    /// Panics if the problem indexes outside the table it allocated.
    pub fn solve(&self) -> Solution<P> {
        let span = tracing::debug_span!(
            "table_run",
            layers = self.problem.num_layers(),
            snapshots = self.snapshots
        );
        let _enter = span.enter();

        let (table, snapshots) = self.fill_table();
        let cost = self.problem.extract_cost(&table);
        let path = {
            let span = tracing::trace_span!("reconstruct");
            let _enter = span.enter();
            self.problem.reconstruct(&table)
        };
        tracing::debug!(
            ?cost,
            rows = table.rows(),
            cols = table.cols(),
            path_len = path.len(),
            "table filled"
        );

        Solution {
            cost,
            path,
            table,
            snapshots,
        }
    }
}
