//! Longest common substring (contiguous run) as a layered table problem.
//!
//! Same table shape and row layering as [`lcs`](super::lcs), but a mismatch
//! resets the streak to zero instead of carrying the best neighbour forward.
//! The answer can end anywhere, so it is the table maximum rather than the
//! bottom-right cell.

use crate::table::DpTable;
use crate::traits::TableProblem;
use crate::TableEngine;

#[derive(Clone, Debug)]
pub struct CommonSubstringProblem<'a, T> {
    pub x: &'a [T],
    pub y: &'a [T],
}

/// State along the reconstructed run: a DP cell (row, col).
pub type SubstringState = (usize, usize);

impl<'a, T: PartialEq> CommonSubstringProblem<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// The slice of `x` covered by a reconstructed run.
    ///
    /// The run's cells are the diagonal `(r, c)` with `x[r-1] == y[c-1]`;
    /// an empty run yields an empty slice.
    pub fn substring(&self, path: &[SubstringState]) -> &'a [T] {
        match (path.first(), path.last()) {
            (Some(&(first, _)), Some(&(last, _))) => &self.x[first - 1..last],
            _ => &self.x[..0],
        }
    }
}

impl<'a, T: PartialEq> TableProblem for CommonSubstringProblem<'a, T> {
    type State = SubstringState;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.x.len()
    }

    fn init_table(&self) -> DpTable<usize> {
        DpTable::new(self.x.len() + 1, self.y.len() + 1)
    }

    fn fill_layer(&self, layer: usize, table: &mut DpTable<usize>) {
        let i = layer;
        for j in 0..self.y.len() {
            table[(i + 1, j + 1)] = if self.x[i] == self.y[j] {
                table[(i, j)] + 1
            } else {
                0
            };
        }
    }

    fn extract_cost(&self, table: &DpTable<usize>) -> usize {
        table.max_cell().map_or(0, |(_, _, v)| v)
    }

    /// Cells of the first maximal run, from its first symbol to its last.
    fn reconstruct(&self, table: &DpTable<usize>) -> Vec<SubstringState> {
        let Some((row, col, len)) = table.max_cell() else {
            return Vec::new();
        };
        (0..len).rev().map(|k| (row - k, col - k)).collect()
    }
}

/// Length of the longest contiguous run shared by `x` and `y`.
pub fn longest_common_substring<T: PartialEq>(x: &[T], y: &[T]) -> usize {
    TableEngine::new(CommonSubstringProblem::new(x, y)).run().0
}
