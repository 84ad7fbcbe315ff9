//! Minimum-cost string cutting as an interval DP over cut boundaries.
//!
//! A line of length `n` must be cut at every mandatory position. Cutting a
//! segment of length `L` costs `L`, and cuts may happen in any order.
//!
//! Boundaries are `C = [0] ++ sorted(cuts) ++ [n]` and `T[i][j]` is the
//! cheapest way to make every cut strictly between `C[i]` and `C[j]`:
//!
//! ```text
//! T[i][i+1] = 0
//! T[i][j]   = (C[j] - C[i]) + min_{i<k<j} (T[i][k] + T[k][j])
//! ```
//!
//! Layer `l` fills every interval spanning `l + 2` gaps. Shorter spans are
//! always final before a longer span reads them.

use crate::error::{DpError, DpResult};
use crate::table::DpTable;
use crate::traits::TableProblem;
use crate::utils::span_values;
use crate::TableEngine;

#[derive(Clone, Debug)]
pub struct CutProblem {
    length: usize,
    boundaries: Vec<usize>,
}

/// One performed cut, in the order the optimal plan performs them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutStep {
    /// Boundary indices `(i, j)` of the segment being cut.
    pub interval: (usize, usize),
    /// Boundary index `k` the cut is made at.
    pub split: usize,
    /// Position of the cut along the line.
    pub position: usize,
    /// The segment `[start, end]` the cut falls in.
    pub segment: (usize, usize),
    /// Length of that segment, which is what the cut costs.
    pub cost: u64,
}

impl CutProblem {
    /// Build a cut instance for a line of `length`.
    ///
    /// Cuts may be given in any order. Cuts at `0` or `length` and repeated
    /// cuts separate nothing and are dropped.
    ///
    /// # Errors
    /// [`DpError::CutOutOfRange`] if a cut lies beyond `length`, and
    /// [`DpError::CostOverflow`] if `length * cuts` does not fit in a `u64`.
    pub fn new(length: usize, cuts: &[usize]) -> DpResult<Self> {
        if let Some(&cut) = cuts.iter().find(|&&c| c > length) {
            return Err(DpError::CutOutOfRange { cut, length });
        }

        let mut interior: Vec<usize> = cuts
            .iter()
            .copied()
            .filter(|&c| c > 0 && c < length)
            .collect();
        interior.sort_unstable();
        interior.dedup();
        if interior.len() != cuts.len() {
            tracing::debug!(
                given = cuts.len(),
                kept = interior.len(),
                length,
                "dropped endpoint or repeated cuts"
            );
        }

        // every cut costs at most `length`, so this bounds every table cell
        u64::try_from(length)
            .ok()
            .and_then(|l| l.checked_mul(interior.len() as u64))
            .ok_or(DpError::CostOverflow { problem: "cut" })?;

        let mut boundaries = Vec::with_capacity(interior.len() + 2);
        boundaries.push(0);
        boundaries.extend(interior);
        boundaries.push(length);
        Ok(Self { length, boundaries })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Boundary list `C`, including the `0` and `length` sentinels.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Normalised mandatory cut positions.
    pub fn cuts(&self) -> &[usize] {
        &self.boundaries[1..self.boundaries.len() - 1]
    }

    /// Number of boundaries `M`, including sentinels.
    fn m(&self) -> usize {
        self.boundaries.len()
    }

    fn width(&self, i: usize, j: usize) -> u64 {
        (self.boundaries[j] - self.boundaries[i]) as u64
    }

    /// First split index achieving the optimum for interval `(i, j)`.
    fn best_split(&self, table: &DpTable<u64>, i: usize, j: usize) -> usize {
        let mut best_k = i + 1;
        let mut best = u64::MAX;
        for k in i + 1..j {
            let cost = table[(i, k)] + table[(k, j)];
            if cost < best {
                best = cost;
                best_k = k;
            }
        }
        best_k
    }
}

impl TableProblem for CutProblem {
    type State = CutStep;
    type Cost = u64;

    fn num_layers(&self) -> usize {
        // spans 2..=M-1
        self.m().saturating_sub(2)
    }

    fn init_table(&self) -> DpTable<u64> {
        // zero-filled: adjacent boundaries need no cut
        DpTable::new(self.m(), self.m())
    }

    fn fill_layer(&self, layer: usize, table: &mut DpTable<u64>) {
        let span = layer + 2;
        let starts = self.m() - span;
        let values = {
            let table = &*table;
            span_values(starts, |i| {
                let j = i + span;
                let inner = (i + 1..j)
                    .map(|k| table[(i, k)] + table[(k, j)])
                    .min()
                    .unwrap_or_default();
                self.width(i, j) + inner
            })
        };
        for (i, value) in values.into_iter().enumerate() {
            table[(i, i + span)] = value;
        }
    }

    fn extract_cost(&self, table: &DpTable<u64>) -> u64 {
        table[(0, self.m() - 1)]
    }

    fn reconstruct(&self, table: &DpTable<u64>) -> Vec<CutStep> {
        let mut steps = Vec::with_capacity(self.cuts().len());
        let mut stack = vec![(0, self.m() - 1)];

        while let Some((i, j)) = stack.pop() {
            if j < i + 2 {
                continue;
            }
            let k = self.best_split(table, i, j);
            steps.push(CutStep {
                interval: (i, j),
                split: k,
                position: self.boundaries[k],
                segment: (self.boundaries[i], self.boundaries[j]),
                cost: self.width(i, j),
            });
            // left half first
            stack.push((k, j));
            stack.push((i, k));
        }

        steps
    }
}

/// Minimum total cost of making every cut in `cuts` on a line of `length`.
///
/// # Errors
/// [`DpError::CutOutOfRange`] if a cut lies beyond `length`.
pub fn min_cut_cost(length: usize, cuts: &[usize]) -> DpResult<u64> {
    let problem = CutProblem::new(length, cuts)?;
    Ok(TableEngine::new(problem).run().0)
}
