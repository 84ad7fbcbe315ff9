//! Matrix-chain multiplication as an interval DP.
//!
//! Classic DP:
//! - Given dimensions p[0..=n], matrix `A_k` (1-based) is `p[k-1] x p[k]`,
//! - Find the parenthesization minimizing scalar multiplications.
//!
//! It has the same shape as [`cut`](super::cut): interval `(i, j)` over the
//! dimension boundaries covers `A_{i+1} .. A_j`, and splitting at `k` costs
//! `p[i] * p[k] * p[j]`. Layer `l` fills every interval spanning `l + 2`
//! gaps between boundaries.

use std::collections::HashMap;

use crate::error::{DpError, DpResult};
use crate::table::DpTable;
use crate::traits::TableProblem;
use crate::utils::span_values;

/// Matrix-chain DP instance.
#[derive(Clone, Debug)]
pub struct MatrixChainProblem {
    /// Dimensions p[0..=n], with n matrices.
    p: Vec<usize>,
}

/// Split decision: the product over boundaries `(i, j)` is split at `k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct McState {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl MatrixChainProblem {
    /// # Errors
    /// [`DpError::EmptyChain`] if fewer than two dimensions are given, and
    /// [`DpError::CostOverflow`] if a parenthesization could cost more than
    /// a `u64` holds.
    pub fn new(p: Vec<usize>) -> DpResult<Self> {
        if p.len() < 2 {
            return Err(DpError::EmptyChain(p.len()));
        }

        // n - 1 products of at most max^3 each
        let max = p.iter().copied().max().unwrap_or_default() as u64;
        let products = (p.len() - 2) as u64;
        products
            .checked_mul(max)
            .and_then(|v| v.checked_mul(max))
            .and_then(|v| v.checked_mul(max))
            .ok_or(DpError::CostOverflow {
                problem: "matrix chain",
            })?;

        Ok(Self { p })
    }

    pub fn dims(&self) -> &[usize] {
        &self.p
    }

    fn m(&self) -> usize {
        self.p.len()
    }

    fn split_cost(&self, i: usize, k: usize, j: usize) -> u64 {
        (self.p[i] as u64) * (self.p[k] as u64) * (self.p[j] as u64)
    }

    fn best_split(&self, table: &DpTable<u64>, i: usize, j: usize) -> usize {
        let mut best_k = i + 1;
        let mut best = u64::MAX;
        for k in i + 1..j {
            let cost = table[(i, k)] + table[(k, j)] + self.split_cost(i, k, j);
            if cost < best {
                best = cost;
                best_k = k;
            }
        }
        best_k
    }

    /// Render split decisions as a fully parenthesized product, e.g. `((A1A2)A3)`.
    pub fn parenthesization(&self, states: &[McState]) -> String {
        let splits: HashMap<(usize, usize), usize> =
            states.iter().map(|s| ((s.i, s.j), s.k)).collect();

        fn render(out: &mut String, splits: &HashMap<(usize, usize), usize>, i: usize, j: usize) {
            match splits.get(&(i, j)) {
                Some(&k) if j > i + 1 => {
                    out.push('(');
                    render(out, splits, i, k);
                    render(out, splits, k, j);
                    out.push(')');
                }
                _ => {
                    out.push('A');
                    out.push_str(&j.to_string());
                }
            }
        }

        let mut out = String::new();
        render(&mut out, &splits, 0, self.m() - 1);
        out
    }
}

impl TableProblem for MatrixChainProblem {
    type State = McState;
    type Cost = u64;

    fn num_layers(&self) -> usize {
        self.m().saturating_sub(2)
    }

    fn init_table(&self) -> DpTable<u64> {
        DpTable::new(self.m(), self.m())
    }

    fn fill_layer(&self, layer: usize, table: &mut DpTable<u64>) {
        let span = layer + 2;
        let values = {
            let table = &*table;
            span_values(self.m() - span, |i| {
                let j = i + span;
                (i + 1..j)
                    .map(|k| table[(i, k)] + table[(k, j)] + self.split_cost(i, k, j))
                    .min()
                    .unwrap_or_default()
            })
        };
        for (i, value) in values.into_iter().enumerate() {
            table[(i, i + span)] = value;
        }
    }

    fn extract_cost(&self, table: &DpTable<u64>) -> u64 {
        table[(0, self.m() - 1)]
    }

    fn reconstruct(&self, table: &DpTable<u64>) -> Vec<McState> {
        let mut states = Vec::new();
        let mut stack = vec![(0, self.m() - 1)];
        while let Some((i, j)) = stack.pop() {
            if j < i + 2 {
                continue;
            }
            let k = self.best_split(table, i, j);
            states.push(McState { i, j, k });
            stack.push((k, j));
            stack.push((i, k));
        }
        states
    }
}
