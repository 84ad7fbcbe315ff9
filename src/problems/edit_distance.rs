//! Levenshtein edit distance as a layered table problem.
//!
//! Unlike [`lcs`](super::lcs), the base cases are not zero:
//! `T[i][0] = i` and `T[0][j] = j` (delete or insert every symbol).

use crate::table::DpTable;
use crate::traits::TableProblem;
use crate::TableEngine;

#[derive(Clone, Debug)]
pub struct EditDistanceProblem<'a, T> {
    pub x: &'a [T],
    pub y: &'a [T],
}

pub type EditState = (usize, usize);

/// One edit turning `x` into `y`, read off a reconstructed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// `x[i] == y[j]`, no cost.
    Keep { i: usize, j: usize },
    /// Replace `x[i]` by `y[j]`.
    Substitute { i: usize, j: usize },
    /// Drop `x[i]`.
    Delete { i: usize },
    /// Insert `y[j]`.
    Insert { j: usize },
}

impl EditOp {
    pub fn cost(&self) -> usize {
        match self {
            EditOp::Keep { .. } => 0,
            _ => 1,
        }
    }
}

impl<'a, T: PartialEq> EditDistanceProblem<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// Translate a cell path into the edit script it describes.
    pub fn operations(&self, path: &[EditState]) -> Vec<EditOp> {
        path.windows(2)
            .map(|w| {
                let ((pi, pj), (ci, cj)) = (w[0], w[1]);
                match (ci - pi, cj - pj) {
                    (1, 1) if self.x[pi] == self.y[pj] => EditOp::Keep { i: pi, j: pj },
                    (1, 1) => EditOp::Substitute { i: pi, j: pj },
                    (1, 0) => EditOp::Delete { i: pi },
                    _ => EditOp::Insert { j: pj },
                }
            })
            .collect()
    }
}

impl<'a, T: PartialEq> TableProblem for EditDistanceProblem<'a, T> {
    type State = EditState;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.x.len()
    }

    fn init_table(&self) -> DpTable<usize> {
        let (n, m) = (self.x.len(), self.y.len());
        let mut table = DpTable::new(n + 1, m + 1);
        for i in 0..=n {
            table[(i, 0)] = i;
        }
        for j in 0..=m {
            table[(0, j)] = j;
        }
        table
    }

    fn fill_layer(&self, layer: usize, table: &mut DpTable<usize>) {
        let i = layer + 1;
        for j in 1..=self.y.len() {
            table[(i, j)] = if self.x[i - 1] == self.y[j - 1] {
                table[(i - 1, j - 1)]
            } else {
                1 + table[(i - 1, j - 1)]
                    .min(table[(i - 1, j)])
                    .min(table[(i, j - 1)])
            };
        }
    }

    fn extract_cost(&self, table: &DpTable<usize>) -> usize {
        table[(self.x.len(), self.y.len())]
    }

    fn reconstruct(&self, table: &DpTable<usize>) -> Vec<EditState> {
        let (mut i, mut j) = (self.x.len(), self.y.len());
        let mut rev_path = vec![(i, j)];

        while i > 0 || j > 0 {
            let here = table[(i, j)];
            if i > 0 && j > 0 && self.x[i - 1] == self.y[j - 1] && here == table[(i - 1, j - 1)] {
                i -= 1;
                j -= 1;
            } else if i > 0 && j > 0 && here == table[(i - 1, j - 1)] + 1 {
                i -= 1;
                j -= 1;
            } else if i > 0 && here == table[(i - 1, j)] + 1 {
                i -= 1;
            } else {
                j -= 1;
            }
            rev_path.push((i, j));
        }

        rev_path.reverse();
        rev_path
    }
}

/// Minimum number of insertions, deletions and substitutions turning `x` into `y`.
pub fn edit_distance<T: PartialEq>(x: &[T], y: &[T]) -> usize {
    TableEngine::new(EditDistanceProblem::new(x, y)).run().0
}
