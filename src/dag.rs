//! Dependency graphs of filled DP tables.
//!
//! Every table problem is a DAG: a cell depends on the cells its recurrence
//! reads. [`DpDag`] flattens that DAG into serialisable node and edge lists,
//! with the cells and edges of the reconstructed witness flagged, so an
//! external renderer can draw the table and highlight the optimal path.

use std::collections::HashSet;

use serde::Serialize;

use crate::engine::Solution;
use crate::problems::{
    common_substring::CommonSubstringProblem, cut::CutProblem,
    edit_distance::EditDistanceProblem, interval_lps::IntervalPalindromeProblem,
    lcs::LcsProblem, matrix_chain::MatrixChainProblem,
};
use crate::traits::TableProblem;

/// `(row, col)` of a table cell.
pub type Cell = (usize, usize);

/// Which recurrence term an edge stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// `(i-1, j-1) -> (i, j)`
    Diagonal,
    /// `(i-1, j) -> (i, j)`
    Vertical,
    /// `(i, j-1) -> (i, j)`
    Horizontal,
    /// One half of an interval split at `k`.
    Split,
    /// `(i+1, j-1) -> (i, j)` when both ends match.
    Inner,
    /// `(i+1, j) -> (i, j)`
    SkipLeft,
    /// `(i, j-1) -> (i, j)`
    SkipRight,
}

/// A problem whose table cells and dependencies can be enumerated.
pub trait DependencyGraph: TableProblem {
    /// Cells that carry a meaningful value, in row-major order.
    fn cells(&self) -> Vec<Cell>;

    /// Cells `cell` is computed from, with the kind of each dependency.
    fn predecessors(&self, cell: Cell) -> Vec<(Cell, EdgeKind)>;

    /// Cells touched by a reconstructed witness.
    fn path_cells(&self, path: &[Self::State]) -> Vec<Cell>;

    /// Dependencies `(from, to)` the witness actually follows.
    fn path_edges(&self, path: &[Self::State]) -> Vec<(Cell, Cell)>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DagNode<C> {
    pub id: usize,
    pub row: usize,
    pub col: usize,
    pub value: C,
    pub on_path: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DagEdge {
    pub from: usize,
    pub to: usize,
    pub kind: EdgeKind,
    pub active: bool,
}

/// Flattened dependency graph of one solved instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DpDag<C> {
    pub rows: usize,
    pub cols: usize,
    pub nodes: Vec<DagNode<C>>,
    pub edges: Vec<DagEdge>,
}

impl<C: Copy> DpDag<C> {
    /// Build the graph of `problem` from a finished `solution`.
    pub fn build<P>(problem: &P, solution: &Solution<P>) -> Self
    where
        P: DependencyGraph<Cost = C>,
    {
        let table = &solution.table;
        let cols = table.cols();
        let id = |(r, c): Cell| r * cols + c;

        let on_path: HashSet<Cell> = problem.path_cells(&solution.path).into_iter().collect();
        let active: HashSet<(Cell, Cell)> =
            problem.path_edges(&solution.path).into_iter().collect();

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for cell in problem.cells() {
            nodes.push(DagNode {
                id: id(cell),
                row: cell.0,
                col: cell.1,
                value: table.get(cell.0, cell.1),
                on_path: on_path.contains(&cell),
            });
            for (from, kind) in problem.predecessors(cell) {
                edges.push(DagEdge {
                    from: id(from),
                    to: id(cell),
                    kind,
                    active: active.contains(&(from, cell)),
                });
            }
        }

        Self {
            rows: table.rows(),
            cols,
            nodes,
            edges,
        }
    }

    pub fn active_edges(&self) -> impl Iterator<Item = &DagEdge> + '_ {
        self.edges.iter().filter(|e| e.active)
    }
}

fn grid_cells(rows: usize, cols: usize) -> Vec<Cell> {
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .collect()
}

fn grid_predecessors((i, j): Cell) -> Vec<(Cell, EdgeKind)> {
    let mut preds = Vec::with_capacity(3);
    if i > 0 {
        preds.push(((i - 1, j), EdgeKind::Vertical));
    }
    if j > 0 {
        preds.push(((i, j - 1), EdgeKind::Horizontal));
    }
    if i > 0 && j > 0 {
        preds.push(((i - 1, j - 1), EdgeKind::Diagonal));
    }
    preds
}

/// Consecutive cells of a forward path, as dependency edges.
fn chain_edges(path: &[Cell]) -> Vec<(Cell, Cell)> {
    path.windows(2).map(|w| (w[0], w[1])).collect()
}

fn upper_triangle(m: usize, offset: usize) -> Vec<Cell> {
    (0..m)
        .flat_map(|i| (i + offset..m).map(move |j| (i, j)))
        .collect()
}

fn split_predecessors((i, j): Cell) -> Vec<(Cell, EdgeKind)> {
    (i + 1..j)
        .flat_map(|k| [((i, k), EdgeKind::Split), ((k, j), EdgeKind::Split)])
        .collect()
}

/// Cells and edges of a split tree given as `(i, j, k)` decisions.
fn split_path(
    root: Cell,
    splits: impl Iterator<Item = (usize, usize, usize)>,
) -> (Vec<Cell>, Vec<(Cell, Cell)>) {
    let mut cells = vec![root];
    let mut edges = Vec::new();
    for (i, j, k) in splits {
        cells.push((i, k));
        cells.push((k, j));
        edges.push(((i, k), (i, j)));
        edges.push(((k, j), (i, j)));
    }
    (cells, edges)
}

impl<'a, T: PartialEq> DependencyGraph for LcsProblem<'a, T> {
    fn cells(&self) -> Vec<Cell> {
        grid_cells(self.x.len() + 1, self.y.len() + 1)
    }

    fn predecessors(&self, cell: Cell) -> Vec<(Cell, EdgeKind)> {
        grid_predecessors(cell)
    }

    fn path_cells(&self, path: &[Cell]) -> Vec<Cell> {
        path.to_vec()
    }

    fn path_edges(&self, path: &[Cell]) -> Vec<(Cell, Cell)> {
        chain_edges(path)
    }
}

impl<'a, T: PartialEq> DependencyGraph for EditDistanceProblem<'a, T> {
    fn cells(&self) -> Vec<Cell> {
        grid_cells(self.x.len() + 1, self.y.len() + 1)
    }

    fn predecessors(&self, cell: Cell) -> Vec<(Cell, EdgeKind)> {
        grid_predecessors(cell)
    }

    fn path_cells(&self, path: &[Cell]) -> Vec<Cell> {
        path.to_vec()
    }

    fn path_edges(&self, path: &[Cell]) -> Vec<(Cell, Cell)> {
        chain_edges(path)
    }
}

impl<'a, T: PartialEq> DependencyGraph for CommonSubstringProblem<'a, T> {
    fn cells(&self) -> Vec<Cell> {
        grid_cells(self.x.len() + 1, self.y.len() + 1)
    }

    /// A streak only ever extends along the diagonal.
    fn predecessors(&self, (i, j): Cell) -> Vec<(Cell, EdgeKind)> {
        if i > 0 && j > 0 {
            vec![((i - 1, j - 1), EdgeKind::Diagonal)]
        } else {
            Vec::new()
        }
    }

    fn path_cells(&self, path: &[Cell]) -> Vec<Cell> {
        path.to_vec()
    }

    fn path_edges(&self, path: &[Cell]) -> Vec<(Cell, Cell)> {
        chain_edges(path)
    }
}

impl<'a, T: PartialEq> DependencyGraph for IntervalPalindromeProblem<'a, T> {
    fn cells(&self) -> Vec<Cell> {
        upper_triangle(self.x.len(), 0)
    }

    fn predecessors(&self, (i, j): Cell) -> Vec<(Cell, EdgeKind)> {
        if i == j {
            Vec::new()
        } else if self.x[i] == self.x[j] {
            if j > i + 1 {
                vec![((i + 1, j - 1), EdgeKind::Inner)]
            } else {
                Vec::new()
            }
        } else {
            vec![
                ((i + 1, j), EdgeKind::SkipLeft),
                ((i, j - 1), EdgeKind::SkipRight),
            ]
        }
    }

    fn path_cells(&self, path: &[Cell]) -> Vec<Cell> {
        path.to_vec()
    }

    /// The path runs outside-in; dependencies point inside-out.
    fn path_edges(&self, path: &[Cell]) -> Vec<(Cell, Cell)> {
        path.windows(2).map(|w| (w[1], w[0])).collect()
    }
}

impl DependencyGraph for CutProblem {
    fn cells(&self) -> Vec<Cell> {
        upper_triangle(self.boundaries().len(), 1)
    }

    fn predecessors(&self, cell: Cell) -> Vec<(Cell, EdgeKind)> {
        split_predecessors(cell)
    }

    fn path_cells(&self, path: &[Self::State]) -> Vec<Cell> {
        let root = (0, self.boundaries().len() - 1);
        split_path(root, path.iter().map(|s| (s.interval.0, s.interval.1, s.split))).0
    }

    fn path_edges(&self, path: &[Self::State]) -> Vec<(Cell, Cell)> {
        let root = (0, self.boundaries().len() - 1);
        split_path(root, path.iter().map(|s| (s.interval.0, s.interval.1, s.split))).1
    }
}

impl DependencyGraph for MatrixChainProblem {
    fn cells(&self) -> Vec<Cell> {
        upper_triangle(self.dims().len(), 1)
    }

    fn predecessors(&self, cell: Cell) -> Vec<(Cell, EdgeKind)> {
        split_predecessors(cell)
    }

    fn path_cells(&self, path: &[Self::State]) -> Vec<Cell> {
        let root = (0, self.dims().len() - 1);
        split_path(root, path.iter().map(|s| (s.i, s.j, s.k))).0
    }

    fn path_edges(&self, path: &[Self::State]) -> Vec<(Cell, Cell)> {
        let root = (0, self.dims().len() - 1);
        split_path(root, path.iter().map(|s| (s.i, s.j, s.k))).1
    }
}
