//! Longest Common Subsequence (LCS) as a layered table problem.
//!
//! Layers are rows: layer `i` fills row `i + 1` of the `(n+1) x (m+1)` table
//! from row `i`. Row 0 and column 0 stay zero (empty prefix).
//!
//! Feeding a sequence and its reverse yields the length of its longest
//! palindromic subsequence. The witness recovered in that case is a common
//! subsequence, not necessarily a palindrome; use
//! [`interval_lps`](super::interval_lps) when the palindrome itself is needed.

use crate::table::DpTable;
use crate::traits::TableProblem;
use crate::utils::reversed;
use crate::TableEngine;

#[derive(Clone, Debug)]
pub struct LcsProblem<'a, T> {
    pub x: &'a [T],
    pub y: &'a [T],
}

/// State along the reconstructed path: a DP cell (row, col).
pub type LcsState = (usize, usize);

impl<'a, T: PartialEq> LcsProblem<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    fn n(&self) -> usize {
        self.x.len()
    }

    fn m(&self) -> usize {
        self.y.len()
    }
}

impl<'a, T: PartialEq + Clone> LcsProblem<'a, T> {
    /// Extract the common subsequence spelled by the diagonal match steps of `path`.
    pub fn subsequence(&self, path: &[LcsState]) -> Vec<T> {
        path.windows(2)
            .filter_map(|w| {
                let (prev, cur) = (w[0], w[1]);
                let diagonal = cur.0 == prev.0 + 1 && cur.1 == prev.1 + 1;
                (diagonal && self.x[prev.0] == self.y[prev.1]).then(|| self.x[prev.0].clone())
            })
            .collect()
    }
}

impl<'a, T: PartialEq> TableProblem for LcsProblem<'a, T> {
    type State = LcsState;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        // one layer per symbol of x
        self.n()
    }

    fn init_table(&self) -> DpTable<usize> {
        DpTable::new(self.n() + 1, self.m() + 1)
    }

    fn fill_layer(&self, layer: usize, table: &mut DpTable<usize>) {
        let i = layer;
        for j in 0..self.m() {
            table[(i + 1, j + 1)] = if self.x[i] == self.y[j] {
                table[(i, j)] + 1
            } else {
                table[(i, j + 1)].max(table[(i + 1, j)])
            };
        }
    }

    fn extract_cost(&self, table: &DpTable<usize>) -> usize {
        table[(self.n(), self.m())]
    }

    fn reconstruct(&self, table: &DpTable<usize>) -> Vec<LcsState> {
        let (mut i, mut j) = (self.n(), self.m());
        let mut rev_path = Vec::with_capacity(i + j + 1);
        rev_path.push((i, j));

        while i > 0 && j > 0 {
            if self.x[i - 1] == self.y[j - 1] {
                i -= 1;
                j -= 1;
            } else if table[(i - 1, j)] >= table[(i, j - 1)] {
                i -= 1;
            } else {
                j -= 1;
            }
            rev_path.push((i, j));
        }
        // Walk the remaining edge of the table back to the origin.
        while i > 0 {
            i -= 1;
            rev_path.push((i, j));
        }
        while j > 0 {
            j -= 1;
            rev_path.push((i, j));
        }

        rev_path.reverse();
        rev_path
    }
}

/// Length of the longest common subsequence of `x` and `y`.
pub fn lcs_len<T: PartialEq>(x: &[T], y: &[T]) -> usize {
    TableEngine::new(LcsProblem::new(x, y)).run().0
}

/// Length of the longest palindromic subsequence of `x`, computed as
/// `lcs_len(x, reverse(x))`.
pub fn longest_palindromic_subsequence<T: PartialEq + Clone>(x: &[T]) -> usize {
    let y = reversed(x);
    lcs_len(x, &y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn valid_lcs_path(path: &[(usize, usize)], n: usize, m: usize) -> bool {
        if path.first() != Some(&(0, 0)) || path.last() != Some(&(n, m)) {
            return false;
        }
        path.windows(2).all(|w| {
            let di = w[1].0 as isize - w[0].0 as isize;
            let dj = w[1].1 as isize - w[0].1 as isize;
            matches!((di, dj), (1, 0) | (0, 1) | (1, 1))
        })
    }

    #[test]
    fn palindrome_example_from_notes() {
        let x = chars("agca");
        assert_eq!(longest_palindromic_subsequence(&x), 3);

        let y = reversed(&x);
        let solution = TableEngine::new(LcsProblem::new(&x, &y)).solve();
        assert_eq!(solution.table.row(4), &[0, 1, 2, 2, 3]);
        assert!(valid_lcs_path(&solution.path, 4, 4));
    }

    #[test]
    fn e2e_example_pair() {
        let s = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
        let t = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
        let problem = LcsProblem::new(s.as_slice(), t.as_slice());
        let (len, path) = TableEngine::new(problem.clone()).run();
        assert_eq!(len, 20);
        assert!(valid_lcs_path(&path, s.len(), t.len()));
        assert_eq!(problem.subsequence(&path).len(), 20);
    }

    #[test]
    fn witness_is_common_subsequence() {
        let x = chars("ABCB");
        let y = chars("BDCB");
        let problem = LcsProblem::new(&x, &y);
        let (len, path) = TableEngine::new(problem.clone()).run();
        assert_eq!(len, 3);
        assert_eq!(problem.subsequence(&path), chars("BCB"));
    }

    #[test]
    fn edge_cases_empty_and_identical() {
        let empty: Vec<char> = Vec::new();
        let abc = chars("ABC");
        let (len, path) = TableEngine::new(LcsProblem::new(&empty, &abc)).run();
        assert_eq!(len, 0);
        assert!(valid_lcs_path(&path, 0, 3));

        let (len, path) = TableEngine::new(LcsProblem::new(&empty, &empty)).run();
        assert_eq!(len, 0);
        assert_eq!(path, vec![(0, 0)]);

        let hello = chars("HELLO");
        assert_eq!(lcs_len(&hello, &hello), hello.len());
    }

    #[test]
    fn single_symbols() {
        assert_eq!(lcs_len(&['a'], &['a']), 1);
        assert_eq!(lcs_len(&['a'], &['b']), 0);
        assert_eq!(longest_palindromic_subsequence(&['z']), 1);
    }
}
