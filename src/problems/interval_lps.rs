//! Longest palindromic subsequence as an interval DP.
//!
//! `T[i][j]` is the longest palindromic subsequence of `x[i..=j]`:
//!
//! ```text
//! T[i][i] = 1
//! T[i][j] = 2 + T[i+1][j-1]             if x[i] == x[j]   (inner is 0 when j == i+1)
//!         = max(T[i+1][j], T[i][j-1])   otherwise
//! ```
//!
//! Layer `l` fills every interval of length `l + 2`. It agrees with
//! `lcs(x, reverse(x))` on the length, and its reconstruction always spells
//! an actual palindrome.

use crate::table::DpTable;
use crate::traits::TableProblem;
use crate::TableEngine;

#[derive(Clone, Debug)]
pub struct IntervalPalindromeProblem<'a, T> {
    pub x: &'a [T],
}

/// Interval `(i, j)` visited while peeling the palindrome from the outside in.
pub type IntervalState = (usize, usize);

impl<'a, T: PartialEq> IntervalPalindromeProblem<'a, T> {
    pub fn new(x: &'a [T]) -> Self {
        Self { x }
    }
}

impl<'a, T: PartialEq + Clone> IntervalPalindromeProblem<'a, T> {
    /// Spell the palindrome described by a reconstructed interval path.
    pub fn palindrome(&self, path: &[IntervalState]) -> Vec<T> {
        let mut left = Vec::new();
        let mut middle = None;
        for &(i, j) in path {
            if i == j {
                middle = Some(self.x[i].clone());
            } else if self.x[i] == self.x[j] {
                left.push(self.x[i].clone());
            }
        }
        let mut out = left.clone();
        out.extend(middle);
        out.extend(left.into_iter().rev());
        out
    }
}

impl<'a, T: PartialEq> TableProblem for IntervalPalindromeProblem<'a, T> {
    type State = IntervalState;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        // lengths 2..=n
        self.x.len().saturating_sub(1)
    }

    fn init_table(&self) -> DpTable<usize> {
        let n = self.x.len();
        let mut table = DpTable::new(n, n);
        for i in 0..n {
            table[(i, i)] = 1;
        }
        table
    }

    fn fill_layer(&self, layer: usize, table: &mut DpTable<usize>) {
        let len = layer + 2;
        for i in 0..=self.x.len() - len {
            let j = i + len - 1;
            table[(i, j)] = if self.x[i] == self.x[j] {
                let inner = if len == 2 { 0 } else { table[(i + 1, j - 1)] };
                2 + inner
            } else {
                table[(i + 1, j)].max(table[(i, j - 1)])
            };
        }
    }

    fn extract_cost(&self, table: &DpTable<usize>) -> usize {
        match self.x.len() {
            0 => 0,
            n => table[(0, n - 1)],
        }
    }

    fn reconstruct(&self, table: &DpTable<usize>) -> Vec<IntervalState> {
        let mut path = Vec::new();
        if self.x.is_empty() {
            return path;
        }
        let (mut i, mut j) = (0, self.x.len() - 1);
        loop {
            path.push((i, j));
            if i == j {
                break;
            }
            if self.x[i] == self.x[j] {
                if j == i + 1 {
                    break;
                }
                i += 1;
                j -= 1;
            } else if table[(i + 1, j)] >= table[(i, j - 1)] {
                i += 1;
            } else {
                j -= 1;
            }
        }
        path
    }
}

/// One longest palindromic subsequence of `x`.
pub fn palindromic_subsequence<T: PartialEq + Clone>(x: &[T]) -> Vec<T> {
    let problem = IntervalPalindromeProblem::new(x);
    let (_, path) = TableEngine::new(problem.clone()).run();
    problem.palindrome(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn is_palindrome(v: &[char]) -> bool {
        v.iter().eq(v.iter().rev())
    }

    #[test]
    fn visualiser_example() {
        let x = chars("BBABCBCAB");
        let problem = IntervalPalindromeProblem::new(&x);
        let (len, path) = TableEngine::new(problem.clone()).run();
        assert_eq!(len, 7);
        let p = problem.palindrome(&path);
        assert_eq!(p.len(), 7);
        assert!(is_palindrome(&p));
    }

    #[test]
    fn agca_has_a_three_symbol_palindrome() {
        let p = palindromic_subsequence(&chars("agca"));
        assert_eq!(p.len(), 3);
        assert!(is_palindrome(&p));
    }

    #[test]
    fn even_length_palindrome_keeps_both_halves() {
        let p = palindromic_subsequence(&chars("xabbay"));
        assert_eq!(p, chars("abba"));
    }

    #[test]
    fn degenerate_inputs() {
        let empty: Vec<char> = Vec::new();
        assert!(palindromic_subsequence(&empty).is_empty());
        assert_eq!(palindromic_subsequence(&['q']), vec!['q']);
        let (len, _) = TableEngine::new(IntervalPalindromeProblem::new(&empty)).run();
        assert_eq!(len, 0);
    }
}
