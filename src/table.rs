//! Fixed-size DP table storage.
//!
//! A `DpTable` is allocated once with its final dimensions and stored
//! row-major in a single `Vec`. Problems index it by `(row, col)`.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::Serialize;

/// Row-major two-dimensional table of DP values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DpTable<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

impl<C: Clone + Default> DpTable<C> {
    /// Allocate a `rows x cols` table filled with `C::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, C::default())
    }
}

impl<C: Clone> DpTable<C> {
    /// Allocate a `rows x cols` table with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: C) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<C> DpTable<C> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the table has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Borrow row `row` as a slice.
    pub fn row(&self, row: usize) -> &[C] {
        assert!(row < self.rows, "row {row} outside table of {} rows", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[C]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: C) {
        let idx = self.offset(row, col);
        self.cells[idx] = value;
    }
}

impl<C: Copy> DpTable<C> {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C {
        self.cells[self.offset(row, col)]
    }
}

impl<C: Copy + Ord> DpTable<C> {
    /// First maximal cell in row-major order, as `(row, col, value)`.
    pub fn max_cell(&self) -> Option<(usize, usize, C)> {
        let mut best: Option<(usize, C)> = None;
        for (idx, &value) in self.cells.iter().enumerate() {
            match best {
                Some((_, b)) if value <= b => {}
                _ => best = Some((idx, value)),
            }
        }
        best.map(|(idx, value)| (idx / self.cols, idx % self.cols, value))
    }
}

impl<C> Index<(usize, usize)> for DpTable<C> {
    type Output = C;

    fn index(&self, (row, col): (usize, usize)) -> &C {
        &self.cells[self.offset(row, col)]
    }
}

impl<C> IndexMut<(usize, usize)> for DpTable<C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut C {
        let idx = self.offset(row, col);
        &mut self.cells[idx]
    }
}

/// Nested-list layout, one row per line: `[[0, 0],\n [0, 1]]`.
impl<C: fmt::Display> fmt::Display for DpTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return f.write_str("[]");
        }
        f.write_str("[")?;
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                f.write_str(",\n ")?;
            }
            f.write_str("[")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::DpTable;

    #[test]
    fn zero_sized_table_is_empty() {
        let t: DpTable<u32> = DpTable::new(0, 0);
        assert!(t.is_empty());
        assert_eq!(t.iter_rows().count(), 0);
        assert_eq!(t.max_cell(), None);
        assert_eq!(t.to_string(), "[]");
    }

    #[test]
    fn row_major_layout() {
        let mut t: DpTable<u32> = DpTable::new(2, 3);
        t[(1, 2)] = 7;
        t.set(0, 1, 4);
        assert_eq!(t.row(0), &[0, 4, 0]);
        assert_eq!(t.row(1), &[0, 0, 7]);
        assert_eq!(t.get(1, 2), 7);
    }

    #[test]
    fn max_cell_prefers_first_in_row_major_order() {
        let mut t: DpTable<u32> = DpTable::new(3, 3);
        t[(1, 2)] = 5;
        t[(2, 0)] = 5;
        assert_eq!(t.max_cell(), Some((1, 2, 5)));
    }

    #[test]
    fn display_matches_nested_list_layout() {
        let mut t: DpTable<u32> = DpTable::new(2, 2);
        t[(1, 1)] = 1;
        assert_eq!(t.to_string(), "[[0, 0],\n [0, 1]]");
    }

    #[test]
    fn rows_with_zero_columns() {
        let t: DpTable<u32> = DpTable::new(3, 0);
        assert_eq!(t.iter_rows().count(), 3);
        assert!(t.iter_rows().all(|r| r.is_empty()));
        assert_eq!(t.to_string(), "[[],\n [],\n []]");
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_index_panics() {
        let t: DpTable<u32> = DpTable::new(2, 2);
        let _ = t[(2, 0)];
    }
}
