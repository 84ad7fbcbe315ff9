//! Assorted utilities and helpers.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reverse a sequence into a new `Vec`.
#[inline]
pub fn reversed<T: Clone>(xs: &[T]) -> Vec<T> {
    xs.iter().rev().cloned().collect()
}

/// Evaluate `cell(i)` for every interval start `i` in `0..count`.
///
/// Interval problems call this once per span length: cells of one span only
/// read cells of shorter spans, so they are independent of each other. With
/// the `parallel` feature they are computed on the rayon pool.
#[cfg(feature = "parallel")]
pub fn span_values<C, F>(count: usize, cell: F) -> Vec<C>
where
    C: Send,
    F: Fn(usize) -> C + Sync + Send,
{
    (0..count).into_par_iter().map(cell).collect()
}

#[cfg(not(feature = "parallel"))]
pub fn span_values<C, F>(count: usize, cell: F) -> Vec<C>
where
    F: Fn(usize) -> C,
{
    (0..count).map(cell).collect()
}
