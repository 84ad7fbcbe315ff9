//! Input validation errors.
//!
//! Problems validate their inputs in their constructors, before any table is
//! allocated. Once constructed, a problem always runs to completion.

/// Result type for problem construction.
pub type DpResult<T> = Result<T, DpError>;

/// Errors raised while validating a problem instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DpError {
    #[error("cut position {cut} lies beyond the end of a line of length {length}")]
    CutOutOfRange { cut: usize, length: usize },

    #[error("matrix chain needs at least two dimensions, got {0}")]
    EmptyChain(usize),

    /// The worst-case total cost of the instance does not fit in a `u64`.
    #[error("worst-case {problem} cost does not fit in 64 bits")]
    CostOverflow { problem: &'static str },
}
