use thiserror::Error;

/// Failures reported by the maze algorithms.
///
/// Everything here is a precondition or outcome the caller can act on.
/// Internal invariants (such as the traversal stack emptying mid-walk)
/// are unrepresentable by construction and have no variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("row or column count cannot be zero (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("start index {0} is not a cell position in this grid")]
    InvalidStart(usize),

    #[error("end index {0} is not a cell position in this grid")]
    InvalidEnd(usize),

    #[error("no path connects the given cells")]
    NoPathFound,

    #[error("output buffer holds {actual} bytes, the path needs {expected}")]
    OutputTooSmall { expected: usize, actual: usize },
}
