use thiserror::Error;

/// Result type alias using cachemat's error.
pub type Result<T> = std::result::Result<T, MatError>;

// Unified error type for cachemat

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("dimension error: {0}")]
    Dimension(String),
    #[error("content length {got} does not match matrix size {expected}")]
    SizeMismatch { expected: usize, got: usize },
    #[error("{op}: incompatible shapes {lhs:?} and {rhs:?} (width x height)")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("matrix {width} by {height} is not square")]
    NotSquare { width: usize, height: usize },
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
    #[error("index ({row}, {col}) is out of bounds of matrix of size ({height}, {width})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    #[error("unsupported operand: {0}")]
    UnsupportedOperand(&'static str),
    #[error("chain multiplication requires at least one matrix")]
    EmptyChain,
    #[error("solve_cached called before any inverse was computed")]
    NotFactored,
}
