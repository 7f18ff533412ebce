use std::path::PathBuf;

/// Errors returned by matrix construction, access, I/O, and linear algebra.
///
/// Every fallible operation validates its own preconditions and fails
/// immediately; nothing clamps inputs or returns partial results.
///
/// ```
/// use factrix::{Error, Matrix};
///
/// let err = Matrix::<f64>::zeros(0, 3).unwrap_err();
/// assert!(matches!(err, Error::InvalidDimension { .. }));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested row or column count was zero.
    #[error("matrix dimensions must be positive (got {rows}x{cols})")]
    InvalidDimension { rows: usize, cols: usize },

    /// Nested or flat input data does not describe a rectangular matrix.
    #[error("invalid matrix shape: {0}")]
    InvalidShape(String),

    /// A checked element access was outside the matrix bounds.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand shapes are incompatible for the named operation.
    #[error("matrix dimension mismatch in {op}")]
    DimensionMismatch { op: &'static str },

    /// A square-only operation was applied to a rectangular matrix.
    #[error("operation requires a square matrix (got {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// The matrix is singular to working precision.
    #[error("matrix is singular")]
    Singular,

    /// A matrix file could not be opened or read.
    #[error("cannot read matrix file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
