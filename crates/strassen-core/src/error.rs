//! Error types for matrix operations.

use thiserror::Error;

/// Result alias used by every fallible matrix operation.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Errors that can occur while building, reshaping or multiplying matrices.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("shape mismatch in {op}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        /// Operation that rejected the operands.
        op: &'static str,
        /// Shape of the left operand as `(rows, cols)`.
        left: (usize, usize),
        /// Shape of the right operand as `(rows, cols)`.
        right: (usize, usize),
    },

    /// A size argument is zero, too large, or inconsistent with the input.
    #[error("invalid size in {op}: {reason}")]
    InvalidSize {
        /// Operation that rejected the size.
        op: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// A square matrix was required.
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NonSquare {
        /// Operation that rejected the operand.
        op: &'static str,
        /// Number of rows of the offending matrix.
        rows: usize,
        /// Number of columns of the offending matrix.
        cols: usize,
    },

    /// Rows of differing lengths were supplied to a constructor.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The matrix has no inverse.
    #[error("matrix is singular (no usable pivot in column {column})")]
    Singular {
        /// First column in which elimination found no pivot.
        column: usize,
    },
}

impl MatrixError {
    /// Builds an [`MatrixError::InvalidSize`] error.
    pub fn invalid_size(op: &'static str, reason: impl Into<String>) -> Self {
        MatrixError::InvalidSize {
            op,
            reason: reason.into(),
        }
    }

    /// Builds a [`MatrixError::ShapeMismatch`] error from two shapes.
    #[must_use]
    pub fn shape_mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        MatrixError::ShapeMismatch { op, left, right }
    }
}
