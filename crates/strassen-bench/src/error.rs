//! Errors raised by the benchmark harness.

use strassen_core::MatrixError;
use thiserror::Error;

/// Errors that can occur while configuring or running a benchmark.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum HarnessError {
    /// A matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// The matrix text contained no rows.
    #[error("matrix input is empty")]
    EmptyInput,

    /// An entry of the matrix text is missing or not a number.
    #[error("cannot parse entry {col} of row {row}: {value:?}")]
    InvalidEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The text found there, empty when the entry is missing.
        value: String,
    },

    /// The tolerance is not a positive finite number.
    #[error("tolerance must be a positive finite number, got {0}")]
    InvalidTolerance(f64),

    /// The benchmark needs an invertible, hence square, matrix.
    #[error("benchmark input must be square, got {rows}x{cols}")]
    NonSquareInput {
        /// Rows of the input.
        rows: usize,
        /// Columns of the input.
        cols: usize,
    },
}
