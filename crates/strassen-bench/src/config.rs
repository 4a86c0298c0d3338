//! Harness configuration and matrix input parsing.

use strassen_core::Matrix;
use strassen_linalg::{IdentityCheck, StrassenConfig, DEFAULT_TOLERANCE};

use crate::error::HarnessError;

/// The fixed 4×4 benchmark input.
pub const DEFAULT_MATRIX: [[f64; 4]; 4] = [
    [1.0, 3.0, 3.0, 6.0],
    [4.0, 2.0, 8.0, 2.0],
    [3.0, 3.0, 4.0, 5.0],
    [2.0, 6.0, 3.0, 1.0],
];

/// Returns [`DEFAULT_MATRIX`] as a [`Matrix`].
#[must_use]
pub fn default_matrix() -> Matrix<f64> {
    let mut m = Matrix::zeros(4, 4);
    for (i, row) in DEFAULT_MATRIX.iter().enumerate() {
        m.row_mut(i).copy_from_slice(row);
    }
    m
}

/// Configuration for a benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessConfig {
    /// Maximum tolerated deviation from the identity.
    pub tolerance: f64,
    /// How products are judged to be the identity.
    pub identity_check: IdentityCheck,
    /// Strassen recursion settings.
    pub strassen: StrassenConfig,
    /// Include every intermediate matrix in the rendered report.
    pub verbose: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            identity_check: IdentityCheck::default(),
            strassen: StrassenConfig::default(),
            verbose: false,
        }
    }
}

impl HarnessConfig {
    /// Checks the settings that the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidTolerance`] for a non-positive or
    /// non-finite tolerance.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(HarnessError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Parses a matrix written as rows separated by `;` with entries
/// separated by `,` or whitespace, e.g. `"1,2;3,4"`.
///
/// Runs of whitespace count as one separator, but every comma-separated
/// field must hold an entry, so `"1,,2"` is rejected.
///
/// # Errors
///
/// Returns [`HarnessError::EmptyInput`] for blank input,
/// [`HarnessError::InvalidEntry`] for an entry that is missing or not a
/// number, and a wrapped
/// [`MatrixError::RaggedRows`](strassen_core::MatrixError::RaggedRows)
/// when rows differ in length.
pub fn parse_matrix(input: &str) -> Result<Matrix<f64>, HarnessError> {
    let rows = input
        .split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(row, text)| parse_row(row, text))
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(HarnessError::EmptyInput);
    }
    Ok(Matrix::from_rows(rows)?)
}

fn parse_row(row: usize, text: &str) -> Result<Vec<f64>, HarnessError> {
    let mut entries = Vec::new();
    for field in text.split(',') {
        let mut tokens = field.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(HarnessError::InvalidEntry {
                row,
                col: entries.len(),
                value: String::new(),
            });
        }
        for token in tokens {
            let value = token.parse::<f64>().map_err(|_| HarnessError::InvalidEntry {
                row,
                col: entries.len(),
                value: token.to_string(),
            })?;
            entries.push(value);
        }
    }
    Ok(entries)
}
