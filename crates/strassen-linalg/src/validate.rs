//! Identity validation.
//!
//! A product `M · M⁻¹` computed in floating point is only approximately the
//! identity. The tolerance absorbs that drift; it is a parameter of the
//! check, not a correction applied to the product.
//!
//! Two checks are offered:
//! - element-wise: every `|A[i][j] - δij| <= tol` (canonical)
//! - norm-based: `‖A - I‖ < tol` under a [`MatrixNorm`]

use serde::{Deserialize, Serialize};
use strassen_core::{Matrix, Scalar};

/// Default tolerance for identity checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Matrix norms available to the norm-based identity check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatrixNorm {
    /// Square root of the sum of squared entries.
    #[default]
    Frobenius,
    /// Maximum over rows of the sum of absolute entries (the ∞-norm).
    MaxRowSum,
}

impl MatrixNorm {
    /// Evaluates this norm on `matrix`.
    #[must_use]
    pub fn of<T: Scalar>(self, matrix: &Matrix<T>) -> T {
        match self {
            MatrixNorm::Frobenius => matrix
                .as_slice()
                .iter()
                .fold(T::zero(), |acc, &v| acc + v * v)
                .sqrt(),
            MatrixNorm::MaxRowSum => matrix
                .rows()
                .map(|row| row.iter().fold(T::zero(), |acc, &v| acc + v.abs()))
                .fold(T::zero(), |acc, sum| if sum > acc || sum.is_nan() { sum } else { acc }),
        }
    }
}

/// How a product is judged to be the identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityCheck {
    /// Every entry within the tolerance of the identity.
    #[default]
    ElementWise,
    /// Norm of the deviation from the identity strictly below the tolerance.
    Norm(MatrixNorm),
}

impl IdentityCheck {
    /// Applies the check to `matrix`.
    #[must_use]
    pub fn verify<T: Scalar>(self, matrix: &Matrix<T>, tolerance: T) -> bool {
        match self {
            IdentityCheck::ElementWise => is_approx_identity(matrix, tolerance),
            IdentityCheck::Norm(norm) => is_identity_by_norm(matrix, tolerance, norm),
        }
    }
}

/// Returns `true` iff `matrix` is square and every entry lies within
/// `tolerance` of the corresponding identity entry.
///
/// NaN entries never pass.
#[must_use]
pub fn is_approx_identity<T: Scalar>(matrix: &Matrix<T>, tolerance: T) -> bool {
    matrix.is_square() && deviations(matrix).all(|deviation| deviation <= tolerance)
}

/// Largest absolute deviation of `matrix` from the identity.
///
/// Returns `None` for non-square input. A NaN entry makes the result NaN.
#[must_use]
pub fn max_identity_deviation<T: Scalar>(matrix: &Matrix<T>) -> Option<T> {
    if !matrix.is_square() {
        return None;
    }
    Some(deviations(matrix).fold(T::zero(), |acc, deviation| {
        if deviation > acc || deviation.is_nan() {
            deviation
        } else {
            acc
        }
    }))
}

/// Returns `true` iff `matrix` is square and `‖matrix - I‖ < tolerance`.
#[must_use]
pub fn is_identity_by_norm<T: Scalar>(matrix: &Matrix<T>, tolerance: T, norm: MatrixNorm) -> bool {
    if !matrix.is_square() {
        return false;
    }
    let residual = matrix - &Matrix::identity(matrix.num_rows());
    norm.of(&residual) < tolerance
}

fn deviations<T: Scalar>(matrix: &Matrix<T>) -> impl Iterator<Item = T> + '_ {
    matrix.rows().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, &v)| {
            let expected = if i == j { T::one() } else { T::zero() };
            (v - expected).abs()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_exact_identity() {
        let id: Matrix<f64> = Matrix::identity(4);
        assert!(is_approx_identity(&id, 0.0));
        assert_eq!(max_identity_deviation(&id), Some(0.0));
    }

    #[test]
    fn test_within_tolerance() {
        let a = m(vec![vec![1.0 + 5e-7, -5e-7], vec![1e-9, 1.0]]);
        assert!(is_approx_identity(&a, DEFAULT_TOLERANCE));
        assert!(!is_approx_identity(&a, 1e-8));
        let dev = max_identity_deviation(&a).unwrap();
        assert!((dev - 5e-7).abs() < 1e-12);
    }

    #[test]
    fn test_off_diagonal_violation() {
        let a = m(vec![vec![1.0, 1e-3], vec![0.0, 1.0]]);
        assert!(!is_approx_identity(&a, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_non_square_is_never_identity() {
        let a = m(vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]]);
        assert!(!is_approx_identity(&a, 1.0));
        assert!(!is_identity_by_norm(&a, 1.0, MatrixNorm::Frobenius));
        assert_eq!(max_identity_deviation(&a), None);
    }

    #[test]
    fn test_nan_never_passes() {
        let a = m(vec![vec![f64::NAN, 0.0], vec![0.0, 1.0]]);
        assert!(!is_approx_identity(&a, 1.0));
        assert!(max_identity_deviation(&a).unwrap().is_nan());
        assert!(!is_identity_by_norm(&a, 1.0, MatrixNorm::MaxRowSum));
    }

    #[test]
    fn test_norms() {
        let a = m(vec![vec![3.0, -4.0], vec![1.0, 1.0]]);
        assert!((MatrixNorm::Frobenius.of(&a) - 27.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(MatrixNorm::MaxRowSum.of(&a), 7.0);
    }

    #[test]
    fn test_norm_check_is_stricter_than_elementwise() {
        // Each entry deviates by 6e-7, within 1e-6 individually, but the
        // Frobenius norm of the 2x2 deviation is 1.2e-6.
        let a = m(vec![vec![1.0 + 6e-7, 6e-7], vec![6e-7, 1.0 - 6e-7]]);
        assert!(IdentityCheck::ElementWise.verify(&a, DEFAULT_TOLERANCE));
        assert!(!IdentityCheck::Norm(MatrixNorm::Frobenius).verify(&a, DEFAULT_TOLERANCE));
        assert!(!IdentityCheck::Norm(MatrixNorm::MaxRowSum).verify(&a, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_identity_check_default_is_elementwise() {
        assert_eq!(IdentityCheck::default(), IdentityCheck::ElementWise);
    }
}
