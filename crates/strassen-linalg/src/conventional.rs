//! Conventional O(n³) matrix multiplication.

use strassen_core::{Matrix, MatrixError, MatrixResult, Scalar};

use crate::shape::ensure_non_empty;

/// Matrix-matrix multiply: C = A * B, by the textbook triple loop.
///
/// Each entry is accumulated in increasing `k`, so the result is
/// deterministic for a given pair of inputs.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidSize`] if either operand has a zero
/// dimension and [`MatrixError::ShapeMismatch`] if
/// `a.num_cols() != b.num_rows()`.
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    ensure_non_empty("multiply", a)?;
    ensure_non_empty("multiply", b)?;
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::shape_mismatch("multiply", a.shape(), b.shape()));
    }
    Ok(multiply_unchecked(a, b))
}

/// Triple loop without the inner-dimension check.
pub(crate) fn multiply_unchecked<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let mut result = Matrix::zeros(a.num_rows(), b.num_cols());
    for i in 0..a.num_rows() {
        for j in 0..b.num_cols() {
            let mut sum = T::zero();
            for k in 0..a.num_cols() {
                sum = sum + a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = sum;
        }
    }
    result
}
