//! Block operations on square matrices.
//!
//! The checked functions here are the public API. The recursive multiplier
//! uses the unchecked `quadrants` / `assemble` pair and the `&a + &b`
//! operators once its operands have been validated at the top level.

use strassen_core::{Matrix, MatrixError, MatrixResult, Scalar};

/// The four equal-size quadrants of an even-sided square matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants<T> {
    /// Rows `[0, n/2)`, columns `[0, n/2)`.
    pub a11: Matrix<T>,
    /// Rows `[0, n/2)`, columns `[n/2, n)`.
    pub a12: Matrix<T>,
    /// Rows `[n/2, n)`, columns `[0, n/2)`.
    pub a21: Matrix<T>,
    /// Rows `[n/2, n)`, columns `[n/2, n)`.
    pub a22: Matrix<T>,
}

impl<T: Scalar> Quadrants<T> {
    /// Side length of each quadrant.
    #[must_use]
    pub fn side(&self) -> usize {
        self.a11.num_rows()
    }

    /// Reassembles the quadrants into a single matrix.
    ///
    /// # Errors
    ///
    /// See [`combine`].
    pub fn combine(&self) -> MatrixResult<Matrix<T>> {
        combine(&self.a11, &self.a12, &self.a21, &self.a22)
    }
}

/// Element-wise sum of two matrices of identical shape.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
pub fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    ensure_same_shape("add", a, b)?;
    Ok(a + b)
}

/// Element-wise difference `a - b` of two matrices of identical shape.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
pub fn subtract<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    ensure_same_shape("subtract", a, b)?;
    Ok(a - b)
}

/// Splits an even-sided square matrix into its four quadrants.
///
/// # Errors
///
/// Returns [`MatrixError::NonSquare`] for non-square input and
/// [`MatrixError::ShapeMismatch`] if the side length is odd.
pub fn split<T: Scalar>(matrix: &Matrix<T>) -> MatrixResult<Quadrants<T>> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(MatrixError::NonSquare {
            op: "split",
            rows,
            cols,
        });
    }
    if rows % 2 != 0 {
        return Err(MatrixError::shape_mismatch(
            "split",
            (rows, cols),
            (rows / 2, cols / 2),
        ));
    }
    Ok(quadrants(matrix))
}

/// Places four equal-size square quadrants at their block positions.
///
/// # Errors
///
/// Returns [`MatrixError::NonSquare`] if `c11` is not square and
/// [`MatrixError::ShapeMismatch`] if any other quadrant differs from it.
pub fn combine<T: Scalar>(
    c11: &Matrix<T>,
    c12: &Matrix<T>,
    c21: &Matrix<T>,
    c22: &Matrix<T>,
) -> MatrixResult<Matrix<T>> {
    let (rows, cols) = c11.shape();
    if rows != cols {
        return Err(MatrixError::NonSquare {
            op: "combine",
            rows,
            cols,
        });
    }
    for other in [c12, c21, c22] {
        ensure_same_shape("combine", c11, other)?;
    }
    Ok(assemble(c11, c12, c21, c22))
}

/// Splits without validation; `matrix` must be square with even side.
pub(crate) fn quadrants<T: Scalar>(matrix: &Matrix<T>) -> Quadrants<T> {
    let mid = matrix.num_rows() / 2;
    Quadrants {
        a11: copy_block(matrix, 0, 0, mid),
        a12: copy_block(matrix, 0, mid, mid),
        a21: copy_block(matrix, mid, 0, mid),
        a22: copy_block(matrix, mid, mid, mid),
    }
}

/// Combines without validation; all quadrants must share one square shape.
pub(crate) fn assemble<T: Scalar>(
    c11: &Matrix<T>,
    c12: &Matrix<T>,
    c21: &Matrix<T>,
    c22: &Matrix<T>,
) -> Matrix<T> {
    let mid = c11.num_rows();
    let mut result = Matrix::zeros(2 * mid, 2 * mid);
    for i in 0..mid {
        let top = result.row_mut(i);
        top[..mid].copy_from_slice(c11.row(i));
        top[mid..].copy_from_slice(c12.row(i));

        let bottom = result.row_mut(i + mid);
        bottom[..mid].copy_from_slice(c21.row(i));
        bottom[mid..].copy_from_slice(c22.row(i));
    }
    result
}

fn copy_block<T: Scalar>(matrix: &Matrix<T>, row0: usize, col0: usize, side: usize) -> Matrix<T> {
    let mut block = Matrix::zeros(side, side);
    for i in 0..side {
        block
            .row_mut(i)
            .copy_from_slice(&matrix.row(row0 + i)[col0..col0 + side]);
    }
    block
}

fn ensure_same_shape<T: Scalar>(
    op: &'static str,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> MatrixResult<()> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(MatrixError::shape_mismatch(op, a.shape(), b.shape()))
    }
}
