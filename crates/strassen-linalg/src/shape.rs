//! Shape normalization for the recursive multiplier.
//!
//! Strassen's recursion halves the operand side at every level, so it only
//! runs on squares whose side is a power of two. These helpers extend an
//! arbitrary matrix with zeros to such a square and cut the product back.
//! Only zero-fill and copying are involved, so `crop(pad(m))` is exact.

use strassen_core::{Matrix, MatrixError, MatrixResult, Scalar};

/// Returns the smallest power of two that is `>= n`.
///
/// `n == 0` yields `1`, the smallest valid side length.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidSize`] if the result does not fit in `usize`.
pub fn next_power_of_two(n: usize) -> MatrixResult<usize> {
    n.checked_next_power_of_two().ok_or_else(|| {
        MatrixError::invalid_size(
            "next_power_of_two",
            format!("no power of two >= {n} fits in usize"),
        )
    })
}

/// Zero-pads `matrix` to a `target_size × target_size` square.
///
/// The top-left `rows × cols` block of the result equals the input.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidSize`] if `target_size` is zero, smaller
/// than either dimension of `matrix`, or too large to allocate.
pub fn pad<T: Scalar>(matrix: &Matrix<T>, target_size: usize) -> MatrixResult<Matrix<T>> {
    let (rows, cols) = matrix.shape();
    if target_size == 0 || target_size < rows.max(cols) {
        return Err(MatrixError::invalid_size(
            "pad",
            format!("cannot pad a {rows}x{cols} matrix to {target_size}x{target_size}"),
        ));
    }
    if target_size.checked_mul(target_size).is_none() {
        return Err(MatrixError::invalid_size(
            "pad",
            format!("a {target_size}x{target_size} matrix does not fit in memory"),
        ));
    }
    if rows == target_size && cols == target_size {
        return Ok(matrix.clone());
    }

    let mut padded = Matrix::zeros(target_size, target_size);
    for (i, row) in matrix.rows().enumerate() {
        padded.row_mut(i)[..cols].copy_from_slice(row);
    }
    Ok(padded)
}

/// Returns the top-left `target_rows × target_cols` block of `matrix`.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidSize`] if either target is zero or exceeds
/// the corresponding dimension of `matrix`.
pub fn crop<T: Scalar>(
    matrix: &Matrix<T>,
    target_rows: usize,
    target_cols: usize,
) -> MatrixResult<Matrix<T>> {
    let (rows, cols) = matrix.shape();
    if target_rows == 0 || target_cols == 0 || target_rows > rows || target_cols > cols {
        return Err(MatrixError::invalid_size(
            "crop",
            format!("cannot crop a {rows}x{cols} matrix to {target_rows}x{target_cols}"),
        ));
    }
    if target_rows == rows && target_cols == cols {
        return Ok(matrix.clone());
    }

    let mut cropped = Matrix::zeros(target_rows, target_cols);
    for i in 0..target_rows {
        cropped
            .row_mut(i)
            .copy_from_slice(&matrix.row(i)[..target_cols]);
    }
    Ok(cropped)
}

/// Rejects matrices with a zero dimension.
pub(crate) fn ensure_non_empty<T: Scalar>(
    op: &'static str,
    matrix: &Matrix<T>,
) -> MatrixResult<()> {
    let (rows, cols) = matrix.shape();
    if rows == 0 || cols == 0 {
        return Err(MatrixError::invalid_size(
            op,
            format!("operand is {rows}x{cols}, both sides must be at least 1"),
        ));
    }
    Ok(())
}

/// Checks that `matrix` is a square whose side is a power of two.
pub(crate) fn ensure_power_of_two_square<T: Scalar>(
    op: &'static str,
    matrix: &Matrix<T>,
) -> MatrixResult<()> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(MatrixError::NonSquare { op, rows, cols });
    }
    if !rows.is_power_of_two() {
        return Err(MatrixError::invalid_size(
            op,
            format!("side {rows} is not a power of two"),
        ));
    }
    Ok(())
}
