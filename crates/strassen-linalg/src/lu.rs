//! LU decomposition with partial pivoting.
//!
//! Factors a square matrix as `P·A = L·U` with `L` unit lower triangular and
//! `U` upper triangular, then inverts `A` column by column. The benchmark
//! harness uses this to produce the matrix whose product with the original
//! should be the identity.

use std::cmp::Ordering;

use strassen_core::{Matrix, MatrixError, MatrixResult, Scalar};

use crate::shape::ensure_non_empty;

/// Pivots with magnitude at or below this are treated as zero.
pub const DEFAULT_SINGULARITY_THRESHOLD: f64 = 1e-11;

/// Compact LU factors of a square matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct LuDecomposition<T> {
    /// `L` strictly below the diagonal (unit diagonal implied), `U` on and above.
    lu: Matrix<T>,
    /// `pivots[i]` is the row of the original matrix moved to row `i`.
    pivots: Vec<usize>,
    /// Parity of the row permutation.
    even_permutation: bool,
    /// First column without a usable pivot, if any.
    singular_column: Option<usize>,
}

impl<T: Scalar> LuDecomposition<T> {
    /// Decomposes `matrix` with the default singularity threshold.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonSquare`] if `matrix` is not square.
    pub fn decompose(matrix: &Matrix<T>) -> MatrixResult<Self> {
        Self::decompose_with_threshold(matrix, T::from_f64_lossy(DEFAULT_SINGULARITY_THRESHOLD))
    }

    /// Decomposes `matrix`, treating pivots with `|p| <= threshold` as zero.
    ///
    /// A singular matrix still decomposes; [`is_singular`](Self::is_singular)
    /// reports it and [`inverse`](Self::inverse) fails.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonSquare`] if `matrix` is not square and
    /// [`MatrixError::InvalidSize`] if it is `0×0`.
    pub fn decompose_with_threshold(matrix: &Matrix<T>, threshold: T) -> MatrixResult<Self> {
        if !matrix.is_square() {
            return Err(MatrixError::NonSquare {
                op: "lu_decompose",
                rows: matrix.num_rows(),
                cols: matrix.num_cols(),
            });
        }
        ensure_non_empty("lu_decompose", matrix)?;
        let n = matrix.num_rows();
        let mut lu = matrix.clone();
        let mut pivots: Vec<usize> = (0..n).collect();
        let mut even_permutation = true;
        let mut singular_column = None;

        for col in 0..n {
            // Partial pivoting: largest magnitude in the column
            let pivot_row = (col..n)
                .max_by(|&x, &y| {
                    lu[(x, col)]
                        .abs()
                        .partial_cmp(&lu[(y, col)].abs())
                        .unwrap_or(Ordering::Equal)
                })
                .unwrap_or(col);

            if lu[(pivot_row, col)].abs() <= threshold {
                singular_column.get_or_insert(col);
                continue;
            }

            if pivot_row != col {
                lu.swap_rows(pivot_row, col);
                pivots.swap(pivot_row, col);
                even_permutation = !even_permutation;
            }

            // Eliminate below the pivot, storing the multipliers in place
            let pivot = lu[(col, col)];
            for row in col + 1..n {
                let factor = lu[(row, col)] / pivot;
                lu[(row, col)] = factor;
                for k in col + 1..n {
                    lu[(row, k)] = lu[(row, k)] - factor * lu[(col, k)];
                }
            }
        }

        Ok(Self {
            lu,
            pivots,
            even_permutation,
            singular_column,
        })
    }

    /// Side length of the decomposed matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.lu.num_rows()
    }

    /// Returns true if elimination found a column without a usable pivot.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.singular_column.is_some()
    }

    /// Row permutation: `pivots()[i]` is the original row now at row `i`.
    #[must_use]
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// The unit lower triangular factor `L`.
    #[must_use]
    pub fn l(&self) -> Matrix<T> {
        let n = self.size();
        let mut l = Matrix::identity(n);
        for i in 1..n {
            for j in 0..i {
                l[(i, j)] = self.lu[(i, j)];
            }
        }
        l
    }

    /// The upper triangular factor `U`.
    #[must_use]
    pub fn u(&self) -> Matrix<T> {
        let n = self.size();
        let mut u = Matrix::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                u[(i, j)] = self.lu[(i, j)];
            }
        }
        u
    }

    /// The permutation matrix `P` with `P·A = L·U`.
    #[must_use]
    pub fn p(&self) -> Matrix<T> {
        let n = self.size();
        let mut p = Matrix::zeros(n, n);
        for (row, &source) in self.pivots.iter().enumerate() {
            p[(row, source)] = T::one();
        }
        p
    }

    /// Determinant of the decomposed matrix; zero when singular.
    #[must_use]
    pub fn determinant(&self) -> T {
        if self.is_singular() {
            return T::zero();
        }
        let det = (0..self.size()).fold(T::one(), |acc, i| acc * self.lu[(i, i)]);
        if self.even_permutation {
            det
        } else {
            -det
        }
    }

    /// Solves `A·x = b` by forward and back substitution.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the matrix is singular and
    /// [`MatrixError::ShapeMismatch`] if `b` has the wrong length.
    pub fn solve(&self, b: &[T]) -> MatrixResult<Vec<T>> {
        let n = self.size();
        if b.len() != n {
            return Err(MatrixError::shape_mismatch("lu_solve", (n, n), (b.len(), 1)));
        }
        if let Some(column) = self.singular_column {
            return Err(MatrixError::Singular { column });
        }

        // L·y = P·b
        let mut x: Vec<T> = self.pivots.iter().map(|&source| b[source]).collect();
        for i in 1..n {
            let mut sum = x[i];
            for k in 0..i {
                sum = sum - self.lu[(i, k)] * x[k];
            }
            x[i] = sum;
        }

        // U·x = y
        for i in (0..n).rev() {
            let mut sum = x[i];
            for k in i + 1..n {
                sum = sum - self.lu[(i, k)] * x[k];
            }
            x[i] = sum / self.lu[(i, i)];
        }

        Ok(x)
    }

    /// Computes the inverse of the decomposed matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the matrix is singular.
    pub fn inverse(&self) -> MatrixResult<Matrix<T>> {
        let n = self.size();
        let mut inv = Matrix::zeros(n, n);
        let mut unit = vec![T::zero(); n];
        for col in 0..n {
            unit[col] = T::one();
            let column = self.solve(&unit)?;
            inv.set_col(col, &column);
            unit[col] = T::zero();
        }
        Ok(inv)
    }
}

/// Decomposes and inverts `matrix` in one step.
///
/// # Errors
///
/// Returns [`MatrixError::NonSquare`] or [`MatrixError::Singular`].
pub fn inverse<T: Scalar>(matrix: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    LuDecomposition::decompose(matrix)?.inverse()
}
