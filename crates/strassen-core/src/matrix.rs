//! Dense matrix storage.
//!
//! Matrices are stored in row-major order in a single contiguous buffer.
//! Every constructor that accepts caller data checks that the buffer is
//! rectangular and non-empty; `zeros` and `identity` are trusted builders
//! used by the algorithms themselves.

use std::ops::{Add, Index, IndexMut, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, MatrixResult};
use crate::scalar::Scalar;

/// Dense matrix stored in row-major order.
///
/// Serializes as a list of rows, and deserialization goes through
/// [`Matrix::from_rows`] so ragged input is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "Vec<Vec<T>>",
    try_from = "Vec<Vec<T>>",
    bound(
        serialize = "T: Scalar + Serialize",
        deserialize = "T: Scalar + Deserialize<'de>"
    )
)]
pub struct Matrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a new matrix filled with zeros.
    ///
    /// Zero dimensions are allowed here; the multiplication engines reject
    /// them.
    ///
    /// # Panics
    ///
    /// Panics if `num_rows * num_cols` overflows `usize`.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a 1×1 matrix holding `value`.
    #[must_use]
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            num_rows: 1,
            num_cols: 1,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidSize`] if there are no rows or the rows
    /// are empty, and [`MatrixError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> MatrixResult<Self> {
        let Some(first) = rows.first() else {
            return Err(MatrixError::invalid_size("from_rows", "matrix has no rows"));
        };
        let num_cols = first.len();
        if num_cols == 0 {
            return Err(MatrixError::invalid_size("from_rows", "matrix has no columns"));
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_cols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: num_cols,
                found,
            });
        }

        let num_rows = rows.len();
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidSize`] if either dimension is zero,
    /// `num_rows * num_cols` overflows, or `data.len() != num_rows * num_cols`.
    pub fn from_vec(num_rows: usize, num_cols: usize, data: Vec<T>) -> MatrixResult<Self> {
        if num_rows == 0 || num_cols == 0 {
            return Err(MatrixError::invalid_size(
                "from_vec",
                format!("dimensions must be positive, got {num_rows}x{num_cols}"),
            ));
        }
        let Some(len) = num_rows.checked_mul(num_cols) else {
            return Err(MatrixError::invalid_size(
                "from_vec",
                format!("{num_rows}x{num_cols} entries do not fit in usize"),
            ));
        };
        if data.len() != len {
            return Err(MatrixError::invalid_size(
                "from_vec",
                format!(
                    "expected {len} entries for {num_rows}x{num_cols}, got {}",
                    data.len()
                ),
            ));
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the shape as `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the entry at (row, col), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.num_rows && col < self.num_cols {
            Some(self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.num_cols.max(1)).take(self.num_rows)
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.num_rows).map(|row| self[(row, col)]).collect()
    }

    /// Sets a column from a slice.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the number of rows.
    pub fn set_col(&mut self, col: usize, values: &[T]) {
        assert_eq!(values.len(), self.num_rows);
        for (row, &val) in values.iter().enumerate() {
            self[(row, col)] = val;
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copies the matrix out as a vector of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> MatrixResult<Self> {
        Self::from_rows(rows)
    }
}

impl<T: Scalar> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.to_rows()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<T: Scalar> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, other: Self) -> Matrix<T> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T: Scalar> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, other: Self) -> Matrix<T> {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<f64> {
        Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_zeros() {
        let m: Matrix<f64> = Matrix::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_identity() {
        let id: Matrix<f64> = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id[(i, j)], expected);
            }
        }
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(
            Matrix::<f64>::from_rows(vec![]),
            Err(MatrixError::InvalidSize { .. })
        ));
        assert!(matches!(
            Matrix::<f64>::from_rows(vec![vec![]]),
            Err(MatrixError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).is_err());
        assert!(Matrix::<f64>::from_vec(0, 2, vec![]).is_err());
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn test_from_vec_overflowing_shape() {
        let err = Matrix::<f64>::from_vec(usize::MAX, 2, vec![]).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidSize { op: "from_vec", .. }));
        assert!(err.to_string().contains("do not fit in usize"));
    }

    #[test]
    fn test_rows_and_cols() {
        let m = sample();
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.col(2), vec![3.0, 6.0]);
        assert_eq!(m.rows().count(), 2);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.get(1, 2), Some(6.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_set_col_and_swap_rows() {
        let mut m = sample();
        m.set_col(0, &[7.0, 8.0]);
        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[8.0, 5.0, 6.0]);
        assert_eq!(m.row(1), &[7.0, 2.0, 3.0]);
    }

    #[test]
    fn test_add_sub() {
        let a = sample();
        let b = Matrix::from_rows(vec![vec![1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0]]).unwrap();
        let sum = &a + &b;
        let diff = &a - &b;
        assert_eq!(sum.row(1), &[6.0, 7.0, 8.0]);
        assert_eq!(diff.row(0), &[0.0, 1.0, 2.0]);
    }

    #[test]
    #[should_panic]
    fn test_add_shape_mismatch_panics() {
        let a = sample();
        let b: Matrix<f64> = Matrix::zeros(3, 2);
        let _ = &a + &b;
    }

    #[test]
    fn test_serde_as_rows() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0,3.0],[4.0,5.0,6.0]]");
        let back: Matrix<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<Matrix<f64>>("[[1.0],[2.0,3.0]]").is_err());
    }
}
