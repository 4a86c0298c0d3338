//! Strassen's recursive matrix multiplication.
//!
//! Splitting both operands into quadrants and forming seven block products
//! instead of eight gives O(n^2.81) multiplications. The recursion runs on
//! power-of-two squares; [`strassen_multiply`] normalizes arbitrary
//! compatible shapes by zero-padding and crops the product back.

use std::time::{Duration, Instant};

use strassen_core::{Matrix, MatrixError, MatrixResult, Scalar};
use tracing::{debug, trace};

use crate::block;
use crate::conventional;
use crate::shape::{crop, ensure_non_empty, ensure_power_of_two_square, next_power_of_two, pad};

/// Configuration for the Strassen recursion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrassenConfig {
    /// Block side at or below which the triple loop takes over.
    ///
    /// `1` recurses all the way down to scalar products.
    pub leaf_size: usize,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        Self { leaf_size: 1 }
    }
}

impl StrassenConfig {
    /// Creates a configuration with the given leaf size.
    #[must_use]
    pub fn with_leaf_size(leaf_size: usize) -> Self {
        Self { leaf_size }
    }

    fn validate(&self) -> MatrixResult<()> {
        if self.leaf_size == 0 {
            return Err(MatrixError::invalid_size(
                "strassen",
                "leaf size must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Wall-clock breakdown of one [`strassen_multiply_timed`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrassenTiming {
    /// Side of the power-of-two square both operands were padded to.
    pub padded_size: usize,
    /// Time spent zero-padding both operands.
    pub pad: Duration,
    /// Time spent in the recursion.
    pub recurse: Duration,
    /// Time spent cropping the product.
    pub crop: Duration,
}

impl StrassenTiming {
    /// Sum of all phases.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.pad + self.recurse + self.crop
    }
}

/// Multiplies `a * b` with Strassen's algorithm and the default configuration.
///
/// # Errors
///
/// See [`strassen_multiply_timed`].
pub fn strassen_multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> MatrixResult<Matrix<T>> {
    strassen_multiply_with(a, b, &StrassenConfig::default())
}

/// Multiplies `a * b` with Strassen's algorithm.
///
/// # Errors
///
/// See [`strassen_multiply_timed`].
pub fn strassen_multiply_with<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    config: &StrassenConfig,
) -> MatrixResult<Matrix<T>> {
    strassen_multiply_timed(a, b, config).map(|(product, _)| product)
}

/// Multiplies `a * b` with Strassen's algorithm, reporting phase timings.
///
/// Both operands are zero-padded to `n × n`, where `n` is the next power of
/// two of the largest dimension of either operand. The padded product is
/// cropped back to `a.num_rows() × b.num_cols()`.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if `a.num_cols() != b.num_rows()`
/// and [`MatrixError::InvalidSize`] if `config.leaf_size` is zero or either
/// operand has a zero dimension.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(lhs = ?a.shape(), rhs = ?b.shape(), leaf_size = config.leaf_size)
)]
pub fn strassen_multiply_timed<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    config: &StrassenConfig,
) -> MatrixResult<(Matrix<T>, StrassenTiming)> {
    config.validate()?;
    ensure_non_empty("strassen_multiply", a)?;
    ensure_non_empty("strassen_multiply", b)?;
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::shape_mismatch(
            "strassen_multiply",
            a.shape(),
            b.shape(),
        ));
    }

    let largest = a
        .num_rows()
        .max(a.num_cols())
        .max(b.num_rows())
        .max(b.num_cols());
    let n = next_power_of_two(largest)?;

    let start = Instant::now();
    let a_padded = pad(a, n)?;
    let b_padded = pad(b, n)?;
    let pad_time = start.elapsed();

    let start = Instant::now();
    let product = recurse(&a_padded, &b_padded, config.leaf_size);
    let recurse_time = start.elapsed();

    let start = Instant::now();
    let result = crop(&product, a.num_rows(), b.num_cols())?;
    let crop_time = start.elapsed();

    let timing = StrassenTiming {
        padded_size: n,
        pad: pad_time,
        recurse: recurse_time,
        crop: crop_time,
    };
    debug!(
        padded_size = n,
        pad_ns = pad_time.as_nanos(),
        recurse_ns = recurse_time.as_nanos(),
        crop_ns = crop_time.as_nanos(),
        "strassen product complete"
    );
    Ok((result, timing))
}

/// Runs the recursion directly on power-of-two squares, without padding.
///
/// # Errors
///
/// Returns [`MatrixError::NonSquare`] if either operand is not square,
/// [`MatrixError::InvalidSize`] if a side is not a power of two or
/// `config.leaf_size` is zero, and [`MatrixError::ShapeMismatch`] if the
/// operands differ in size.
pub fn multiply_recursive<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    config: &StrassenConfig,
) -> MatrixResult<Matrix<T>> {
    config.validate()?;
    ensure_power_of_two_square("multiply_recursive", a)?;
    ensure_power_of_two_square("multiply_recursive", b)?;
    if a.shape() != b.shape() {
        return Err(MatrixError::shape_mismatch(
            "multiply_recursive",
            a.shape(),
            b.shape(),
        ));
    }
    Ok(recurse(a, b, config.leaf_size))
}

/// `a` and `b` are equal-size squares with power-of-two side.
fn recurse<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, leaf_size: usize) -> Matrix<T> {
    let n = a.num_rows();
    if n == 1 {
        return Matrix::scalar(a[(0, 0)] * b[(0, 0)]);
    }
    if n <= leaf_size {
        return conventional::multiply_unchecked(a, b);
    }
    trace!(side = n, "strassen split");

    let qa = block::quadrants(a);
    let qb = block::quadrants(b);

    let m1 = recurse(&(&qa.a11 + &qa.a22), &(&qb.a11 + &qb.a22), leaf_size);
    let m2 = recurse(&(&qa.a21 + &qa.a22), &qb.a11, leaf_size);
    let m3 = recurse(&qa.a11, &(&qb.a12 - &qb.a22), leaf_size);
    let m4 = recurse(&qa.a22, &(&qb.a21 - &qb.a11), leaf_size);
    let m5 = recurse(&(&qa.a11 + &qa.a12), &qb.a22, leaf_size);
    let m6 = recurse(&(&qa.a21 - &qa.a11), &(&qb.a11 + &qb.a12), leaf_size);
    let m7 = recurse(&(&qa.a12 - &qa.a22), &(&qb.a21 + &qb.a22), leaf_size);

    // C11 = M1 + M4 - M5 + M7
    let c11 = &(&(&m1 + &m4) - &m5) + &m7;
    // C12 = M3 + M5
    let c12 = &m3 + &m5;
    // C21 = M2 + M4
    let c21 = &m2 + &m4;
    // C22 = M1 + M3 - M2 + M6
    let c22 = &(&(&m1 + &m3) - &m2) + &m6;

    block::assemble(&c11, &c12, &c21, &c22)
}
