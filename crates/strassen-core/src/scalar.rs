//! Scalar bound for matrix entries.

use std::fmt;

use num_traits::Float;

/// A real floating-point number usable as a matrix entry.
///
/// Implemented for `f32` and `f64`. The benchmark harness always works in
/// `f64`; `f32` is accepted so the kernels can be compared across precisions.
pub trait Scalar: Float + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Converts an `f64` constant (tolerances, thresholds) into this type.
    fn from_f64_lossy(value: f64) -> Self;
}

impl Scalar for f64 {
    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_lossy() {
        assert_eq!(f64::from_f64_lossy(1e-6), 1e-6);
        assert!((f32::from_f64_lossy(0.5) - 0.5).abs() < f32::EPSILON);
    }
}
