//! Benchmark orchestration.
//!
//! One run: decompose and invert the input, multiply the input by its
//! inverse in both orders with the conventional engine and then with the
//! Strassen engine, and validate all four products. Every stage is timed
//! with [`Instant`] and the durations are returned in the report rather
//! than accumulated anywhere global.

use std::time::{Duration, Instant};

use strassen_core::{Matrix, MatrixResult};
use strassen_linalg::strassen::strassen_multiply_timed;
use strassen_linalg::{conventional, LuDecomposition, StrassenTiming};
use tracing::{debug, info, warn};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::report::TimingSummary;

/// The products `M·N` and `N·M` computed by one engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductPair {
    /// `M · N`.
    pub forward: Matrix<f64>,
    /// `N · M`.
    pub backward: Matrix<f64>,
    /// Wall-clock time of `M · N`.
    pub forward_time: Duration,
    /// Wall-clock time of `N · M`.
    pub backward_time: Duration,
    /// Whether `M · N` passed the identity check.
    pub forward_is_identity: bool,
    /// Whether `N · M` passed the identity check.
    pub backward_is_identity: bool,
}

impl ProductPair {
    /// Combined time of both products.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.forward_time + self.backward_time
    }

    /// Whether both products passed the identity check.
    #[must_use]
    pub fn all_identity(&self) -> bool {
        self.forward_is_identity && self.backward_is_identity
    }
}

/// Phase breakdown of both Strassen products.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrassenPhases {
    /// Phases of `M · N`.
    pub forward: StrassenTiming,
    /// Phases of `N · M`.
    pub backward: StrassenTiming,
}

/// Everything a benchmark run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchReport {
    /// Settings the run used.
    pub config: HarnessConfig,
    /// The input matrix `M`.
    pub original: Matrix<f64>,
    /// LU factors of `M`.
    pub decomposition: LuDecomposition<f64>,
    /// The inverse `N` of `M`.
    pub inverse: Matrix<f64>,
    /// Time to decompose and invert `M`.
    pub inversion_time: Duration,
    /// Products from the triple-loop engine.
    pub conventional: ProductPair,
    /// Products from the Strassen engine.
    pub strassen: ProductPair,
    /// Pad / recurse / crop breakdown of the Strassen products.
    pub strassen_phases: StrassenPhases,
}

impl BenchReport {
    /// Whether all four products passed the identity check.
    #[must_use]
    pub fn all_identity(&self) -> bool {
        self.conventional.all_identity() && self.strassen.all_identity()
    }

    /// Serializable timing subset of this report.
    #[must_use]
    pub fn timing_summary(&self) -> TimingSummary {
        TimingSummary::from(self)
    }
}

/// Runs the Strassen versus conventional comparison.
#[derive(Clone, Debug, Default)]
pub struct BenchHarness {
    config: HarnessConfig,
}

impl BenchHarness {
    /// Creates a harness after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidTolerance`] for an unusable tolerance.
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this harness runs with.
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Benchmarks both engines on `matrix` and its inverse.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::NonSquareInput`] for a non-square input and a
    /// wrapped [`MatrixError`](strassen_core::MatrixError) if the matrix is
    /// singular or the Strassen configuration is invalid.
    #[tracing::instrument(skip_all, fields(shape = ?matrix.shape()))]
    pub fn run(&self, matrix: &Matrix<f64>) -> Result<BenchReport, HarnessError> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(HarnessError::NonSquareInput { rows, cols });
        }

        let start = Instant::now();
        let decomposition = LuDecomposition::decompose(matrix)?;
        let inverse = decomposition.inverse()?;
        let inversion_time = start.elapsed();
        debug!(ns = inversion_time.as_nanos(), "inverse computed");

        let (conv_forward, conv_forward_time) = timed(|| conventional::multiply(matrix, &inverse))?;
        let (conv_backward, conv_backward_time) =
            timed(|| conventional::multiply(&inverse, matrix))?;
        let conventional = self.pair(
            "conventional",
            conv_forward,
            conv_backward,
            conv_forward_time,
            conv_backward_time,
        );

        let ((st_forward, forward_phases), st_forward_time) =
            timed(|| strassen_multiply_timed(matrix, &inverse, &self.config.strassen))?;
        let ((st_backward, backward_phases), st_backward_time) =
            timed(|| strassen_multiply_timed(&inverse, matrix, &self.config.strassen))?;
        let strassen = self.pair(
            "strassen",
            st_forward,
            st_backward,
            st_forward_time,
            st_backward_time,
        );

        let report = BenchReport {
            config: self.config.clone(),
            original: matrix.clone(),
            decomposition,
            inverse,
            inversion_time,
            conventional,
            strassen,
            strassen_phases: StrassenPhases {
                forward: forward_phases,
                backward: backward_phases,
            },
        };
        info!(
            conventional_ns = report.conventional.total_time().as_nanos(),
            strassen_ns = report.strassen.total_time().as_nanos(),
            passed = report.all_identity(),
            "benchmark complete"
        );
        Ok(report)
    }

    fn pair(
        &self,
        engine: &'static str,
        forward: Matrix<f64>,
        backward: Matrix<f64>,
        forward_time: Duration,
        backward_time: Duration,
    ) -> ProductPair {
        let forward_is_identity = self.verify(engine, "M * N", &forward);
        let backward_is_identity = self.verify(engine, "N * M", &backward);
        ProductPair {
            forward,
            backward,
            forward_time,
            backward_time,
            forward_is_identity,
            backward_is_identity,
        }
    }

    fn verify(&self, engine: &'static str, product: &'static str, matrix: &Matrix<f64>) -> bool {
        let passed = self
            .config
            .identity_check
            .verify(matrix, self.config.tolerance);
        if !passed {
            warn!(
                engine,
                product,
                tolerance = self.config.tolerance,
                "product is not the identity within tolerance"
            );
        }
        passed
    }
}

fn timed<R>(f: impl FnOnce() -> MatrixResult<R>) -> MatrixResult<(R, Duration)> {
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_matrix;
    use strassen_core::MatrixError;
    use strassen_linalg::{IdentityCheck, MatrixNorm, StrassenConfig};

    #[test]
    fn test_default_run_passes() {
        let harness = BenchHarness::default();
        let report = harness.run(&default_matrix()).unwrap();

        assert!(report.all_identity());
        assert_eq!(report.conventional.forward.shape(), (4, 4));
        assert_eq!(report.strassen.backward.shape(), (4, 4));
        assert_eq!(report.strassen_phases.forward.padded_size, 4);
        assert_eq!(report.inverse.shape(), (4, 4));
        assert!(!report.decomposition.is_singular());
    }

    #[test]
    fn test_engines_agree() {
        let report = BenchHarness::default().run(&default_matrix()).unwrap();
        for (x, y) in report
            .conventional
            .forward
            .as_slice()
            .iter()
            .zip(report.strassen.forward.as_slice())
        {
            assert!((x - y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_norm_check_and_leaf_size() {
        let config = HarnessConfig {
            identity_check: IdentityCheck::Norm(MatrixNorm::MaxRowSum),
            strassen: StrassenConfig::with_leaf_size(2),
            ..HarnessConfig::default()
        };
        let report = BenchHarness::new(config).unwrap().run(&default_matrix()).unwrap();
        assert!(report.all_identity());
    }

    #[test]
    fn test_non_power_of_two_input() {
        let m = Matrix::from_rows(vec![
            vec![4.0, 1.0, 0.0],
            vec![1.0, 3.0, 1.0],
            vec![0.0, 1.0, 2.0],
        ])
        .unwrap();
        let report = BenchHarness::default().run(&m).unwrap();
        assert!(report.all_identity());
        assert_eq!(report.strassen.forward.shape(), (3, 3));
        assert_eq!(report.strassen_phases.backward.padded_size, 4);
    }

    #[test]
    fn test_singular_input() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert!(matches!(
            BenchHarness::default().run(&m),
            Err(HarnessError::Matrix(MatrixError::Singular { .. }))
        ));
    }

    #[test]
    fn test_non_square_input() {
        let m: Matrix<f64> = Matrix::zeros(2, 3);
        assert_eq!(
            BenchHarness::default().run(&m).unwrap_err(),
            HarnessError::NonSquareInput { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let config = HarnessConfig {
            tolerance: -1.0,
            ..HarnessConfig::default()
        };
        assert!(BenchHarness::new(config).is_err());
    }

    #[test]
    fn test_tiny_tolerance_fails_validation() {
        // An exact identity check cannot survive the rounding in M * N.
        let config = HarnessConfig {
            tolerance: f64::MIN_POSITIVE,
            ..HarnessConfig::default()
        };
        let report = BenchHarness::new(config).unwrap().run(&default_matrix()).unwrap();
        assert!(!report.all_identity());
    }
}
