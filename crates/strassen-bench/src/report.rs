//! Console and JSON rendering of benchmark results.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strassen_core::Matrix;
use strassen_linalg::{IdentityCheck, MatrixNorm};

use crate::harness::{BenchReport, ProductPair};

/// Entries with a smaller magnitude are printed as zero.
///
/// Display only; validation never looks at this threshold.
pub const DISPLAY_ZERO_THRESHOLD: f64 = 1e-10;

/// Renders a matrix as fixed-width rows, one line per row.
#[derive(Clone, Copy, Debug)]
pub struct MatrixDisplay<'a>(pub &'a Matrix<f64>);

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.rows() {
            for &v in row {
                // Also folds -0.0 into 0.0
                let v = if v.abs() < DISPLAY_ZERO_THRESHOLD { 0.0 } else { v };
                write!(f, "{v:10.5} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Timings of one run in nanoseconds, for charting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Side of the input matrix.
    pub matrix_size: usize,
    /// Side the Strassen operands were padded to.
    pub padded_size: usize,
    /// LU decomposition plus inversion.
    pub inversion_ns: u64,
    /// Conventional `M · N`.
    pub conventional_mn_ns: u64,
    /// Conventional `N · M`.
    pub conventional_nm_ns: u64,
    /// Strassen `M · N`.
    pub strassen_mn_ns: u64,
    /// Strassen `N · M`.
    pub strassen_nm_ns: u64,
    /// Strassen padding, both products.
    pub strassen_pad_ns: u64,
    /// Strassen recursion, both products.
    pub strassen_recurse_ns: u64,
    /// Strassen cropping, both products.
    pub strassen_crop_ns: u64,
    /// Whether all four products passed the identity check.
    pub all_identity: bool,
}

impl From<&BenchReport> for TimingSummary {
    fn from(report: &BenchReport) -> Self {
        let phases = &report.strassen_phases;
        Self {
            matrix_size: report.original.num_rows(),
            padded_size: phases.forward.padded_size,
            inversion_ns: nanos(report.inversion_time),
            conventional_mn_ns: nanos(report.conventional.forward_time),
            conventional_nm_ns: nanos(report.conventional.backward_time),
            strassen_mn_ns: nanos(report.strassen.forward_time),
            strassen_nm_ns: nanos(report.strassen.backward_time),
            strassen_pad_ns: nanos(phases.forward.pad + phases.backward.pad),
            strassen_recurse_ns: nanos(phases.forward.recurse + phases.backward.recurse),
            strassen_crop_ns: nanos(phases.forward.crop + phases.backward.crop),
            all_identity: report.all_identity(),
        }
    }
}

fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

fn describe_check(check: IdentityCheck) -> &'static str {
    match check {
        IdentityCheck::ElementWise => "element-wise",
        IdentityCheck::Norm(MatrixNorm::Frobenius) => "Frobenius norm",
        IdentityCheck::Norm(MatrixNorm::MaxRowSum) => "max row sum norm",
    }
}

fn write_products(f: &mut fmt::Formatter<'_>, engine: &str, pair: &ProductPair) -> fmt::Result {
    writeln!(f, "\n{engine} M * N:")?;
    write!(f, "{}", MatrixDisplay(&pair.forward))?;
    writeln!(f, "\n{engine} N * M:")?;
    write!(f, "{}", MatrixDisplay(&pair.backward))
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.verbose {
            writeln!(f, "Original Matrix M:")?;
            write!(f, "{}", MatrixDisplay(&self.original))?;

            writeln!(f, "\n[LU Decomposition Info]")?;
            writeln!(f, "L:")?;
            write!(f, "{}", MatrixDisplay(&self.decomposition.l()))?;
            writeln!(f, "U:")?;
            write!(f, "{}", MatrixDisplay(&self.decomposition.u()))?;
            writeln!(f, "P (Permutation):")?;
            write!(f, "{}", MatrixDisplay(&self.decomposition.p()))?;

            writeln!(f, "\nInverse Matrix N:")?;
            write!(f, "{}", MatrixDisplay(&self.inverse))?;

            write_products(f, "Conventional", &self.conventional)?;
            write_products(f, "Strassen", &self.strassen)?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "[Validation] ({} check, tolerance {:e})",
            describe_check(self.config.identity_check),
            self.config.tolerance
        )?;
        writeln!(f, "Conventional M * N ≈ I: {}", self.conventional.forward_is_identity)?;
        writeln!(f, "Conventional N * M ≈ I: {}", self.conventional.backward_is_identity)?;
        writeln!(f, "Strassen     M * N ≈ I: {}", self.strassen.forward_is_identity)?;
        writeln!(f, "Strassen     N * M ≈ I: {}", self.strassen.backward_is_identity)?;

        writeln!(f, "\n[Performance]")?;
        writeln!(f, "Time (LU Inversion): {} ns", self.inversion_time.as_nanos())?;
        writeln!(
            f,
            "Total Time (Conventional): {} ns",
            self.conventional.total_time().as_nanos()
        )?;
        writeln!(f, "Total Time (Strassen): {} ns", self.strassen.total_time().as_nanos())?;

        writeln!(f, "\n[Time Breakdown: Matrix Multiplication Only]")?;
        writeln!(f, "Conventional M × N: {} ns", self.conventional.forward_time.as_nanos())?;
        writeln!(f, "Conventional N × M: {} ns", self.conventional.backward_time.as_nanos())?;
        writeln!(f, "Strassen     M × N: {} ns", self.strassen.forward_time.as_nanos())?;
        writeln!(f, "Strassen     N × M: {} ns", self.strassen.backward_time.as_nanos())?;

        let phases = &self.strassen_phases;
        writeln!(
            f,
            "\n[Strassen Phases] (padded to {n}x{n}, leaf size {leaf})",
            n = phases.forward.padded_size,
            leaf = self.config.strassen.leaf_size
        )?;
        for (label, timing) in [("M × N", &phases.forward), ("N × M", &phases.backward)] {
            writeln!(
                f,
                "{label}: pad {} ns, recurse {} ns, crop {} ns",
                timing.pad.as_nanos(),
                timing.recurse.as_nanos(),
                timing.crop.as_nanos()
            )?;
        }
        Ok(())
    }
}
