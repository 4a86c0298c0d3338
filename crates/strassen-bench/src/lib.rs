//! # strassen-bench
//!
//! Benchmark harness comparing Strassen and conventional multiplication.
//!
//! A run takes one square matrix `M`, inverts it through an LU
//! decomposition to obtain `N`, forms `M·N` and `N·M` with both engines,
//! checks every product against the identity and records how long each
//! stage took. The outcome is a [`BenchReport`], which renders like a
//! console log and reduces to a serializable [`TimingSummary`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod harness;
pub mod report;

pub use config::{default_matrix, parse_matrix, HarnessConfig, DEFAULT_MATRIX};
pub use error::HarnessError;
pub use harness::{BenchHarness, BenchReport, ProductPair, StrassenPhases};
pub use report::{MatrixDisplay, TimingSummary, DISPLAY_ZERO_THRESHOLD};
