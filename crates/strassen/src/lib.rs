//! # Strassen
//!
//! Strassen's divide-and-conquer matrix multiplication next to the
//! conventional triple loop, with the tooling to compare them.
//!
//! ## Features
//!
//! - **Padding-Aware Strassen**: any compatible shapes, padded to the next
//!   power-of-two square and cropped back
//! - **Conventional Ground Truth**: the O(n³) triple loop every result is
//!   checked against
//! - **Identity Validation**: element-wise or norm-based, with an explicit tolerance
//! - **LU Inversion**: partial-pivoting decomposition exposing `L`, `U`, `P`
//! - **Benchmark Harness**: timed `M·N` and `N·M` products for both engines
//!
//! ## Quick Start
//!
//! ```rust
//! use strassen::prelude::*;
//!
//! let m = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
//! let n = LuDecomposition::decompose(&m).unwrap().inverse().unwrap();
//! let product = strassen_multiply(&m, &n).unwrap();
//! assert!(is_approx_identity(&product, DEFAULT_TOLERANCE));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use strassen_bench as bench;
pub use strassen_core as core;
pub use strassen_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use strassen_bench::{BenchHarness, BenchReport, HarnessConfig};
    pub use strassen_core::{Matrix, MatrixError, MatrixResult, Scalar};
    pub use strassen_linalg::conventional::multiply as conventional_multiply;
    pub use strassen_linalg::{
        is_approx_identity, strassen_multiply, strassen_multiply_with, IdentityCheck,
        LuDecomposition, MatrixNorm, StrassenConfig, DEFAULT_TOLERANCE,
    };
}
