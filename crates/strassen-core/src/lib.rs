//! # strassen-core
//!
//! Core storage types for the strassen workspace.
//!
//! This crate provides:
//! - `Matrix<T>`: dense row-major matrices with shape-checked construction
//! - `Scalar`: the floating-point bound every algorithm works over
//! - `MatrixError`: the error taxonomy shared by all matrix operations
//!
//! ## Design Principles
//!
//! - **Contiguous Storage**: one `Vec<T>` per matrix, indexed by `(row, col)`
//! - **Read-Only Inputs**: operations borrow their operands and return fresh matrices
//! - **Fail Fast**: shape violations are reported, never broadcast or truncated

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod matrix;
pub mod scalar;

pub use error::{MatrixError, MatrixResult};
pub use matrix::Matrix;
pub use scalar::Scalar;
