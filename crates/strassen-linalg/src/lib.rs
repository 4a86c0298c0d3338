//! # strassen-linalg
//!
//! Dense matrix multiplication kernels for the strassen workspace.
//!
//! This crate provides:
//! - Shape normalization: next power of two, zero padding, cropping
//! - Block operations: element-wise add/subtract, quadrant split/combine
//! - The conventional O(n³) triple-loop product
//! - Strassen's seven-product recursive multiplication
//! - Identity validation (element-wise and norm-based)
//! - LU decomposition with partial pivoting, used to build inverses
//!
//! ## Algorithm Selection
//!
//! - [`conventional::multiply`] accepts any compatible shapes and is the
//!   ground truth the other kernels are checked against.
//! - [`strassen::strassen_multiply`] pads both operands to the next
//!   power-of-two square, recurses down to 1×1 blocks (or to
//!   [`StrassenConfig::leaf_size`]), and crops the product back.
//! - [`strassen::multiply_recursive`] is the same recursion for callers that
//!   already hold power-of-two squares.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod block;
pub mod conventional;
pub mod lu;
pub mod shape;
pub mod strassen;
pub mod validate;

pub use block::Quadrants;
pub use lu::LuDecomposition;
pub use strassen::{strassen_multiply, strassen_multiply_with, StrassenConfig, StrassenTiming};
pub use validate::{is_approx_identity, IdentityCheck, MatrixNorm, DEFAULT_TOLERANCE};

pub use strassen_core::{Matrix, MatrixError, MatrixResult, Scalar};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
