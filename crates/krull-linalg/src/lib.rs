//! # krull-linalg
//!
//! Exact dense linear algebra over Euclidean domains.
//!
//! This crate provides:
//! - Dense matrices in row-major order
//! - Canonical reduced triangular forms via extended-gcd row transforms
//! - Left kernels of relation matrices
//! - Solvability tests against reduced triangular bases
//!
//! These are the matrix kernels behind the finitely presented module
//! system in `krull-modules`: relation matrices are kept in the canonical
//! form computed here, and intersections are read off left kernels.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod reduce;

pub use dense_matrix::DenseMatrix;
pub use reduce::{can_solve_left_reduced_triu, left_kernel, reduced_form, reduced_form_with_transform};

#[cfg(test)]
mod tests;
