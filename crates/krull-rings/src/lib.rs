//! # krull-rings
//!
//! Algebraic structures for the krull module system.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`
//! - The concrete ring of integers `Z`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Z;
pub use traits::{CommutativeRing, EuclideanDomain, IntegralDomain, OrderedRing, Ring};
