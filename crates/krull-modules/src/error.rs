//! Error taxonomy for module operations.
//!
//! Every failure here is a synchronous precondition violation of the
//! specific call: nothing is retried and no partial results are returned.

use thiserror::Error;

/// Errors produced by module construction and comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// Intersection or equality was attempted on modules whose ancestor
    /// chains never meet.
    #[error("modules share no common ancestor")]
    IncompatibleModules,

    /// An operation combined objects of differing rank or shape.
    #[error("incompatible dimensions: expected {expected}, found {found}")]
    IncompatibleDimensions {
        /// The rank or length the operation required.
        expected: usize,
        /// The rank or length actually supplied.
        found: usize,
    },

    /// An element of one module cannot be represented in another.
    #[error("element cannot be coerced into the target module")]
    Coercion,
}
