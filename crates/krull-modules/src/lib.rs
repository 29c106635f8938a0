//! # krull-modules
//!
//! Finitely presented modules over a Euclidean domain.
//!
//! A module is presented by a finite generating set subject to a relation
//! matrix kept in canonical reduced triangular form. Submodules form a
//! forest rooted at ambient (free) modules; each node carries an
//! embedding matrix into its immediate parent. On top of that
//! representation this crate computes:
//!
//! - common ancestors and transitive submodule tests ([`ModuleArena::compatible`],
//!   [`ModuleArena::is_submodule`])
//! - intersections via left kernels of stacked generator matrices
//!   ([`ModuleArena::intersect`])
//! - structural equality by mutual containment ([`ModuleArena::is_equal`])
//! - minimal presentations by culling unit-pivot relations
//!   ([`cull::cull_matrix`])
//!
//! Modules are immutable once constructed and live in a [`ModuleArena`];
//! handles are plain indices, so identity comparison is handle equality
//! and parent links never form cycles.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arena;
pub mod cull;
pub mod element;
pub mod error;
pub mod handle;
pub mod module;

mod ancestry;
mod equality;
mod intersect;
mod lift;

pub use arena::ModuleArena;
pub use cull::{cull_matrix, CullResult};
pub use element::Element;
pub use error::ModuleError;
pub use handle::ModuleHandle;
pub use module::{ModuleKind, ModuleNode};
