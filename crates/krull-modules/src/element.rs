//! Module elements as coordinate vectors.
//!
//! An element belongs to exactly one module: it pairs a coordinate vector
//! over the base ring with the handle of its owner. Arithmetic is checked:
//! combining elements of different modules is a coercion error, never a
//! silent reinterpretation.

use smallvec::SmallVec;

use krull_rings::EuclideanDomain;

use crate::error::ModuleError;
use crate::handle::ModuleHandle;

/// Coordinate storage; most modules have a handful of generators.
type Coords<R> = SmallVec<[R; 4]>;

/// An element of a finitely presented module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element<R> {
    module: ModuleHandle,
    coords: Coords<R>,
}

impl<R: EuclideanDomain> Element<R> {
    pub(crate) fn from_coords(module: ModuleHandle, coords: Vec<R>) -> Self {
        Self {
            module,
            coords: Coords::from_vec(coords),
        }
    }

    /// Returns the handle of the owning module.
    #[must_use]
    pub fn module(&self) -> ModuleHandle {
        self.module
    }

    /// Returns the coordinate vector over the owning module's generators.
    #[must_use]
    pub fn coords(&self) -> &[R] {
        &self.coords
    }

    /// Returns true if every coordinate is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coords.iter().all(R::is_zero)
    }

    /// Adds two elements of the same module.
    ///
    /// # Errors
    ///
    /// `Coercion` if the elements belong to different modules.
    pub fn add(&self, other: &Self) -> Result<Self, ModuleError> {
        self.check_module(other)?;
        Ok(Self {
            module: self.module,
            coords: self
                .coords
                .iter()
                .zip(other.coords.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        })
    }

    /// Subtracts two elements of the same module.
    ///
    /// # Errors
    ///
    /// `Coercion` if the elements belong to different modules.
    pub fn sub(&self, other: &Self) -> Result<Self, ModuleError> {
        self.check_module(other)?;
        Ok(Self {
            module: self.module,
            coords: self
                .coords
                .iter()
                .zip(other.coords.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        })
    }

    /// Returns the additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            module: self.module,
            coords: self.coords.iter().map(|a| -a.clone()).collect(),
        }
    }

    /// Scales by a ring element.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        Self {
            module: self.module,
            coords: self
                .coords
                .iter()
                .map(|a| a.clone() * scalar.clone())
                .collect(),
        }
    }

    fn check_module(&self, other: &Self) -> Result<(), ModuleError> {
        if self.module == other.module {
            Ok(())
        } else {
            Err(ModuleError::Coercion)
        }
    }
}
