//! Structural module equality by mutual containment.
//!
//! Two differently generated presentations of the same quotient must
//! compare equal, so equality is not a comparison of relation matrices:
//! both generator sets are lifted to the common ancestor and each is
//! solved against the other side's reduced lattice (generators plus the
//! ancestor's relations).

use krull_linalg::{can_solve_left_reduced_triu, reduced_form, DenseMatrix};
use krull_rings::EuclideanDomain;

use crate::arena::ModuleArena;
use crate::error::ModuleError;
use crate::handle::ModuleHandle;

impl<R: EuclideanDomain> ModuleArena<R> {
    /// Tests structural equality of two modules.
    ///
    /// # Errors
    ///
    /// `IncompatibleModules` if `m` and `n` share no common ancestor.
    pub fn is_equal(&self, m: ModuleHandle, n: ModuleHandle) -> Result<bool, ModuleError> {
        let ancestor = self
            .compatible(m, n)
            .ok_or(ModuleError::IncompatibleModules)?;

        let m_gens = self.lift_generators(m, ancestor)?;
        let n_gens = self.lift_generators(n, ancestor)?;
        let ancestor_rels = self.rels(ancestor);

        let m_basis = reduced_form(&m_gens.vstack(ancestor_rels));
        let n_basis = reduced_form(&n_gens.vstack(ancestor_rels));

        Ok(contains(&n_basis, &m_gens) && contains(&m_basis, &n_gens))
    }
}

/// Tests that every row of `rows` solves against the reduced `basis`.
fn contains<R: EuclideanDomain>(basis: &DenseMatrix<R>, rows: &DenseMatrix<R>) -> bool {
    (0..rows.num_rows()).all(|i| can_solve_left_reduced_triu(rows.row(i), basis).is_some())
}
