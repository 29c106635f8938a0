//! Module intersection via left kernels.
//!
//! A kernel relation of the stacked matrix `[ancestor rels; N gens;
//! M gens]` says some combination of `M`'s lifted generators equals the
//! negative of a combination of `N`'s, modulo the ancestor's relations,
//! which is exactly an element of both submodules. The coefficients on the `M`
//! block are therefore coordinates of intersection generators in `M`.

use krull_linalg::left_kernel;
use krull_rings::EuclideanDomain;

use crate::arena::ModuleArena;
use crate::element::Element;
use crate::error::ModuleError;
use crate::handle::ModuleHandle;

impl<R: EuclideanDomain> ModuleArena<R> {
    /// Computes the intersection of two modules as a submodule of `m`.
    ///
    /// The generating set read off the kernel is minimized by the
    /// submodule construction, so the result carries a canonical
    /// presentation.
    ///
    /// # Errors
    ///
    /// `IncompatibleModules` if `m` and `n` share no common ancestor.
    pub fn intersect(
        &mut self,
        m: ModuleHandle,
        n: ModuleHandle,
    ) -> Result<ModuleHandle, ModuleError> {
        let ancestor = self
            .compatible(m, n)
            .ok_or(ModuleError::IncompatibleModules)?;

        let m_gens = self.lift_generators(m, ancestor)?;
        let n_gens = self.lift_generators(n, ancestor)?;
        let ancestor_rels = self.rels(ancestor).clone();

        let stacked = ancestor_rels.vstack(&n_gens).vstack(&m_gens);
        let (_, kernel) = left_kernel(&stacked);

        let m_block = ancestor_rels.num_rows() + n_gens.num_rows();
        let gens: Vec<Element<R>> = (0..kernel.num_rows())
            .map(|i| Element::from_coords(m, kernel.row(i)[m_block..].to_vec()))
            .collect();

        let (intersection, _) = self.submodule(m, &gens)?;
        Ok(intersection)
    }
}
