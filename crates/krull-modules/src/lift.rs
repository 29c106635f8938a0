//! Lifting generators and elements into ancestor coordinates.
//!
//! Each submodule's embedding matrix sends its generators into the
//! parent's coordinate system; composing embeddings along the parent path
//! rewrites anything expressed in a module into any of its ancestors.
//! Embeddings are ring-linear, so lifting a generator matrix is a chain
//! of matrix products.

use krull_linalg::DenseMatrix;
use krull_rings::EuclideanDomain;

use crate::arena::ModuleArena;
use crate::element::Element;
use crate::error::ModuleError;
use crate::handle::ModuleHandle;
use crate::module::ModuleKind;

impl<R: EuclideanDomain> ModuleArena<R> {
    /// Rewrites the generators of `module` in `ancestor`'s coordinates.
    ///
    /// Returns an `ngens(module) x ngens(ancestor)` matrix whose row `i`
    /// is generator `i` lifted through every embedding on the path. For
    /// `module == ancestor` this is the identity.
    ///
    /// # Errors
    ///
    /// `IncompatibleModules` if `ancestor` is not on `module`'s parent
    /// chain.
    pub fn lift_generators(
        &self,
        module: ModuleHandle,
        ancestor: ModuleHandle,
    ) -> Result<DenseMatrix<R>, ModuleError> {
        let mut lifted = DenseMatrix::identity(self.ngens(module));
        let mut cur = module;
        while cur != ancestor {
            match self.node(cur).kind() {
                ModuleKind::Submodule { parent, embed } => {
                    lifted = lifted.mm(embed);
                    cur = *parent;
                }
                ModuleKind::Ambient => return Err(ModuleError::IncompatibleModules),
            }
        }
        Ok(lifted)
    }

    /// Rewrites a single element in `ancestor`'s coordinates.
    ///
    /// # Errors
    ///
    /// `IncompatibleModules` if `ancestor` is not on the chain of the
    /// element's module.
    pub fn lift_element(
        &self,
        element: &Element<R>,
        ancestor: ModuleHandle,
    ) -> Result<Element<R>, ModuleError> {
        let mut coords = element.coords().to_vec();
        let mut cur = element.module();
        while cur != ancestor {
            match self.node(cur).kind() {
                ModuleKind::Submodule { parent, embed } => {
                    coords = embed.vm(&coords);
                    cur = *parent;
                }
                ModuleKind::Ambient => return Err(ModuleError::IncompatibleModules),
            }
        }
        Ok(Element::from_coords(ancestor, coords))
    }
}
