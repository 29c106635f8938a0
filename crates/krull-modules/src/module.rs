//! Module representation and submodule construction.
//!
//! A node carries its generator count, a relation matrix in canonical
//! reduced triangular form, and its variant: an ambient root or a
//! submodule with a parent handle and an embedding matrix. The embedding
//! has one row per generator, giving that generator's coordinates in the
//! parent's generators.

use krull_linalg::{left_kernel, reduced_form, DenseMatrix};
use krull_rings::EuclideanDomain;

use crate::arena::ModuleArena;
use crate::cull::{cull_matrix, eliminate_culled};
use crate::element::Element;
use crate::error::ModuleError;
use crate::handle::ModuleHandle;

/// The variant of a module node.
#[derive(Debug, Clone)]
pub enum ModuleKind<R> {
    /// A root module with no parent.
    Ambient,
    /// A submodule of `parent`, embedded by a generator-coordinate matrix.
    Submodule {
        /// The immediate parent in the submodule forest.
        parent: ModuleHandle,
        /// Row `i` gives generator `i`'s coordinates in the parent.
        embed: DenseMatrix<R>,
    },
}

/// An immutable module node in the arena.
///
/// Invariant: `rels` is in canonical reduced triangular form with
/// `rels.num_cols() == ngens` and no zero rows.
#[derive(Debug, Clone)]
pub struct ModuleNode<R> {
    ngens: usize,
    rels: DenseMatrix<R>,
    kind: ModuleKind<R>,
}

impl<R: EuclideanDomain> ModuleNode<R> {
    pub(crate) fn new(ngens: usize, rels: DenseMatrix<R>, kind: ModuleKind<R>) -> Self {
        debug_assert_eq!(rels.num_cols(), ngens);
        Self { ngens, rels, kind }
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn ngens(&self) -> usize {
        self.ngens
    }

    /// Returns the defining relation matrix.
    #[must_use]
    pub fn rels(&self) -> &DenseMatrix<R> {
        &self.rels
    }

    /// Returns the module variant.
    #[must_use]
    pub fn kind(&self) -> &ModuleKind<R> {
        &self.kind
    }

    /// Returns the parent handle, `None` for ambient modules.
    #[must_use]
    pub fn parent(&self) -> Option<ModuleHandle> {
        match self.kind {
            ModuleKind::Ambient => None,
            ModuleKind::Submodule { parent, .. } => Some(parent),
        }
    }

    /// Returns the embedding into the parent, `None` for ambient modules.
    #[must_use]
    pub fn embedding(&self) -> Option<&DenseMatrix<R>> {
        match &self.kind {
            ModuleKind::Ambient => None,
            ModuleKind::Submodule { embed, .. } => Some(embed),
        }
    }

    /// Returns true for root modules.
    #[must_use]
    pub fn is_ambient(&self) -> bool {
        matches!(self.kind, ModuleKind::Ambient)
    }
}

impl<R: EuclideanDomain> ModuleArena<R> {
    /// Returns the generator count of a module.
    #[must_use]
    pub fn ngens(&self, module: ModuleHandle) -> usize {
        self.node(module).ngens
    }

    /// Returns the relation matrix of a module.
    #[must_use]
    pub fn rels(&self, module: ModuleHandle) -> &DenseMatrix<R> {
        &self.node(module).rels
    }

    /// Returns the additive identity of a module.
    #[must_use]
    pub fn zero(&self, module: ModuleHandle) -> Element<R> {
        Element::from_coords(module, vec![R::zero(); self.node(module).ngens])
    }

    /// Builds an element of `module` from a coordinate vector.
    ///
    /// # Errors
    ///
    /// `IncompatibleDimensions` if the vector length is not the
    /// module's generator count.
    pub fn element(
        &self,
        module: ModuleHandle,
        coords: Vec<R>,
    ) -> Result<Element<R>, ModuleError> {
        let expected = self.node(module).ngens;
        if coords.len() != expected {
            return Err(ModuleError::IncompatibleDimensions {
                expected,
                found: coords.len(),
            });
        }
        Ok(Element::from_coords(module, coords))
    }

    /// Builds an ambient module with a non-free presentation.
    ///
    /// The relations are canonicalized on entry, so the node satisfies
    /// the reduced-triangular invariant like every other module.
    ///
    /// # Errors
    ///
    /// `IncompatibleDimensions` if the relation matrix does not have
    /// `rank` columns.
    pub fn ambient_module(
        &mut self,
        rank: usize,
        rels: &DenseMatrix<R>,
    ) -> Result<ModuleHandle, ModuleError> {
        if rels.num_cols() != rank {
            return Err(ModuleError::IncompatibleDimensions {
                expected: rank,
                found: rels.num_cols(),
            });
        }
        let rels = reduced_form(rels);
        Ok(self.insert(ModuleNode::new(rank, rels, ModuleKind::Ambient)))
    }

    /// Builds the submodule of `parent` spanned by the given generators.
    ///
    /// Returns the new handle together with its embedding matrix (one row
    /// per generator of the new module, in parent coordinates). The
    /// parent is never mutated.
    ///
    /// The construction pipeline:
    /// 1. stack the generator rows with the parent's relations and
    ///    reduce; the nonzero rows are the candidate generators;
    /// 2. compute the relations among the candidates as the left kernel
    ///    of `[candidates; parent rels]` restricted to the candidate
    ///    block;
    /// 3. cull relations with unit pivots and eliminate the matching
    ///    generators by back-substitution.
    ///
    /// # Errors
    ///
    /// `Coercion` if a generator belongs to a module other than `parent`.
    pub fn submodule(
        &mut self,
        parent: ModuleHandle,
        gens: &[Element<R>],
    ) -> Result<(ModuleHandle, DenseMatrix<R>), ModuleError> {
        let parent_ngens = self.node(parent).ngens;
        for gen in gens {
            if gen.module() != parent {
                return Err(ModuleError::Coercion);
            }
        }

        let gen_matrix = if gens.is_empty() {
            DenseMatrix::zeros(0, parent_ngens)
        } else {
            DenseMatrix::from_rows(gens.iter().map(|g| g.coords().to_vec()).collect())
        };
        let parent_rels = self.node(parent).rels.clone();

        // 1. Candidate generators: canonical basis of span(gens) + span(rels).
        let candidates = reduced_form(&gen_matrix.vstack(&parent_rels));
        let num_candidates = candidates.num_rows();

        // 2. Relations: kernel vectors (v | w) with v*candidates + w*rels = 0
        // say v*candidates lies in the parent's relation lattice, i.e. v is
        // a relation among the candidate generators.
        let (_, kernel) = left_kernel(&candidates.vstack(&parent_rels));
        let rel_rows: Vec<Vec<R>> = (0..kernel.num_rows())
            .map(|i| kernel.row(i)[..num_candidates].to_vec())
            .collect();
        let raw_rels = if rel_rows.is_empty() {
            DenseMatrix::zeros(0, num_candidates)
        } else {
            DenseMatrix::from_rows(rel_rows)
        };
        let raw_rels = reduced_form(&raw_rels);

        // 3. Minimal presentation: drop generators defined by unit pivots.
        let cull = cull_matrix(&raw_rels);
        let (rels, surviving) = eliminate_culled(&raw_rels, &cull);

        let embed = if surviving.is_empty() {
            DenseMatrix::zeros(0, parent_ngens)
        } else {
            let all_cols: Vec<usize> = (0..parent_ngens).collect();
            candidates.select(&surviving, &all_cols)
        };

        let node = ModuleNode::new(
            surviving.len(),
            rels,
            ModuleKind::Submodule {
                parent,
                embed: embed.clone(),
            },
        );
        Ok((self.insert(node), embed))
    }
}
