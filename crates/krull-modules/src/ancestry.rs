//! Ancestry walks over the submodule forest.
//!
//! Modules can only be compared through a common ancestor, found by a
//! pairwise walk over the parent chains. The walk is quadratic in chain
//! depth; chains are a handful of nodes deep in practice, and the walk
//! is allocation-free over arena indices.

use krull_rings::EuclideanDomain;

use crate::arena::ModuleArena;
use crate::handle::ModuleHandle;

impl<R: EuclideanDomain> ModuleArena<R> {
    /// Finds the closest common ancestor of two modules.
    ///
    /// Walks `m`'s parent chain; for each node, walks `n`'s chain testing
    /// handle identity. Returns `None` when the chains never meet, i.e.
    /// the modules live in unrelated families. `compatible(m, m)` is
    /// `Some(m)`, and the reported ancestor is symmetric in `m` and `n`.
    #[must_use]
    pub fn compatible(&self, m: ModuleHandle, n: ModuleHandle) -> Option<ModuleHandle> {
        let mut m1 = Some(m);
        while let Some(cur_m) = m1 {
            let mut n1 = Some(n);
            while let Some(cur_n) = n1 {
                if cur_m == cur_n {
                    return Some(cur_m);
                }
                n1 = self.node(cur_n).parent();
            }
            m1 = self.node(cur_m).parent();
        }
        None
    }

    /// Tests whether `n` is transitively a submodule of `m`.
    ///
    /// Walks `n`'s chain upward; identity with `m` anywhere (including
    /// `n == m`) means yes.
    #[must_use]
    pub fn is_submodule(&self, m: ModuleHandle, n: ModuleHandle) -> bool {
        let mut cur = Some(n);
        while let Some(handle) = cur {
            if handle == m {
                return true;
            }
            cur = self.node(handle).parent();
        }
        false
    }
}
