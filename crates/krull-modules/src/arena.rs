//! Arena storage for the submodule forest.
//!
//! All modules live in a flat table; parent links are handles into the
//! same table, so many submodules can share one parent without reference
//! counting or lifetime tracking. Nodes are immutable once inserted and
//! never removed, which makes handle identity a sound notion of module
//! identity.
//!
//! Free-module construction is memoized by rank: repeated construction of
//! the ambient `R^n` returns the identical handle, mirroring cached
//! parent-object registries. Callers that need a genuinely fresh root
//! (for instance to model an unrelated module family) opt out with
//! [`ModuleArena::free_module_uncached`]. The cache is cleared only by an
//! explicit reset and clearing it never invalidates existing handles.

use hashbrown::HashMap;

use krull_linalg::DenseMatrix;
use krull_rings::EuclideanDomain;

use crate::handle::ModuleHandle;
use crate::module::{ModuleKind, ModuleNode};

/// The arena holding a forest of finitely presented modules.
#[derive(Debug)]
pub struct ModuleArena<R: EuclideanDomain> {
    /// Storage for all module nodes.
    nodes: Vec<ModuleNode<R>>,
    /// Memoization table for free modules, keyed by rank.
    free_cache: HashMap<usize, ModuleHandle>,
}

impl<R: EuclideanDomain> Default for ModuleArena<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EuclideanDomain> ModuleArena<R> {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_cache: HashMap::new(),
        }
    }

    /// Inserts a node, returning its handle.
    pub(crate) fn insert(&mut self, node: ModuleNode<R>) -> ModuleHandle {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Arena capacity exceeded");
        self.nodes.push(node);
        ModuleHandle::new(index as u32)
    }

    /// Gets the node behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle comes from a different arena.
    #[must_use]
    pub fn node(&self, handle: ModuleHandle) -> &ModuleNode<R> {
        &self.nodes[handle.index() as usize]
    }

    /// Returns the number of modules in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Builds (or retrieves the memoized) free module of the given rank.
    pub fn free_module(&mut self, rank: usize) -> ModuleHandle {
        if let Some(&handle) = self.free_cache.get(&rank) {
            return handle;
        }
        let handle = self.free_module_uncached(rank);
        self.free_cache.insert(rank, handle);
        handle
    }

    /// Builds a fresh free module of the given rank, bypassing the cache.
    ///
    /// The result is a new root: it is not compatible with any module
    /// built before it, including cached free modules of the same rank.
    pub fn free_module_uncached(&mut self, rank: usize) -> ModuleHandle {
        self.insert(ModuleNode::new(
            rank,
            DenseMatrix::zeros(0, rank),
            ModuleKind::Ambient,
        ))
    }

    /// Clears the free-module memoization table.
    ///
    /// Existing handles stay valid; subsequent `free_module` calls build
    /// fresh roots.
    pub fn clear_free_cache(&mut self) {
        self.free_cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krull_rings::Z;

    #[test]
    fn test_free_module_is_memoized() {
        let mut arena: ModuleArena<Z> = ModuleArena::new();

        let f1 = arena.free_module(3);
        let f2 = arena.free_module(3);
        let g = arena.free_module(2);

        assert_eq!(f1, f2);
        assert_ne!(f1, g);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_uncached_roots_are_distinct() {
        let mut arena: ModuleArena<Z> = ModuleArena::new();

        let f = arena.free_module(2);
        let g = arena.free_module_uncached(2);
        assert_ne!(f, g);

        // Cached lookups still return the original.
        assert_eq!(arena.free_module(2), f);
    }

    #[test]
    fn test_cache_reset_keeps_handles_valid() {
        let mut arena: ModuleArena<Z> = ModuleArena::new();

        let f = arena.free_module(2);
        arena.clear_free_cache();
        let g = arena.free_module(2);

        assert_ne!(f, g);
        assert_eq!(arena.node(f).ngens(), 2);
        assert_eq!(arena.node(g).ngens(), 2);
    }
}
