//! Type-safe module handles.
//!
//! Handles are 32-bit indices into the arena. Module identity is handle
//! equality: two handles compare equal exactly when they name the same
//! node, which is what the ancestry walker relies on. Structural equality
//! of differently constructed modules is a separate, computed relation
//! (`ModuleArena::is_equal`).

use std::fmt;

/// A handle to a module in the arena.
///
/// This is a lightweight 32-bit index that can be copied freely. A handle
/// stays valid for the lifetime of its arena; modules are never removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleHandle(u32);

impl ModuleHandle {
    /// Wraps a raw arena index.
    ///
    /// The arena is the only place that mints fresh handles; a handle
    /// built from an arbitrary index may not name a live node.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Module({})", self.0)
    }
}

impl fmt::Display for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_index_equality() {
        let a = ModuleHandle::new(7);
        let b = ModuleHandle::new(7);

        assert_eq!(a, b);
        assert_ne!(a, ModuleHandle::new(8));
        assert_eq!(b.index(), 7);
    }

    #[test]
    fn test_formatting() {
        let h = ModuleHandle::new(3);
        assert_eq!(format!("{h:?}"), "Module(3)");
        assert_eq!(format!("{h}"), "#3");
    }

    #[test]
    fn test_handles_are_cheap_to_pass_by_value() {
        assert!(std::mem::size_of::<ModuleHandle>() <= std::mem::size_of::<usize>());
    }
}
