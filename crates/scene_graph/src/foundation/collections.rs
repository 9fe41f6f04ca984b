//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generational handle to a node stored in a [`crate::scene::SceneGraph`]
    ///
    /// Keys of destroyed nodes never alias a newer node; lookups with them
    /// simply fail.
    pub struct NodeKey;
}

/// Handle-based arena of scene nodes
pub type NodeArena<T> = SlotMap<NodeKey, T>;

/// Create an arena with room for `capacity` nodes before reallocating
pub fn node_arena_with_capacity<T>(capacity: usize) -> NodeArena<T> {
    SlotMap::with_capacity_and_key(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_key_is_not_reused() {
        let mut arena: NodeArena<u32> = node_arena_with_capacity(4);
        let first = arena.insert(1);
        arena.remove(first);
        let second = arena.insert(2);

        assert_ne!(first, second);
        assert!(arena.get(first).is_none());
        assert_eq!(arena.get(second), Some(&2));
    }
}
