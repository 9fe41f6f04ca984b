//! Node arena and hierarchy management
//!
//! [`SceneGraph`] owns every [`SceneNode`]. Ownership of a subtree follows the
//! children lists: destroying a node destroys everything reachable through
//! them. The `parent` link is only ever used for lookups.

use crate::config::SceneGraphConfig;
use crate::foundation::collections::{node_arena_with_capacity, NodeArena, NodeKey};
use crate::scene::error::{Result, SceneError};
use crate::scene::node::{NodeId, SceneNode};

/// Arena-backed scene hierarchy
///
/// Nodes without a parent are roots. A graph may hold several roots, which is
/// also where subtrees detached by [`SceneGraph::remove_child`] end up until
/// they are reparented or destroyed.
#[derive(Debug)]
pub struct SceneGraph<P = ()> {
    nodes: NodeArena<SceneNode<P>>,
    config: SceneGraphConfig,
}

impl<P> SceneGraph<P> {
    /// Create an empty graph with default configuration
    pub fn new() -> Self {
        Self::with_config(SceneGraphConfig::default())
    }

    /// Create an empty graph with custom configuration
    pub fn with_config(config: SceneGraphConfig) -> Self {
        Self {
            nodes: node_arena_with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SceneGraphConfig {
        &self.config
    }

    /// Create a root node with an identity transform
    pub fn create_node(&mut self, id: NodeId) -> NodeKey {
        self.insert_node(SceneNode::new(id))
    }

    /// Create a root node carrying `payload`
    pub fn create_node_with_payload(&mut self, id: NodeId, payload: P) -> NodeKey {
        self.insert_node(SceneNode::with_payload(id, payload))
    }

    /// Move a freshly built node into the graph as a root
    pub fn insert_node(&mut self, node: SceneNode<P>) -> NodeKey {
        let id = node.id();
        let key = self.nodes.insert(node);
        log::trace!("Created scene node {} as {:?}", id, key);
        key
    }

    /// True when `key` names a live node
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node
    pub fn node(&self, key: NodeKey) -> Option<&SceneNode<P>> {
        self.nodes.get(key)
    }

    /// Look up a node for mutation (setters, payload)
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode<P>> {
        self.nodes.get_mut(key)
    }

    /// Iterate over every live node in arena order
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &SceneNode<P>)> {
        self.nodes.iter()
    }

    pub(crate) fn get(&self, key: NodeKey) -> Result<&SceneNode<P>> {
        self.nodes.get(key).ok_or(SceneError::StaleNode(key))
    }

    pub(crate) fn get_mut(&mut self, key: NodeKey) -> Result<&mut SceneNode<P>> {
        self.nodes.get_mut(key).ok_or(SceneError::StaleNode(key))
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is detached from it first, so a node
    /// is never listed under two parents. The child is marked dirty since its
    /// world transform now depends on a different parent.
    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<()> {
        self.get(parent)?;
        let child_id = self.get(child)?.id();

        if parent == child {
            return Err(SceneError::SelfParent(child));
        }
        if self.is_ancestor(child, parent)? {
            return Err(SceneError::Cycle { parent, child });
        }

        if self.config.warn_on_duplicate_sibling_ids
            && self.child(parent, child_id)?.is_some_and(|existing| existing != child)
        {
            log::warn!(
                "Node {:?} already has a child with id {}; lookups by id will return the first one",
                parent,
                child_id
            );
        }

        self.detach(child)?;

        let node = self.get_mut(child)?;
        node.parent = Some(parent);
        node.mark_dirty();
        self.get_mut(parent)?.children.push(child);

        log::debug!("Attached node {} ({:?}) under {:?}", child_id, child, parent);
        Ok(())
    }

    /// Detach the first direct child of `parent` whose id is `id`.
    ///
    /// The removed subtree stays alive as a root of this graph and its key is
    /// handed back: reparent it with [`Self::add_child`] or release it with
    /// [`Self::destroy_node`]. Returns `Ok(None)` and leaves the children
    /// untouched when no child matches.
    pub fn remove_child(&mut self, parent: NodeKey, id: NodeId) -> Result<Option<NodeKey>> {
        match self.child(parent, id)? {
            Some(child) => {
                self.detach(child)?;
                Ok(Some(child))
            }
            None => Ok(None),
        }
    }

    /// Unlink `key` from its parent, making it a root.
    ///
    /// Returns the former parent. Detaching a root is a no-op.
    pub fn detach(&mut self, key: NodeKey) -> Result<Option<NodeKey>> {
        let former_parent = self.get(key)?.parent;

        if let Some(parent) = former_parent {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|&child| child != key);
            }
            let node = self.get_mut(key)?;
            node.parent = None;
            node.mark_dirty();
            log::debug!("Detached node {:?} from {:?}", key, parent);
        }

        Ok(former_parent)
    }

    /// First direct child of `parent` with the given id
    pub fn child(&self, parent: NodeKey, id: NodeId) -> Result<Option<NodeKey>> {
        let parent_node = self.get(parent)?;
        Ok(parent_node
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes.get(child).is_some_and(|node| node.id() == id)))
    }

    /// All nodes without a parent, in arena order
    pub fn roots(&self) -> Vec<NodeKey> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.is_root())
            .map(|(key, _)| key)
            .collect()
    }

    /// Parent chain of `key`, nearest first
    pub fn ancestors(&self, key: NodeKey) -> Result<Vec<NodeKey>> {
        let mut chain = Vec::new();
        let mut cursor = self.get(key)?.parent;
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.get(current)?.parent;
        }
        Ok(chain)
    }

    /// True when `ancestor` appears on the parent chain of `key`
    pub fn is_ancestor(&self, ancestor: NodeKey, key: NodeKey) -> Result<bool> {
        self.get(ancestor)?;
        let mut cursor = self.get(key)?.parent;
        while let Some(current) = cursor {
            if current == ancestor {
                return Ok(true);
            }
            cursor = self.get(current)?.parent;
        }
        Ok(false)
    }

    /// Number of edges between `key` and its root
    pub fn depth(&self, key: NodeKey) -> Result<usize> {
        Ok(self.ancestors(key)?.len())
    }

    /// `key` followed by its descendants, depth-first pre-order
    ///
    /// Every parent precedes its children and siblings keep insertion order.
    pub fn subtree(&self, key: NodeKey) -> Result<Vec<NodeKey>> {
        let mut order = Vec::new();
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            let node = self.get(current)?;
            order.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(order)
    }

    /// Descendants of `key`, depth-first pre-order, excluding `key`
    pub fn descendants(&self, key: NodeKey) -> Result<Vec<NodeKey>> {
        let mut order = self.subtree(key)?;
        order.remove(0);
        Ok(order)
    }

    /// Destroy `key` and every node it owns.
    ///
    /// The node is unlinked from its parent first; each node of the subtree is
    /// removed from the arena exactly once, dropping its payload. Returns the
    /// number of nodes destroyed. Keys into the subtree become stale.
    pub fn destroy_node(&mut self, key: NodeKey) -> Result<usize> {
        self.detach(key)?;
        let doomed = self.subtree(key)?;
        for &node in &doomed {
            self.nodes.remove(node);
        }
        log::debug!("Destroyed {} scene node(s) rooted at {:?}", doomed.len(), key);
        Ok(doomed.len())
    }

    /// Destroy every node
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<P> Default for SceneGraph<P> {
    fn default() -> Self {
        Self::new()
    }
}
