//! World transform computation
//!
//! Each node caches its world transform. Setters and reparenting mark a node
//! dirty; the next update recomputes it as `parent_world * T * R * S` and then
//! forces its whole subtree to recompute, parent before child. A second matrix,
//! `prev_transform`, keeps the value captured by the last update that asked
//! for it so renderers can derive motion vectors across frames.

use crate::foundation::collections::NodeKey;
use crate::foundation::math::{translation_of, Mat4, Vec3};
use crate::scene::error::Result;
use crate::scene::graph::SceneGraph;

impl<P> SceneGraph<P> {
    /// World transform of `key`, recomputing it first when dirty.
    ///
    /// Composition uses the parent's cached transform, so parents must be
    /// current: read top-down, or call [`Self::update_all`] once per frame.
    /// [`Self::world_transform`] lifts that requirement.
    pub fn transform(&mut self, key: NodeKey) -> Result<Mat4> {
        if self.get(key)?.is_dirty() {
            self.update_transform(key, false)?;
        }
        Ok(self.get(key)?.cached_transform())
    }

    /// World transform of `key` with any dirty ancestors brought up to date.
    ///
    /// The highest dirty node on the parent chain is recomputed, which in turn
    /// refreshes everything below it, including `key`.
    pub fn world_transform(&mut self, key: NodeKey) -> Result<Mat4> {
        let mut highest_dirty = None;
        let mut cursor = Some(key);
        while let Some(current) = cursor {
            let node = self.get(current)?;
            if node.is_dirty() {
                highest_dirty = Some(current);
            }
            cursor = node.parent();
        }

        if let Some(stale) = highest_dirty {
            self.update_transform(stale, false)?;
        }
        Ok(self.get(key)?.cached_transform())
    }

    /// World-space position of `key`'s origin
    pub fn world_position(&mut self, key: NodeKey) -> Result<Vec3> {
        Ok(translation_of(&self.world_transform(key)?))
    }

    /// Transform captured by the last update of `key` with `update_prev` set.
    ///
    /// Never recomputes anything.
    pub fn prev_transform(&self, key: NodeKey) -> Result<Mat4> {
        Ok(self.get(key)?.prev_transform())
    }

    /// Bring `key` and its subtree up to date.
    ///
    /// A clean node is left as is. A dirty node is recomputed from its local
    /// fields and its parent's cached transform, then every child is forced
    /// dirty and updated recursively with the same `update_prev`. Finally,
    /// when `update_prev` is set, the current transform is copied into
    /// `prev_transform` whether or not anything was recomputed.
    pub fn update_transform(&mut self, key: NodeKey, update_prev: bool) -> Result<()> {
        let node = self.get(key)?;

        if node.is_dirty() {
            let local = node.local_transform();
            let children = node.children_slice().to_vec();
            let world = match node.parent() {
                Some(parent) => self.get(parent)?.cached_transform() * local,
                None => local,
            };

            let node = self.get_mut(key)?;
            node.store_transform(world);
            log::trace!("Recomputed transform of node {} ({:?})", node.id(), key);

            for child in children {
                self.get_mut(child)?.mark_dirty();
                self.update_transform(child, update_prev)?;
            }

            self.get_mut(key)?.mark_clean();
        }

        if update_prev {
            self.get_mut(key)?.snapshot_prev_transform();
        }
        Ok(())
    }

    /// Update every node of the graph, roots first, parents before children.
    ///
    /// Afterwards every node is clean and, when `update_prev` is set, every
    /// node's `prev_transform` equals its current transform. Intended as the
    /// once-per-frame driver.
    pub fn update_all(&mut self, update_prev: bool) -> Result<()> {
        for root in self.roots() {
            for key in self.subtree(root)? {
                self.update_transform(key, update_prev)?;
            }
        }
        Ok(())
    }
}
