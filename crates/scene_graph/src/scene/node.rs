//! Scene node: local transform, cached world transform and hierarchy links
//!
//! A [`SceneNode`] is pure data plus setters. Everything that needs to look at
//! other nodes (parenting, world transform recomputation) lives on
//! [`super::SceneGraph`], which owns every node.

use crate::foundation::collections::NodeKey;
use crate::foundation::math::{axis_angle, AxisAngle, LocalTransform, Mat4, Vec3};

/// Externally assigned node identifier, unique among siblings only
pub type NodeId = u32;

/// Whether a node's cached world transform can be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformState {
    /// Cached transform reflects the current local fields and parent
    Clean,
    /// Local fields or hierarchy changed since the last recompute
    Dirty,
}

/// One node of the scene hierarchy
///
/// `P` is an opaque payload (mesh, material, ...) owned by the node and
/// dropped with it. The node never inspects it.
#[derive(Debug)]
pub struct SceneNode<P = ()> {
    id: NodeId,
    local: LocalTransform,
    state: TransformState,
    transform: Mat4,
    prev_transform: Mat4,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
    payload: Option<P>,
}

impl<P> SceneNode<P> {
    /// Create a detached node with an identity transform
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            local: LocalTransform::identity(),
            state: TransformState::Dirty,
            transform: Mat4::identity(),
            prev_transform: Mat4::identity(),
            parent: None,
            children: Vec::new(),
            payload: None,
        }
    }

    /// Create a detached node carrying `payload`
    pub fn with_payload(id: NodeId, payload: P) -> Self {
        Self {
            payload: Some(payload),
            ..Self::new(id)
        }
    }

    /// Node identifier
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Local translation
    pub fn position(&self) -> Vec3 {
        self.local.position
    }

    /// Local rotation as `(axis.x, axis.y, axis.z, angle)`
    pub fn rotation(&self) -> AxisAngle {
        self.local.rotation
    }

    /// Local scale
    pub fn scale(&self) -> Vec3 {
        self.local.scale
    }

    /// All local transform inputs
    pub fn local(&self) -> &LocalTransform {
        &self.local
    }

    /// Set the local translation
    pub fn set_position(&mut self, position: Vec3) {
        self.local.position = position;
        self.mark_dirty();
    }

    /// Set the local rotation from a packed axis-angle value
    pub fn set_rotation(&mut self, rotation: AxisAngle) {
        self.local.rotation = rotation;
        self.mark_dirty();
    }

    /// Set the local rotation from an axis and an angle in radians
    pub fn set_rotation_axis_angle(&mut self, axis: Vec3, angle: f32) {
        self.set_rotation(axis_angle(axis, angle));
    }

    /// Set per-axis scale factors
    pub fn set_scale(&mut self, scale: Vec3) {
        self.local.scale = scale;
        self.mark_dirty();
    }

    /// Set the same scale factor on all three axes
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.set_scale(Vec3::new(scale, scale, scale));
    }

    /// Local matrix `T * R * S`, ignoring the parent
    pub fn local_transform(&self) -> Mat4 {
        self.local.to_matrix()
    }

    /// Current dirty state
    pub fn transform_state(&self) -> TransformState {
        self.state
    }

    /// True when the cached world transform is stale
    pub fn is_dirty(&self) -> bool {
        self.state == TransformState::Dirty
    }

    /// Force the next transform read to recompute
    pub fn mark_dirty(&mut self) {
        self.state = TransformState::Dirty;
    }

    /// Last computed world transform, without recomputing.
    ///
    /// Stale while [`Self::is_dirty`]; use
    /// [`super::SceneGraph::transform`] for a checked read.
    pub fn cached_transform(&self) -> Mat4 {
        self.transform
    }

    /// World transform captured by the last update that asked for it
    pub fn prev_transform(&self) -> Mat4 {
        self.prev_transform
    }

    /// Parent node, `None` for a root
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// True when the node has no parent
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Snapshot of the children in insertion order
    pub fn children(&self) -> Vec<NodeKey> {
        self.children.clone()
    }

    /// Borrowed view of the children in insertion order
    pub fn children_slice(&self) -> &[NodeKey] {
        &self.children
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child at `index` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics when `index >= self.child_count()`. Callers must bounds-check.
    pub fn child_by_index(&self, index: usize) -> NodeKey {
        debug_assert!(
            index < self.children.len(),
            "child index out of bounds: node {} has {} children but the index is {}",
            self.id,
            self.children.len(),
            index
        );
        self.children[index]
    }

    /// Attached payload, if any
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Mutable access to the attached payload
    pub fn payload_mut(&mut self) -> Option<&mut P> {
        self.payload.as_mut()
    }

    /// Attach a payload, returning the one it replaces
    pub fn set_payload(&mut self, payload: P) -> Option<P> {
        self.payload.replace(payload)
    }

    /// Detach and return the payload
    pub fn take_payload(&mut self) -> Option<P> {
        self.payload.take()
    }

    pub(crate) fn store_transform(&mut self, transform: Mat4) {
        self.transform = transform;
    }

    pub(crate) fn mark_clean(&mut self) {
        self.state = TransformState::Clean;
    }

    pub(crate) fn snapshot_prev_transform(&mut self) {
        self.prev_transform = self.transform;
    }
}
