//! Scene graph errors

use crate::foundation::collections::NodeKey;
use thiserror::Error;

/// Errors reported by [`super::SceneGraph`] operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The key does not name a live node (never inserted, or destroyed)
    #[error("Scene node {0:?} does not exist")]
    StaleNode(NodeKey),

    /// A node was asked to become its own child
    #[error("Scene node {0:?} cannot be parented to itself")]
    SelfParent(NodeKey),

    /// The requested parent lives inside the child's subtree
    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// Requested parent
        parent: NodeKey,
        /// Node that was to be attached
        child: NodeKey,
    },
}

/// Result type alias using [`SceneError`]
pub type Result<T> = std::result::Result<T, SceneError>;
