//! Scene hierarchy
//!
//! A tree of [`SceneNode`]s stored in a [`SceneGraph`] arena. Each node holds a
//! local transform (position, axis-angle rotation, scale) and caches its world
//! transform, computed top-down by chaining parent transforms.
//!
//! ## Ownership
//!
//! ```text
//! SceneGraph (arena, owns every node)
//!      │
//!      ├── root ──children──▶ child ──children──▶ grandchild
//!      │    ▲                   │
//!      │    └──── parent ───────┘   (lookup only)
//!      │
//!      └── detached root (from remove_child, awaiting reparent or destroy)
//! ```
//!
//! Destroying a node destroys its subtree. Mutation and traversal both go
//! through `&mut SceneGraph`, so a frame is driven from a single thread.

mod error;
mod graph;
mod node;
mod propagation;

#[cfg(test)]
mod tests;

pub use error::{Result, SceneError};
pub use graph::SceneGraph;
pub use node::{NodeId, SceneNode, TransformState};
