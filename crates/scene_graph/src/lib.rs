//! # Scene Graph
//!
//! A hierarchical scene graph for render hierarchies.
//!
//! ## Features
//!
//! - **Transform Hierarchy**: Per-node position, axis-angle rotation and scale
//!   composed top-down into cached world matrices
//! - **Lazy Recompute**: Dirty tracking with forced invalidation of subtrees
//! - **Motion Vectors**: Double-buffered transform history per node
//! - **Arena Ownership**: Nodes live in a slot map; parents own their children
//!   and destroying a node destroys its subtree
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_graph::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut graph: SceneGraph = SceneGraph::new();
//!     let root = graph.create_node(0);
//!     let child = graph.create_node(1);
//!     graph.add_child(root, child)?;
//!
//!     if let Some(node) = graph.node_mut(child) {
//!         node.set_position(Vec3::new(1.0, 0.0, 0.0));
//!     }
//!
//!     // once per frame: capture history, mutate, then recompute
//!     graph.update_all(true)?;
//!     graph.update_all(false)?;
//!
//!     let world = graph.transform(child)?;
//!     assert_eq!(world, Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0)));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;

/// Common imports for scene graph users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneGraphConfig},
        foundation::{
            collections::NodeKey,
            math::{axis_angle, AxisAngle, LocalTransform, Mat4, Vec3, Vec4},
        },
        scene::{NodeId, SceneError, SceneGraph, SceneNode, TransformState},
    };
}
