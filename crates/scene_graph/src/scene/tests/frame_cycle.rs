//! Frame-by-frame usage: snapshot pass, mutation, recompute pass, read

use crate::foundation::math::constants::HALF_PI;
use crate::foundation::math::{translation_of, Mat4, Vec3};
use crate::scene::SceneGraph;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_motion_vector_over_two_frames() {
        let mut graph: SceneGraph = SceneGraph::new();
        let pivot = graph.create_node(0);
        let body = graph.create_node(1);
        graph.add_child(pivot, body).unwrap();
        graph.node_mut(body).unwrap().set_position(Vec3::new(2.0, 0.0, 0.0));

        // frame 1
        graph.update_all(true).unwrap();
        graph.update_all(false).unwrap();
        let frame_one = graph.transform(body).unwrap();

        // frame 2: capture last frame, then advance the pivot
        graph.update_all(true).unwrap();
        graph
            .node_mut(pivot)
            .unwrap()
            .set_rotation_axis_angle(Vec3::y(), HALF_PI);
        graph.update_all(false).unwrap();

        let current = translation_of(&graph.transform(body).unwrap());
        let previous = translation_of(&graph.prev_transform(body).unwrap());

        assert_eq!(graph.prev_transform(body).unwrap(), frame_one);
        assert_relative_eq!(previous, Vec3::new(2.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(current, Vec3::new(0.0, 0.0, -2.0), epsilon = EPSILON);
        assert_relative_eq!(current - previous, Vec3::new(-2.0, 0.0, -2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_static_node_has_zero_motion() {
        let mut graph: SceneGraph = SceneGraph::new();
        let node = graph.create_node(0);
        graph.node_mut(node).unwrap().set_position(Vec3::new(0.0, 1.0, 0.0));

        for _ in 0..3 {
            graph.update_all(true).unwrap();
            graph.update_all(false).unwrap();
        }

        assert_eq!(graph.prev_transform(node).unwrap(), graph.transform(node).unwrap());
    }

    #[test]
    fn test_reparented_node_composes_with_new_parent() {
        let mut graph: SceneGraph = SceneGraph::new();
        let left = graph.create_node(0);
        let right = graph.create_node(1);
        let item = graph.create_node(2);
        graph.node_mut(left).unwrap().set_position(Vec3::new(-5.0, 0.0, 0.0));
        graph.node_mut(right).unwrap().set_position(Vec3::new(5.0, 0.0, 0.0));
        graph.add_child(left, item).unwrap();
        graph.update_all(false).unwrap();
        assert_relative_eq!(graph.world_position(item).unwrap(), Vec3::new(-5.0, 0.0, 0.0));

        graph.add_child(right, item).unwrap();
        graph.update_all(false).unwrap();

        assert_relative_eq!(graph.world_position(item).unwrap(), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_removed_child_falls_back_to_local_space() {
        let mut graph: SceneGraph = SceneGraph::new();
        let root = graph.create_node(0);
        let child = graph.create_node(1);
        graph.add_child(root, child).unwrap();
        graph.node_mut(root).unwrap().set_uniform_scale(3.0);
        graph.update_all(false).unwrap();

        let removed = graph.remove_child(root, 1).unwrap().unwrap();

        assert_eq!(removed, child);
        assert_relative_eq!(graph.transform(child).unwrap(), Mat4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_child_by_index_in_range() {
        let mut graph: SceneGraph = SceneGraph::new();
        let root = graph.create_node(0);
        let child = graph.create_node(1);
        graph.add_child(root, child).unwrap();

        let node = graph.node(root).unwrap();
        assert_eq!(node.child_by_index(node.child_count() - 1), child);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_child_by_index_past_end_panics() {
        let mut graph: SceneGraph = SceneGraph::new();
        let root = graph.create_node(0);
        let child = graph.create_node(1);
        graph.add_child(root, child).unwrap();

        let node = graph.node(root).unwrap();
        node.child_by_index(node.child_count());
    }
}
