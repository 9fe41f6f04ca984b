//! Orbit demo
//!
//! Builds a sun / planet / moon hierarchy, spins every orbit pivot each frame
//! and logs world positions together with the per-frame motion of each body.
//!
//! Usage: `orbit_demo [config.toml|config.ron]`

mod config;

use config::{BodyConfig, OrbitConfig};
use scene_graph::config::{Config, ConfigError};
use scene_graph::foundation::collections::NodeKey;
use scene_graph::foundation::logging;
use scene_graph::foundation::math::utils::{deg_to_rad, wrap_angle};
use scene_graph::foundation::math::{translation_of, Vec3};
use scene_graph::scene::{SceneError, SceneGraph};
use thiserror::Error;

/// Demo errors
#[derive(Error, Debug)]
enum OrbitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Renderable payload carried by body nodes
#[derive(Debug)]
struct Body {
    name: String,
}

/// Pivot spinning around +Y and the body it carries
///
/// ```text
/// parent ─▶ pivot (rotates) ─▶ anchor (orbit radius) ─┬─▶ body (scale, payload)
///                                                     └─▶ moon pivots ...
/// ```
#[derive(Debug)]
struct Orbit {
    pivot: NodeKey,
    body: NodeKey,
    speed: f32,
    angle: f32,
}

fn spawn_body(
    graph: &mut SceneGraph<Body>,
    parent: NodeKey,
    config: &BodyConfig,
    orbits: &mut Vec<Orbit>,
) -> Result<(), SceneError> {
    let pivot = graph.create_node(config.id);
    graph.add_child(parent, pivot)?;

    let anchor = graph.create_node(0);
    graph.add_child(pivot, anchor)?;
    if let Some(node) = graph.node_mut(anchor) {
        node.set_position(Vec3::new(config.orbit_radius, 0.0, 0.0));
    }

    let body = graph.create_node_with_payload(
        0,
        Body {
            name: config.name.clone(),
        },
    );
    graph.add_child(anchor, body)?;
    if let Some(node) = graph.node_mut(body) {
        node.set_uniform_scale(config.scale);
    }

    orbits.push(Orbit {
        pivot,
        body,
        speed: deg_to_rad(config.orbit_speed),
        angle: 0.0,
    });

    for moon in &config.moons {
        spawn_body(graph, anchor, moon, orbits)?;
    }
    Ok(())
}

fn build_scene(config: &OrbitConfig) -> Result<(SceneGraph<Body>, Vec<Orbit>), SceneError> {
    let mut graph = SceneGraph::with_config(config.graph.clone());
    let system = graph.create_node(0);

    let sun = graph.create_node_with_payload(
        0,
        Body {
            name: "sun".to_string(),
        },
    );
    graph.add_child(system, sun)?;
    if let Some(node) = graph.node_mut(sun) {
        node.set_uniform_scale(config.sun_scale);
    }

    let mut orbits = Vec::new();
    for planet in &config.planets {
        spawn_body(&mut graph, system, planet, &mut orbits)?;
    }

    log::info!(
        "Built system with {} nodes and {} orbiting bodies",
        graph.len(),
        orbits.len()
    );
    Ok((graph, orbits))
}

/// Advance every orbit by one frame
fn step(graph: &mut SceneGraph<Body>, orbits: &mut [Orbit], frame_time: f32) {
    for orbit in orbits.iter_mut() {
        orbit.angle = wrap_angle(orbit.angle + orbit.speed * frame_time);
        if let Some(pivot) = graph.node_mut(orbit.pivot) {
            pivot.set_rotation_axis_angle(Vec3::y(), orbit.angle);
        }
    }
}

fn log_frame(graph: &mut SceneGraph<Body>, orbits: &[Orbit], frame: u32) -> Result<(), SceneError> {
    for orbit in orbits {
        let current = translation_of(&graph.transform(orbit.body)?);
        let previous = translation_of(&graph.prev_transform(orbit.body)?);
        let name = graph
            .node(orbit.body)
            .and_then(|node| node.payload())
            .map_or("?", |body| body.name.as_str());

        log::info!(
            "frame {:>4} {:<10} pos ({:>7.2}, {:>7.2}, {:>7.2}) motion {:.4}",
            frame,
            name,
            current.x,
            current.y,
            current.z,
            (current - previous).norm()
        );
    }
    Ok(())
}

fn run(config: &OrbitConfig) -> Result<(), OrbitError> {
    let (mut graph, mut orbits) = build_scene(config)?;
    graph.update_all(false)?;

    for frame in 0..config.frames {
        // last frame's transforms become the motion-vector history
        graph.update_all(true)?;
        step(&mut graph, &mut orbits, config.frame_time);
        graph.update_all(false)?;

        if config.log_every > 0 && frame % config.log_every == 0 {
            log_frame(&mut graph, &orbits, frame)?;
        }
    }

    log::info!("Simulated {} frames", config.frames);
    Ok(())
}

fn load_config() -> Result<OrbitConfig, OrbitError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading orbit config from {}", path);
            Ok(OrbitConfig::load_from_file(path)?)
        }
        None => {
            log::info!("No config given, using built-in system");
            Ok(OrbitConfig::default())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default_filter("info");

    let config = load_config()?;
    run(&config)?;
    Ok(())
}
