//! Orbit demo configuration

use scene_graph::config::{Config, SceneGraphConfig};
use serde::{Deserialize, Serialize};

/// Top-level demo configuration, loaded from TOML or RON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Number of frames to simulate
    pub frames: u32,

    /// Simulated seconds per frame
    pub frame_time: f32,

    /// Uniform scale of the sun
    pub sun_scale: f32,

    /// Log every n-th frame
    pub log_every: u32,

    /// Scene graph tuning
    pub graph: SceneGraphConfig,

    /// Planets orbiting the sun
    pub planets: Vec<BodyConfig>,
}

/// A body orbiting its parent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Node id, unique among siblings
    pub id: u32,

    /// Display name
    pub name: String,

    /// Distance from the parent body
    pub orbit_radius: f32,

    /// Orbit speed in degrees per second
    pub orbit_speed: f32,

    /// Uniform scale
    #[serde(default = "unit_scale")]
    pub scale: f32,

    /// Bodies orbiting this one
    #[serde(default)]
    pub moons: Vec<BodyConfig>,
}

fn unit_scale() -> f32 {
    1.0
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            frame_time: 1.0 / 60.0,
            sun_scale: 4.0,
            log_every: 30,
            graph: SceneGraphConfig::default(),
            planets: vec![
                BodyConfig {
                    id: 1,
                    name: "inner".to_string(),
                    orbit_radius: 10.0,
                    orbit_speed: 90.0,
                    scale: 0.5,
                    moons: Vec::new(),
                },
                BodyConfig {
                    id: 2,
                    name: "outer".to_string(),
                    orbit_radius: 25.0,
                    orbit_speed: 30.0,
                    scale: 1.0,
                    moons: vec![BodyConfig {
                        id: 1,
                        name: "outer-moon".to_string(),
                        orbit_radius: 3.0,
                        orbit_speed: 180.0,
                        scale: 0.25,
                        moons: Vec::new(),
                    }],
                },
            ],
        }
    }
}

impl Config for OrbitConfig {}
