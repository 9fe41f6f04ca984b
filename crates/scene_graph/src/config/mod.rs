//! Configuration system

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Tuning knobs for a [`crate::scene::SceneGraph`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneGraphConfig {
    /// Number of nodes the arena reserves up front
    pub initial_capacity: usize,

    /// Log a warning when a child joins a parent that already has a child
    /// with the same id
    pub warn_on_duplicate_sibling_ids: bool,
}

impl Default for SceneGraphConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            warn_on_duplicate_sibling_ids: true,
        }
    }
}

impl Config for SceneGraphConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scene_graph_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_toml_roundtrip() {
        let path = scratch_path("graph.toml");
        let config = SceneGraphConfig {
            initial_capacity: 512,
            warn_on_duplicate_sibling_ids: false,
        };

        config.save_to_file(&path).unwrap();
        let loaded = SceneGraphConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_roundtrip() {
        let path = scratch_path("graph.ron");
        let config = SceneGraphConfig {
            initial_capacity: 8,
            ..Default::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = SceneGraphConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SceneGraphConfig = toml::from_str("initial_capacity = 3").unwrap();
        assert_eq!(config.initial_capacity, 3);
        assert!(config.warn_on_duplicate_sibling_ids);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SceneGraphConfig::default().save_to_file(scratch_path("graph.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SceneGraphConfig::load_from_file(scratch_path("does_not_exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
