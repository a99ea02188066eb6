//! Editor configuration
//!
//! Loaded from RON. Every section has defaults, so a file only needs the
//! fields it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sk_core::constants::MAX_LIGHTS;
use sk_viewport::{CameraConfig, ViewportConfig};

/// Scene settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Maximum number of light-emitting objects
    pub max_lights: usize,
    /// Start with the demo scene instead of an empty one
    pub demo_scene: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_lights: MAX_LIGHTS,
            demo_scene: true,
        }
    }
}

/// Top-level editor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub viewport: ViewportConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
}

impl EditorConfig {
    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_ron(&content)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
