use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{AutoclockError, Result};

/// Deployment settings, loadable from a TOML file.
///
/// Covers the knobs that vary per deployment — today that is only where
/// the rendering service lives. The in-progress clock configuration is
/// never persisted; it lives and dies with the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rendering service settings.
    pub render: RenderSettings,
}

/// Settings for reaching the external rendering service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Base URL of the clock rendering service.
    pub base_url: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing fields fall back to their
    /// defaults.
    ///
    /// # Errors
    /// Returns [`AutoclockError::Io`] if the file cannot be read and
    /// [`AutoclockError::TomlParseError`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| AutoclockError::toml_parse(e, Some(path)))
    }
}
