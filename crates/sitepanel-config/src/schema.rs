//! Configuration schema for the sitepanel tool.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};
use sitepanel_common::ConfigError;
use std::path::PathBuf;

use crate::toml_loader::default_store_path;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub storage: StorageConfig,
    pub preview: PreviewConfig,
    pub logging: LoggingConfig,
}

impl PanelConfig {
    /// Resolved store path: the configured one, or the platform default.
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        if self.storage.path.is_empty() {
            default_store_path()
        } else {
            Ok(PathBuf::from(&self.storage.path))
        }
    }
}

/// Where setting values are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON store file. Empty means the platform default location.
    pub path: String,
    /// Theme that theme-modification values are scoped to.
    pub active_theme: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            active_theme: "default".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Quiet period before a full-reload setting reloads the preview frame.
    pub reload_debounce_ms: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            reload_debounce_ms: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
