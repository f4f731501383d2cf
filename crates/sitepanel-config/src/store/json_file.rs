//! JSON-file backed store.
//!
//! The whole store is one JSON document:
//!
//! ```json
//! { "options": { "design_color": "#2e9feb" },
//!   "theme_mods": { "default": { "hide_tagline": 1 } } }
//! ```
//!
//! Every write rewrites the file atomically.

use sitepanel_common::{SettingValue, StorageClass, StoreError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{SettingsStore, StoreData};
use crate::toml_writer::write_atomic;

pub struct JsonFileStore {
    path: PathBuf,
    active_theme: String,
    data: StoreData,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>, active_theme: impl Into<String>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                StoreError::Parse(format!("failed to parse {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no store at {}, starting empty", path.display());
                StoreData::default()
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(Self {
            path,
            active_theme: active_theme.into(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn active_theme(&self) -> &str {
        &self.active_theme
    }

    fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        write_atomic(&self.path, &json)?;
        debug!("wrote store to {}", self.path.display());
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, class: StorageClass, id: &str) -> Option<SettingValue> {
        self.data.get(&self.active_theme, class, id).cloned()
    }

    /// Memory only takes the new value once it is on disk.
    fn set(&mut self, class: StorageClass, id: &str, value: SettingValue) -> Result<(), StoreError> {
        let mut next = self.data.clone();
        next.set(&self.active_theme, class, id, value);
        self.persist(&next)?;
        self.data = next;
        Ok(())
    }
}
