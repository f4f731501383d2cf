//! Host key/value storage for setting values.
//!
//! Two storage classes: site options are global, theme modifications are
//! scoped to the active theme. Values are addressed by setting id.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use sitepanel_common::{SettingValue, StorageClass, StoreError};
use std::collections::BTreeMap;

/// Persistent storage the panel writes sanitized values into.
pub trait SettingsStore {
    /// Stored value for `id`, or `None` if never written.
    fn get(&self, class: StorageClass, id: &str) -> Option<SettingValue>;

    /// Persist `value` for `id`.
    fn set(&mut self, class: StorageClass, id: &str, value: SettingValue) -> Result<(), StoreError>;
}

/// Serialized shape shared by the in-memory and file-backed stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreData {
    pub options: BTreeMap<String, SettingValue>,
    pub theme_mods: BTreeMap<String, BTreeMap<String, SettingValue>>,
}

impl StoreData {
    pub fn get(&self, theme: &str, class: StorageClass, id: &str) -> Option<&SettingValue> {
        match class {
            StorageClass::SiteOption => self.options.get(id),
            StorageClass::ThemeMod => self.theme_mods.get(theme).and_then(|mods| mods.get(id)),
        }
    }

    pub fn set(&mut self, theme: &str, class: StorageClass, id: &str, value: SettingValue) {
        match class {
            StorageClass::SiteOption => {
                self.options.insert(id.to_string(), value);
            }
            StorageClass::ThemeMod => {
                self.theme_mods
                    .entry(theme.to_string())
                    .or_default()
                    .insert(id.to_string(), value);
            }
        }
    }
}
