use sitepanel_common::{SettingValue, StorageClass, StoreError};

use super::{SettingsStore, StoreData};

/// Process-local store. Used by tests and dry runs.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    active_theme: String,
    data: StoreData,
}

impl MemoryStore {
    pub fn new(active_theme: impl Into<String>) -> Self {
        Self {
            active_theme: active_theme.into(),
            data: StoreData::default(),
        }
    }

    pub fn active_theme(&self) -> &str {
        &self.active_theme
    }

    /// Switch the active theme; theme modifications of the previous theme
    /// are kept but no longer visible.
    pub fn switch_theme(&mut self, theme: impl Into<String>) {
        self.active_theme = theme.into();
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("default")
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, class: StorageClass, id: &str) -> Option<SettingValue> {
        self.data.get(&self.active_theme, class, id).cloned()
    }

    fn set(&mut self, class: StorageClass, id: &str, value: SettingValue) -> Result<(), StoreError> {
        self.data.set(&self.active_theme, class, id, value);
        Ok(())
    }
}
