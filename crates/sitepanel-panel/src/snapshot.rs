use sitepanel_common::SettingValue;
use sitepanel_config::SettingsStore;
use std::collections::BTreeMap;

use crate::registry::Registry;

/// Current value of every registered setting: the stored value, else the
/// registered default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSnapshot {
    values: BTreeMap<String, SettingValue>,
}

impl ValueSnapshot {
    pub fn capture<S: SettingsStore + ?Sized>(registry: &Registry, store: &S) -> Self {
        let values = registry
            .settings()
            .map(|setting| {
                let value = store
                    .get(setting.storage_class, &setting.id)
                    .unwrap_or_else(|| setting.default.clone());
                (setting.id.clone(), value)
            })
            .collect();
        Self { values }
    }

    /// Every setting at its registered default.
    pub fn defaults(registry: &Registry) -> Self {
        let values = registry
            .settings()
            .map(|s| (s.id.clone(), s.default.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, id: &str) -> Option<&SettingValue> {
        self.values.get(id)
    }

    /// Value as text; unknown ids read as `""`.
    pub fn text(&self, id: &str) -> String {
        self.values.get(id).map(SettingValue::to_text).unwrap_or_default()
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.values.get(id).is_some_and(SettingValue::is_checked)
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn with(mut self, id: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.set(id, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{default_registry, ids};
    use sitepanel_common::StorageClass;
    use sitepanel_config::MemoryStore;

    #[test]
    fn stored_values_override_defaults() {
        let registry = default_registry().unwrap();
        let mut store = MemoryStore::default();
        store
            .set(StorageClass::SiteOption, ids::DESIGN_COLOR, "#2e9feb".into())
            .unwrap();

        let snapshot = ValueSnapshot::capture(&registry, &store);
        assert_eq!(snapshot.text(ids::DESIGN_COLOR), "#2e9feb");
        assert_eq!(snapshot.text(ids::DESIGN_COLOR_TEXT), "#ffffff");
        assert_eq!(snapshot.text(ids::READ_MORE_TEXT), "Continue reading");
        assert!(!snapshot.is_checked(ids::HIDE_TAGLINE));
        assert_eq!(snapshot.get(ids::LOGO), Some(&SettingValue::Null));
    }

    #[test]
    fn wrong_storage_class_is_not_read() {
        let registry = default_registry().unwrap();
        let mut store = MemoryStore::default();
        store
            .set(StorageClass::ThemeMod, ids::DESIGN_COLOR, "#111111".into())
            .unwrap();

        let snapshot = ValueSnapshot::capture(&registry, &store);
        assert_eq!(snapshot.text(ids::DESIGN_COLOR), "#000000");
    }

    #[test]
    fn unknown_ids_read_empty() {
        let snapshot = ValueSnapshot::default().with("a", SettingValue::Int(1));
        assert!(snapshot.is_checked("a"));
        assert_eq!(snapshot.text("missing"), "");
        assert!(!snapshot.is_checked("missing"));
        assert_eq!(snapshot.iter().count(), 1);
    }
}
