//! One admin editing session over a frozen registry.

use serde::Serialize;
use sitepanel_common::{SanitizeError, SessionId, SettingValue, SitepanelError};
use sitepanel_config::SettingsStore;
use std::sync::Arc;
use tracing::{debug, info};

use crate::controls::{escape_attr, escape_html, AssetQueue, ControlWidget};
use crate::entities::Setting;
use crate::registry::Registry;
use crate::snapshot::ValueSnapshot;

/// Result of a save that passed the permission check.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The sanitized value was written.
    Saved(SettingValue),
    /// The sanitizer rejected the input; the stored value is unchanged.
    Rejected(SanitizeError),
}

/// Panel markup plus the client assets its controls requested.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPanel {
    pub html: String,
    pub assets: AssetQueue,
}

pub struct Customizer {
    session: SessionId,
    registry: Arc<Registry>,
}

impl Customizer {
    pub fn new(registry: Arc<Registry>) -> Self {
        let session = SessionId::new();
        info!(session = %session, "customizer session started");
        Self { session, registry }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Stored value for `id`, or the setting's default.
    pub fn current<S: SettingsStore + ?Sized>(
        &self,
        store: &S,
        id: &str,
    ) -> sitepanel_common::Result<SettingValue> {
        let setting = self.lookup(id)?;
        Ok(store
            .get(setting.storage_class, &setting.id)
            .unwrap_or_else(|| setting.default.clone()))
    }

    pub fn snapshot<S: SettingsStore + ?Sized>(&self, store: &S) -> ValueSnapshot {
        ValueSnapshot::capture(&self.registry, store)
    }

    /// Sanitize `raw` and persist it.
    ///
    /// The caller must hold the setting's capability. A rejected value is
    /// not an error: nothing is written and the previous value stays.
    pub fn save<S, G>(
        &self,
        store: &mut S,
        id: &str,
        raw: &SettingValue,
        granted: &[G],
    ) -> sitepanel_common::Result<SaveOutcome>
    where
        S: SettingsStore + ?Sized,
        G: AsRef<str>,
    {
        let setting = self.lookup(id)?;

        if !setting.capability.granted_by(granted) {
            return Err(SitepanelError::PermissionDenied {
                setting: setting.id.clone(),
                capability: setting.capability.to_string(),
            });
        }

        match setting.sanitizer.sanitize(raw) {
            Ok(value) => {
                store.set(setting.storage_class, &setting.id, value.clone())?;
                info!(session = %self.session, setting = %setting.id, "setting saved");
                Ok(SaveOutcome::Saved(value))
            }
            Err(e) => {
                debug!(session = %self.session, setting = %setting.id, error = %e, "save rejected");
                Ok(SaveOutcome::Rejected(e))
            }
        }
    }

    /// Render every non-empty section with its controls in display order.
    pub fn render_panel<S: SettingsStore + ?Sized>(&self, store: &S) -> RenderedPanel {
        let values = self.snapshot(store);
        let mut assets = AssetQueue::new();
        let mut html = String::from("<ul id=\"customize-theme-controls\">\n");

        for layout in self.registry.layout() {
            if layout.controls.is_empty() {
                continue;
            }
            let section = &layout.section;
            html.push_str(&format!(
                "<li id=\"accordion-section-{}\" class=\"accordion-section control-section\">\n\
                 <h3 class=\"accordion-section-title\">{}</h3>\n",
                escape_attr(&section.id),
                escape_html(&section.title),
            ));
            if !section.description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"description customize-section-description\">{}</p>\n",
                    escape_html(&section.description),
                ));
            }
            html.push_str("<ul class=\"accordion-section-content\">\n");

            for control in &layout.controls {
                let Some(setting) = self.registry.setting_for(control) else {
                    continue;
                };
                let value = values.get(&setting.id).cloned().unwrap_or_default();
                control.enqueue_assets(&mut assets);
                html.push_str(&format!(
                    "<li id=\"customize-control-{}\" class=\"customize-control customize-control-{}\">\n{}\n</li>\n",
                    escape_attr(&control.id),
                    control.kind.type_name(),
                    control.render(setting, &value),
                ));
            }
            html.push_str("</ul>\n</li>\n");
        }

        html.push_str("</ul>");
        RenderedPanel { html, assets }
    }

    /// Client JSON for every control in display order.
    pub fn client_controls<S: SettingsStore + ?Sized>(&self, store: &S) -> serde_json::Value {
        let values = self.snapshot(store);
        let controls: Vec<serde_json::Value> = self
            .registry
            .controls()
            .filter_map(|control| {
                let setting = self.registry.setting_for(control)?;
                let value = values.get(&setting.id).cloned().unwrap_or_default();
                Some(control.to_client(setting, &value))
            })
            .collect();
        serde_json::Value::Array(controls)
    }

    fn lookup(&self, id: &str) -> sitepanel_common::Result<&Setting> {
        self.registry
            .setting(id)
            .ok_or_else(|| SitepanelError::UnknownSetting(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{default_registry, ids};
    use sitepanel_common::StorageClass;
    use sitepanel_config::{JsonFileStore, MemoryStore};

    const ADMIN: &[&str] = &["edit_theme_options"];

    fn customizer() -> Customizer {
        Customizer::new(Arc::new(default_registry().unwrap()))
    }

    #[test]
    fn save_sanitizes_before_writing() {
        let customizer = customizer();
        let mut store = MemoryStore::default();

        let outcome = customizer
            .save(
                &mut store,
                ids::READ_MORE_TEXT,
                &SettingValue::text("Read <b>on</b>"),
                ADMIN,
            )
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(SettingValue::text("Read on")));
        assert_eq!(
            store.get(StorageClass::ThemeMod, ids::READ_MORE_TEXT),
            Some(SettingValue::text("Read on"))
        );
    }

    #[test]
    fn rejected_save_keeps_previous_value() {
        let customizer = customizer();
        let mut store = MemoryStore::default();
        customizer
            .save(&mut store, ids::DESIGN_COLOR, &SettingValue::text("#2e9feb"), ADMIN)
            .unwrap();

        let outcome = customizer
            .save(&mut store, ids::DESIGN_COLOR, &SettingValue::text("blue"), ADMIN)
            .unwrap();
        assert!(matches!(outcome, SaveOutcome::Rejected(_)));
        assert_eq!(
            customizer.current(&store, ids::DESIGN_COLOR).unwrap(),
            SettingValue::text("#2e9feb")
        );
    }

    #[test]
    fn rejected_first_save_writes_nothing() {
        let customizer = customizer();
        let mut store = MemoryStore::default();
        customizer
            .save(&mut store, ids::BACKGROUND_COLOR, &SettingValue::text("#12345"), ADMIN)
            .unwrap();
        assert_eq!(store.data(), &sitepanel_config::store::StoreData::default());
    }

    #[test]
    fn checkbox_save_is_strict() {
        let customizer = customizer();
        let mut store = MemoryStore::default();
        let outcome = customizer
            .save(&mut store, ids::HIDE_TAGLINE, &SettingValue::text("1"), ADMIN)
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(SettingValue::Int(0)));
    }

    #[test]
    fn unknown_setting_and_missing_capability() {
        let customizer = customizer();
        let mut store = MemoryStore::default();

        assert!(matches!(
            customizer.save(&mut store, "nope", &SettingValue::Null, ADMIN),
            Err(SitepanelError::UnknownSetting(_))
        ));
        assert!(matches!(
            customizer.save(&mut store, ids::LOGO, &SettingValue::Null, &["read"]),
            Err(SitepanelError::PermissionDenied { .. })
        ));
        assert!(matches!(
            customizer.current(&store, "nope"),
            Err(SitepanelError::UnknownSetting(_))
        ));
    }

    #[test]
    fn current_falls_back_to_default() {
        let customizer = customizer();
        let store = MemoryStore::default();
        assert_eq!(
            customizer.current(&store, ids::DESIGN_COLOR_TEXT).unwrap(),
            SettingValue::text("#ffffff")
        );
    }

    #[test]
    fn saves_persist_through_json_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let customizer = customizer();

        let mut store = JsonFileStore::open(&path, "default").unwrap();
        customizer
            .save(
                &mut store,
                ids::FOOTER_CREDITS,
                &SettingValue::text("<p onclick=\"x\">&copy; Site</p><script>y</script>"),
                ADMIN,
            )
            .unwrap();

        let reopened = JsonFileStore::open(&path, "default").unwrap();
        assert_eq!(
            customizer.current(&reopened, ids::FOOTER_CREDITS).unwrap(),
            SettingValue::text("<p>&copy; Site</p>y")
        );
    }

    #[test]
    fn panel_renders_sections_in_order() {
        let customizer = customizer();
        let rendered = customizer.render_panel(&MemoryStore::default());
        let html = &rendered.html;

        let title = html.find("id=\"accordion-section-title_tagline\"").unwrap();
        let design = html.find("id=\"accordion-section-design\"").unwrap();
        let content = html.find("id=\"accordion-section-content\"").unwrap();
        assert!(title < design && design < content);
        assert!(!html.contains("accordion-section-colors"));
        assert!(html.contains("Full Site Background Color"));
        assert!(html.contains("Excerpt &amp; More Link Text"));
        assert!(!rendered.assets.is_empty());
    }

    #[test]
    fn client_controls_cover_every_control() {
        let customizer = customizer();
        let controls = customizer.client_controls(&MemoryStore::default());
        let controls = controls.as_array().unwrap();
        assert_eq!(controls.len(), 11);
        assert_eq!(controls[0]["id"], ids::BLOGNAME);
        assert_eq!(controls[0]["transport"], "live-message");
    }
}
