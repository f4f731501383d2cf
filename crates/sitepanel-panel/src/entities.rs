//! Sections, settings and controls as held by the registry.

use serde::{Deserialize, Serialize};
use sitepanel_common::{Capability, SettingValue, StorageClass, Transport};
use sitepanel_config::Sanitizer;
use std::collections::BTreeMap;

/// A labeled, ordered group of controls in the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: i32,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, priority: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A named, persisted value gated by exactly one sanitizer.
///
/// Defaults to a theme modification that reloads the preview and requires
/// `edit_theme_options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub id: String,
    pub default: SettingValue,
    pub storage_class: StorageClass,
    pub transport: Transport,
    pub sanitizer: Sanitizer,
    pub capability: Capability,
}

impl Setting {
    pub fn new(id: impl Into<String>, sanitizer: Sanitizer) -> Self {
        Self {
            id: id.into(),
            default: SettingValue::Null,
            storage_class: StorageClass::ThemeMod,
            transport: Transport::FullReload,
            sanitizer,
            capability: Capability::EDIT_THEME_OPTIONS,
        }
    }

    pub fn with_default(mut self, default: impl Into<SettingValue>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_storage(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = storage_class;
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capability = capability;
        self
    }

    pub fn is_live(&self) -> bool {
        self.transport == Transport::LiveMessage
    }
}

/// The widget variant a control renders as.
///
/// Closed set: every consumer matches on it instead of extending it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    Text,
    Checkbox,
    Image,
    Color,
    DescribedText,
    DescribedTextarea,
    /// Color picker with a description line and client-side status labels.
    DescribedColor { statuses: BTreeMap<String, String> },
}

impl ControlKind {
    /// Color picker with the single `"" => "Default"` status.
    pub fn described_color() -> Self {
        let mut statuses = BTreeMap::new();
        statuses.insert(String::new(), "Default".to_string());
        ControlKind::DescribedColor { statuses }
    }

    /// Client-side type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Image => "image",
            ControlKind::Color | ControlKind::DescribedColor { .. } => "color",
            ControlKind::DescribedText => "customtext",
            ControlKind::DescribedTextarea => "textarea",
        }
    }
}

/// Binds one setting to one widget inside one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub setting_id: String,
    pub section_id: String,
    pub kind: ControlKind,
    pub label: String,
    pub description: String,
    pub priority: i32,
}

impl Control {
    /// A control bound to the setting with the same id.
    pub fn new(id: impl Into<String>, section_id: impl Into<String>, kind: ControlKind) -> Self {
        let id = id.into();
        Self {
            setting_id: id.clone(),
            id,
            section_id: section_id.into(),
            kind,
            label: String::new(),
            description: String::new(),
            priority: 10,
        }
    }

    pub fn for_setting(mut self, setting_id: impl Into<String>) -> Self {
        self.setting_id = setting_id.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
