//! Control variants: markup, client assets and client JSON.
//!
//! Every variant is rendered by matching on [`ControlKind`]. User-influenced
//! strings go through [`escape_html`], [`escape_attr`] or [`escape_textarea`].

mod assets;
mod escape;
mod styles;

#[cfg(test)]
mod tests;

pub use assets::{AssetKind, AssetQueue};
pub use escape::{escape_attr, escape_html, escape_textarea};
pub use styles::panel_styles;

use serde_json::json;
use sitepanel_common::SettingValue;

use crate::entities::{Control, ControlKind, Setting};

pub const COLOR_PICKER_HANDLE: &str = "color-picker";
pub const MEDIA_UPLOAD_HANDLE: &str = "media-upload";

/// Capability shared by every control variant.
pub trait ControlWidget {
    /// Panel markup for the control bound to `setting`, showing `value`.
    fn render(&self, setting: &Setting, value: &SettingValue) -> String;

    /// Request the client assets this control needs.
    fn enqueue_assets(&self, assets: &mut AssetQueue);

    /// Client-side description of the control.
    fn to_client(&self, setting: &Setting, value: &SettingValue) -> serde_json::Value;
}

impl ControlWidget for Control {
    fn render(&self, setting: &Setting, value: &SettingValue) -> String {
        let link = format!(r#"data-customize-setting-link="{}""#, escape_attr(&setting.id));
        let value_text = value.to_text();

        match &self.kind {
            ControlKind::Text => format!(
                "<label>\n<span class=\"customize-control-title\">{}</span>\n\
                 <input type=\"text\" value=\"{}\" {link} />\n</label>",
                escape_html(&self.label),
                escape_attr(&value_text),
            ),
            ControlKind::Checkbox => {
                let checked = if value.is_checked() {
                    " checked=\"checked\""
                } else {
                    ""
                };
                format!(
                    "<label>\n<input type=\"checkbox\" value=\"1\" {link}{checked} />\n{}\n</label>",
                    escape_html(&self.label),
                )
            }
            ControlKind::Image => {
                let current = if value.is_empty() {
                    "<span class=\"placeholder\">No image selected</span>".to_string()
                } else {
                    format!("<img src=\"{}\" alt=\"\" />", escape_attr(&value_text))
                };
                format!(
                    "<span class=\"customize-control-title\">{}</span>\n\
                     <div class=\"current\">{current}</div>\n\
                     <button type=\"button\" class=\"button upload-button\" {link}>Select Image</button>",
                    escape_html(&self.label),
                )
            }
            ControlKind::Color => format!(
                "<label>\n<span class=\"customize-control-title\">{}</span>\n{}\n</label>",
                escape_html(&self.label),
                color_input(setting),
            ),
            ControlKind::DescribedText => format!(
                "<label>\n{}\n<input type=\"text\" value=\"{}\" {link} />\n</label>",
                self.title_and_description(),
                escape_attr(&value_text),
            ),
            ControlKind::DescribedTextarea => format!(
                "<label>\n{}\n<textarea rows=\"5\" style=\"width:98%;\" {link}>{}</textarea>\n</label>",
                self.title_and_description(),
                escape_textarea(&value_text),
            ),
            // The stored value is filled in client-side; never render it here.
            ControlKind::DescribedColor { .. } => format!(
                "<label>\n{}\n{}\n</label>",
                self.title_and_description(),
                color_input(setting),
            ),
        }
    }

    fn enqueue_assets(&self, assets: &mut AssetQueue) {
        match self.kind {
            ControlKind::Color | ControlKind::DescribedColor { .. } => {
                assets.enqueue_script(COLOR_PICKER_HANDLE);
                assets.enqueue_style(COLOR_PICKER_HANDLE);
            }
            ControlKind::Image => assets.enqueue_script(MEDIA_UPLOAD_HANDLE),
            _ => {}
        }
    }

    fn to_client(&self, setting: &Setting, value: &SettingValue) -> serde_json::Value {
        let mut client = json!({
            "id": self.id,
            "type": self.kind.type_name(),
            "section": self.section_id,
            "priority": self.priority,
            "label": self.label,
            "description": self.description,
            "setting": setting.id,
            "transport": setting.transport,
            "default": setting.default,
            "value": value,
        });
        if let ControlKind::DescribedColor { statuses } = &self.kind {
            client["statuses"] = json!(statuses);
        }
        client
    }
}

impl Control {
    fn title_and_description(&self) -> String {
        format!(
            "<span class=\"customize-control-title\">{}</span>\n\
             <div class=\"control-description\">{}</div>",
            escape_html(&self.label),
            escape_html(&self.description),
        )
    }
}

/// Color picker input. Starts empty with a placeholder; the default color
/// hint is always `#`-prefixed.
fn color_input(setting: &Setting) -> String {
    let default_attr = match default_color_hint(&setting.default) {
        Some(hint) => format!(" data-default-color=\"{}\"", escape_attr(&hint)),
        None => String::new(),
    };
    format!(
        "<div class=\"customize-control-content\">\n\
         <input class=\"color-picker-hex\" type=\"text\" maxlength=\"7\" placeholder=\"Hex Value\"{default_attr} />\n\
         </div>"
    )
}

/// The setting default as a `#`-prefixed hint, or `None` when unset.
pub fn default_color_hint(default: &SettingValue) -> Option<String> {
    let text = default.to_text();
    if text.is_empty() {
        None
    } else if text.contains('#') {
        Some(text)
    } else {
        Some(format!("#{text}"))
    }
}
