//! JavaScript for the preview frame.
//!
//! Only the preview-init page hook emits [`preview_script`]; production page
//! loads never carry it.

use sitepanel_panel::defaults::ids;
use sitepanel_panel::Registry;
use std::collections::BTreeMap;

use super::PreviewMessage;

/// DOM selector a live setting rewrites, if it has one.
pub fn live_selector(setting: &str) -> Option<&'static str> {
    match setting {
        ids::BLOGNAME => Some(".site-title a"),
        ids::BLOGDESCRIPTION => Some(".site-description"),
        _ => None,
    }
}

/// Preview-side handler that rewrites bound text nodes when a live value
/// arrives.
pub fn preview_script(registry: &Registry) -> String {
    let bindings: BTreeMap<&str, &str> = registry
        .live_settings()
        .filter_map(|s| live_selector(&s.id).map(|selector| (s.id.as_str(), selector)))
        .collect();
    let bindings_json = serde_json::to_string(&bindings).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"(function() {{
    var bindings = {bindings_json};
    window.sitepanelPreview = window.sitepanelPreview || {{}};
    window.sitepanelPreview._apply = function(setting, value) {{
        var selector = bindings[setting];
        if (!selector) {{
            return;
        }}
        var text = (value === null || value === undefined) ? '' : String(value);
        var nodes = document.querySelectorAll(selector);
        for (var i = 0; i < nodes.length; i++) {{
            nodes[i].textContent = text;
        }}
    }};
}})();"#
    )
}

/// Snippet that applies one live message inside the preview frame.
///
/// Arguments are JSON-encoded with `</` escaped so the snippet is safe inside
/// an inline `<script>`.
pub fn js_patch_message(message: &PreviewMessage) -> String {
    let setting = serde_json::to_string(&message.setting)
        .unwrap_or_else(|_| "\"unknown\"".to_string());
    let value = serde_json::to_string(&message.value).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.sitepanelPreview._apply({}, {});",
        escape_script_close(&setting),
        escape_script_close(&value),
    )
}

fn escape_script_close(json: &str) -> String {
    json.replace("</", "<\\/")
}
