//! Sanitizer pipeline.
//!
//! Every function here is pure and total: it accepts any [`SettingValue`]
//! (including `Null` for absent input) and returns either the value to store
//! or [`SanitizeError::Rejected`]. Rejection means "do not write"; keeping
//! the previously stored value is the caller's job.
//!
//! | sanitizer       | rule                                                  |
//! |-----------------|-------------------------------------------------------|
//! | `Checkbox`      | `1` stays `1`, everything else becomes `0`            |
//! | `PlainText`     | strip backslash escaping, then all tags               |
//! | `LinkText`      | like `PlainText` but anchors survive                  |
//! | `RichTextarea`  | allow-listed tags and attributes only                 |
//! | `HexColor`      | `""` or `#` + 3/6 hex digits, anything else rejected  |
//! | `Url`           | `""`, relative, or http(s) URLs                       |

mod markup;


use regex::Regex;
use serde::{Deserialize, Serialize};
use sitepanel_common::{SanitizeError, SettingValue};
use std::sync::LazyLock;

pub use markup::{allowed_attributes, filter_allowed_markup, strip_slashes, strip_tags};

/// `#` followed by exactly 3 or 6 hex digits.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{3}){1,2}$").unwrap());

/// Leading URL scheme, e.g. `https:` or `javascript:`.
pub(crate) static URL_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.\-]*):").unwrap());

/// Schemes accepted for standalone URL settings (logo, background image).
const URL_SETTING_SCHEMES: &[&str] = &["http", "https"];

/// One entry of the sanitizer pipeline. Each setting references exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sanitizer {
    Checkbox,
    PlainText,
    LinkText,
    RichTextarea,
    HexColor,
    Url,
}

impl Sanitizer {
    pub fn name(&self) -> &'static str {
        match self {
            Sanitizer::Checkbox => "checkbox",
            Sanitizer::PlainText => "plain_text",
            Sanitizer::LinkText => "link_text",
            Sanitizer::RichTextarea => "rich_textarea",
            Sanitizer::HexColor => "hex_color",
            Sanitizer::Url => "url",
        }
    }

    /// Turn one raw form or command-line string into the value to sanitize.
    ///
    /// Only checkboxes read JSON scalars (`1`, `true`); every other
    /// sanitizer takes the input verbatim, so `true` stays the text `"true"`.
    pub fn parse_input(&self, raw: &str) -> SettingValue {
        match self {
            Sanitizer::Checkbox => SettingValue::parse_input(raw),
            _ => SettingValue::Text(raw.to_string()),
        }
    }

    /// Map raw submitted input to the value to persist.
    pub fn sanitize(&self, input: &SettingValue) -> Result<SettingValue, SanitizeError> {
        match self {
            Sanitizer::Checkbox => Ok(sanitize_checkbox(input)),
            Sanitizer::PlainText => Ok(SettingValue::Text(sanitize_text(&input.to_text()))),
            Sanitizer::LinkText => Ok(SettingValue::Text(sanitize_link_text(&input.to_text()))),
            Sanitizer::RichTextarea => Ok(SettingValue::Text(sanitize_rich_textarea(
                &input.to_text(),
            ))),
            Sanitizer::HexColor => match input {
                SettingValue::Text(s) => sanitize_hex_color(s).map(SettingValue::Text),
                other => Err(rejected(self.name(), format!("expected text, got {other:?}"))),
            },
            Sanitizer::Url => match input {
                SettingValue::Null => Ok(SettingValue::Text(String::new())),
                SettingValue::Text(s) => sanitize_url(s).map(SettingValue::Text),
                other => Err(rejected(self.name(), format!("expected text, got {other:?}"))),
            },
        }
    }
}

/// `1` means checked; every other input (including `"1"`, `true`, `null`) is `0`.
pub fn sanitize_checkbox(input: &SettingValue) -> SettingValue {
    if *input == SettingValue::Int(1) {
        SettingValue::Int(1)
    } else {
        SettingValue::Int(0)
    }
}

/// Strip backslash escaping, then remove every tag and comment.
pub fn sanitize_text(input: &str) -> String {
    strip_tags(&strip_slashes(input), false)
}

/// Like [`sanitize_text`] but `<a …>` and `</a>` are kept.
pub fn sanitize_link_text(input: &str) -> String {
    strip_tags(&strip_slashes(input), true)
}

/// Allow-list filter for free-form footer markup. Idempotent.
pub fn sanitize_rich_textarea(input: &str) -> String {
    filter_allowed_markup(input)
}

/// Accept `""` (unset) or `#` followed by 3 or 6 hex digits.
pub fn sanitize_hex_color(input: &str) -> Result<String, SanitizeError> {
    if input.is_empty() {
        return Ok(String::new());
    }
    if HEX_COLOR_RE.is_match(input) {
        return Ok(input.to_string());
    }
    Err(rejected(
        Sanitizer::HexColor.name(),
        format!("'{input}' is not #rgb or #rrggbb"),
    ))
}

/// Accept empty, relative, and http(s) URLs.
///
/// Whitespace and control characters are removed first, then anything
/// outside the URL-safe character set. A scheme other than http(s) is
/// rejected.
pub fn sanitize_url(input: &str) -> Result<String, SanitizeError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control() && is_url_char(*c))
        .collect();

    if cleaned.is_empty() {
        return Ok(cleaned);
    }

    if let Some(caps) = URL_SCHEME_RE.captures(&cleaned) {
        let scheme = caps[1].to_ascii_lowercase();
        if !URL_SETTING_SCHEMES.contains(&scheme.as_str()) {
            return Err(rejected(
                Sanitizer::Url.name(),
                format!("scheme '{scheme}' is not allowed"),
            ));
        }
    }

    Ok(cleaned)
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
}

fn rejected(sanitizer: &'static str, reason: String) -> SanitizeError {
    SanitizeError::Rejected { sanitizer, reason }
}
