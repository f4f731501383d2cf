use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted or submitted setting value.
///
/// Shaped like a JSON scalar so values round-trip through the JSON store and
/// the preview channel unchanged. `Null` stands for "absent".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    #[default]
    Null,
    Bool(bool), // Must be before Int so JSON booleans stay booleans
    Int(i64),
    Text(String),
}

impl SettingValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Borrow the string payload, if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce any scalar to text: `Int` as decimal, `Bool(true)` as `"1"`,
    /// `Bool(false)` and `Null` as the empty string.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// `Null` or empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// A stored checkbox is checked only when it holds exactly `1`.
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Int(1))
    }

    /// Parse command-line or form input: JSON scalars first, raw text otherwise.
    pub fn parse_input(raw: &str) -> Self {
        match serde_json::from_str::<SettingValue>(raw) {
            Ok(value) => value,
            Err(_) => Self::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Bool(false) => Ok(()),
            Self::Bool(true) => f.write_str("1"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
