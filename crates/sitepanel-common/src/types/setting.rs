use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Which persistence bucket holds a setting's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    /// Global, survives a theme switch.
    SiteOption,
    /// Scoped to the active visual theme.
    ThemeMod,
}

/// How an in-panel edit reaches the preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    /// Reload the whole preview frame after a debounce.
    FullReload,
    /// Patch the preview DOM in place via the preview message channel.
    LiveMessage,
}

/// Permission token a caller must hold to write a setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    pub const EDIT_THEME_OPTIONS: Capability = Capability(Cow::Borrowed("edit_theme_options"));

    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the caller's granted tokens include this capability.
    pub fn granted_by<S: AsRef<str>>(&self, granted: &[S]) -> bool {
        granted.iter().any(|g| g.as_ref() == self.as_str())
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self::EDIT_THEME_OPTIONS
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_check() {
        let cap = Capability::EDIT_THEME_OPTIONS;
        assert!(cap.granted_by(&["read", "edit_theme_options"]));
        assert!(!cap.granted_by(&["read"]));
        assert!(!cap.granted_by::<&str>(&[]));
    }

    #[test]
    fn custom_capability() {
        let cap = Capability::new("manage_options");
        assert_eq!(cap.to_string(), "manage_options");
        assert!(cap.granted_by(&[String::from("manage_options")]));
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&StorageClass::ThemeMod).unwrap(),
            "\"theme_mod\""
        );
        assert_eq!(
            serde_json::to_string(&Transport::LiveMessage).unwrap(),
            "\"live-message\""
        );
        assert_eq!(
            serde_json::to_string(&Capability::default()).unwrap(),
            "\"edit_theme_options\""
        );
    }
}
