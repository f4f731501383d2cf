use std::fmt;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// The three entity kinds held by the control registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Section,
    Setting,
    Control,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Section => "section",
            EntityKind::Setting => "setting",
            EntityKind::Control => "control",
        };
        f.write_str(name)
    }
}

/// Registration-time failures. Any of these aborts the registration pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("registry error: duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("registry error: {from} references unknown {kind} '{id}'")]
    UnknownReference {
        kind: EntityKind,
        id: String,
        from: String,
    },

    #[error("registry error: control '{control}' still references removed section '{section}'")]
    DanglingControl { control: String, section: String },
}

/// Per-setting, non-fatal rejection of submitted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    #[error("sanitize error: {sanitizer} rejected input: {reason}")]
    Rejected {
        sanitizer: &'static str,
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("store parse error: {0}")]
    Parse(String),

    #[error("store serialize error: {0}")]
    Serialize(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SitepanelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("permission denied: '{setting}' requires capability '{capability}'")]
    PermissionDenied { setting: String, capability: String },

    #[error("{0}")]
    Other(String),
}
