//! Write config (and other small files) to disk.
//!
//! Writes are atomic (write to `<name>.tmp`, then rename) so a crash
//! mid-write never leaves a truncated file behind.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use sitepanel_common::ConfigError;

use crate::schema::PanelConfig;
use crate::toml_loader::default_config_path;

/// Write config to the platform default path.
pub fn save_config(config: &PanelConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path, creating parent directories.
pub fn save_config_to_path(config: &PanelConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    write_atomic(path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!("failed to write config to {}: {e}", path.display()))
    })?;

    tracing::info!("saved config to {}", path.display());
    Ok(())
}

/// Write `contents` to `path` via a sibling `.tmp` file and a rename.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, contents)?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename can fail across filesystems or on Windows with an open target
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, contents)?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
