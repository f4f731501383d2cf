//! Sitepanel configuration, sanitizers and host storage.
//!
//! - [`sanitize`]: the pure sanitizer pipeline that gates every settings write.
//! - [`store`]: the two-class key/value storage the panel persists into.
//! - [`schema`] / [`toml_loader`] / [`toml_writer`] / [`validation`]: the
//!   tool's own TOML configuration. All sections use defaults so partial
//!   files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sitepanel_config::{load_config, sanitize::Sanitizer};
//! use sitepanel_common::SettingValue;
//!
//! let config = load_config().expect("failed to load config");
//! let color = Sanitizer::HexColor.sanitize(&SettingValue::text("#2e9feb"));
//! println!("{} {:?}", config.storage.active_theme, color);
//! ```

pub mod sanitize;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use sanitize::Sanitizer;
pub use schema::PanelConfig;
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
pub use toml_writer::{save_config, save_config_to_path};

use sitepanel_common::ConfigError;

/// Load config from the platform default path, creating it if missing,
/// and validate the result.
pub fn load_config() -> Result<PanelConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
