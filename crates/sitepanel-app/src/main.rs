mod cli;
mod commands;

use sitepanel_config::{schema::PanelConfig, toml_loader, validation};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&Path>) -> Result<PanelConfig, sitepanel_common::ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => sitepanel_config::load_config(),
    }
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config first: it carries the default log level
    let loaded = load_config(args.config.as_deref());

    // Initialize logging
    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => format!("sitepanel={}", config.logging.level),
        (None, Err(_)) => "sitepanel=info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "sitepanel=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("sitepanel v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        PanelConfig::default()
    });

    if let Err(e) = commands::run(args.command, &config) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
