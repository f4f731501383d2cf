/// Commented default `sitepanel.toml`, written on first run.
pub fn default_config_toml() -> &'static str {
    r#"# sitepanel configuration
# Every value below is the default; delete what you don't change.

[storage]
# JSON file holding saved setting values. Empty = next to this file.
path = ""
# Theme modifications (logo, tagline flag, excerpts, footer) are scoped to this theme.
active_theme = "default"

[preview]
# Quiet period (ms) before a full-reload setting refreshes the preview. 0-5000.
reload_debounce_ms = 250

[logging]
# trace | debug | info | warn | error
level = "info"
"#
}
