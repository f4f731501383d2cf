use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sitepanel: site presentation settings, sanitized and previewed.
#[derive(Parser, Debug)]
#[command(name = "sitepanel", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Render the control panel.
    Panel {
        /// Print client JSON for every control instead of markup.
        #[arg(long)]
        json: bool,
    },

    /// Print the head style block for the current values.
    Styles,

    /// Print the current value of a setting as JSON.
    Get { setting: String },

    /// Sanitize and save a value. JSON scalars are parsed, anything else is text.
    Set {
        setting: String,

        /// New value. Checkbox settings read `1`/`0` as numbers; every other
        /// setting stores the text as given.
        value: String,

        /// Capabilities held by the caller.
        #[arg(long = "capability", default_value = "edit_theme_options")]
        capabilities: Vec<String>,
    },

    /// Print the preview frame script.
    PreviewScript,

    /// Show how an unsaved edit reaches the preview frame.
    PreviewEdit { setting: String, value: String },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_defaults_to_theme_capability() {
        let args = Args::try_parse_from(["sitepanel", "set", "design_color", "#2e9feb"]).unwrap();
        assert_eq!(
            args.command,
            Command::Set {
                setting: "design_color".into(),
                value: "#2e9feb".into(),
                capabilities: vec!["edit_theme_options".into()],
            }
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "sitepanel",
            "panel",
            "--json",
            "--log-level",
            "debug",
            "--config",
            "/tmp/sitepanel.toml",
        ])
        .unwrap();
        assert_eq!(args.command, Command::Panel { json: true });
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/sitepanel.toml")));
    }

    #[test]
    fn kebab_case_subcommands() {
        let args = Args::try_parse_from(["sitepanel", "preview-script"]).unwrap();
        assert_eq!(args.command, Command::PreviewScript);
        let args = Args::try_parse_from(["sitepanel", "preview-edit", "blogname", "Hi"]).unwrap();
        assert!(matches!(args.command, Command::PreviewEdit { .. }));
    }
}
