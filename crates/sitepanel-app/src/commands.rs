//! Subcommand implementations. Each returns the text to print.

use serde_json::json;
use sitepanel_common::{LifecycleEvent, SettingValue, SitepanelError};
use sitepanel_config::{schema::PanelConfig, JsonFileStore};
use sitepanel_panel::{build_registry, register_hooks, Customizer, Registry, SaveOutcome};
use sitepanel_preview::bridge::js_patch_message;
use sitepanel_preview::{page_hooks, PageContext, PreviewAction, PreviewBridge};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use crate::cli::Command;

pub fn run(command: Command, config: &PanelConfig) -> sitepanel_common::Result<()> {
    let output = execute(command, config)?;
    println!("{output}");
    Ok(())
}

pub fn execute(command: Command, config: &PanelConfig) -> sitepanel_common::Result<String> {
    let registry = Arc::new(build_registry(&register_hooks())?);
    let store_path = config.store_path()?;
    let mut store = JsonFileStore::open(&store_path, config.storage.active_theme.as_str())?;
    let customizer = Customizer::new(Arc::clone(&registry));
    info!(
        store = %store_path.display(),
        theme = %config.storage.active_theme,
        "session ready"
    );

    match command {
        Command::Panel { json } => {
            let rendered = customizer.render_panel(&store);
            if json {
                let client = json!({
                    "controls": customizer.client_controls(&store),
                    "assets": rendered.assets,
                });
                to_json_pretty(&client)
            } else {
                let mut ctx = PageContext::new(registry, customizer.snapshot(&store));
                page_hooks().run(LifecycleEvent::ControlsPrintStyles, &mut ctx)?;
                Ok(format!("{}\n{}", ctx.head_html(), rendered.html))
            }
        }
        Command::Styles => {
            let mut ctx = PageContext::new(registry, customizer.snapshot(&store));
            page_hooks().run(LifecycleEvent::HeadStyles, &mut ctx)?;
            Ok(ctx.head_html())
        }
        Command::Get { setting } => to_json(&customizer.current(&store, &setting)?),
        Command::Set {
            setting,
            value,
            capabilities,
        } => {
            let raw = parse_for(&registry, &setting, &value);
            match customizer.save(&mut store, &setting, &raw, capabilities.as_slice())? {
                SaveOutcome::Saved(saved) => Ok(format!("saved {setting} = {}", to_json(&saved)?)),
                SaveOutcome::Rejected(e) => {
                    let kept = customizer.current(&store, &setting)?;
                    Ok(format!("rejected, kept {setting} = {} ({e})", to_json(&kept)?))
                }
            }
        }
        Command::PreviewScript => {
            let mut ctx = PageContext::new(registry, customizer.snapshot(&store));
            page_hooks().run(LifecycleEvent::PreviewInit, &mut ctx)?;
            Ok(ctx.scripts_html())
        }
        Command::PreviewEdit { setting, value } => {
            let delay = Duration::from_millis(u64::from(config.preview.reload_debounce_ms));
            preview_edit(registry, &customizer, &store, &setting, &value, delay)
        }
    }
}

fn preview_edit(
    registry: Arc<Registry>,
    customizer: &Customizer,
    store: &JsonFileStore,
    setting: &str,
    value: &str,
    delay: Duration,
) -> sitepanel_common::Result<String> {
    let raw = parse_for(&registry, setting, value);
    let (mut bridge, _receiver) = PreviewBridge::new(registry, &customizer.snapshot(store), delay);

    match bridge.on_edit(setting, &raw, Instant::now()) {
        PreviewAction::Reload => Ok(format!("reload preview after {}ms", delay.as_millis())),
        PreviewAction::Patch(message) => Ok(js_patch_message(&message)),
        PreviewAction::Ignored => Ok(format!("ignored: {setting} unchanged in preview")),
    }
}

/// Unknown settings fall back to scalar parsing; the save reports them.
fn parse_for(registry: &Registry, setting: &str, raw: &str) -> SettingValue {
    match registry.setting(setting) {
        Some(setting) => setting.sanitizer.parse_input(raw),
        None => SettingValue::parse_input(raw),
    }
}

fn to_json(value: &SettingValue) -> sitepanel_common::Result<String> {
    serde_json::to_string(value).map_err(|e| SitepanelError::Other(e.to_string()))
}

fn to_json_pretty(value: &serde_json::Value) -> sitepanel_common::Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| SitepanelError::Other(e.to_string()))
}
