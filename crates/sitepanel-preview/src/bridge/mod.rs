//! Editor to preview synchronization.
//!
//! Edits are sanitized, then routed by the setting's transport:
//! - full-reload settings arm the [`ReloadDebouncer`] when the sanitized value
//!   differs from what the frame shows; the frame reloads once edits go quiet.
//! - live settings publish on a per-setting [`tokio::sync::watch`] channel.
//!   Only the latest value per setting is kept; there is no ordering across
//!   settings. The preview end ([`PreviewReceiver`]) cannot send.

mod channel;
mod debounce;
mod script;


pub use channel::PreviewReceiver;
pub use debounce::ReloadDebouncer;
pub use script::{js_patch_message, live_selector, preview_script};

use serde::{Deserialize, Serialize};
use sitepanel_common::{SettingValue, Transport};
use sitepanel_panel::{Registry, ValueSnapshot};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tracing::debug;

/// A live value pushed to the preview frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewMessage {
    pub setting: String,
    pub value: SettingValue,
}

/// What the editor should do with the preview after an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewAction {
    /// Reload the frame once the debouncer fires.
    Reload,
    /// Patch the frame in place.
    Patch(PreviewMessage),
    /// Unknown setting, rejected value, or a full-reload value that did not
    /// change; nothing is sent.
    Ignored,
}

pub struct PreviewBridge {
    registry: Arc<Registry>,
    channels: BTreeMap<String, watch::Sender<SettingValue>>,
    /// Last value routed for each full-reload setting.
    reload_values: BTreeMap<String, SettingValue>,
    /// Bumped on every live publish so a receiver can wait on all settings.
    version: watch::Sender<u64>,
    debouncer: ReloadDebouncer,
}

impl PreviewBridge {
    /// Open one channel per live setting, seeded with its current value.
    pub fn new(
        registry: Arc<Registry>,
        initial: &ValueSnapshot,
        reload_delay: Duration,
    ) -> (Self, PreviewReceiver) {
        let channels: BTreeMap<String, watch::Sender<SettingValue>> = registry
            .live_settings()
            .map(|setting| {
                let value = initial.get(&setting.id).cloned().unwrap_or_default();
                let (tx, _) = watch::channel(value);
                (setting.id.clone(), tx)
            })
            .collect();
        let reload_values = registry
            .settings()
            .filter(|setting| setting.transport == Transport::FullReload)
            .map(|setting| {
                let value = initial.get(&setting.id).cloned().unwrap_or_default();
                (setting.id.clone(), value)
            })
            .collect();
        let (version, _) = watch::channel(0);

        let bridge = Self {
            registry,
            channels,
            reload_values,
            version,
            debouncer: ReloadDebouncer::new(reload_delay),
        };
        let receiver = bridge.subscribe();
        (bridge, receiver)
    }

    /// Another preview end. It starts with every current value marked seen.
    pub fn subscribe(&self) -> PreviewReceiver {
        let channels = self
            .channels
            .iter()
            .map(|(id, tx)| (id.clone(), tx.subscribe()))
            .collect();
        PreviewReceiver::new(channels, self.version.subscribe())
    }

    /// Route one in-panel edit.
    pub fn on_edit(&mut self, id: &str, raw: &SettingValue, now: Instant) -> PreviewAction {
        let Some(setting) = self.registry.setting(id) else {
            debug!(setting = id, "preview edit ignored: unknown setting");
            return PreviewAction::Ignored;
        };

        let value = match setting.sanitizer.sanitize(raw) {
            Ok(value) => value,
            Err(e) => {
                debug!(setting = id, error = %e, "preview edit ignored: rejected");
                return PreviewAction::Ignored;
            }
        };

        match setting.transport {
            Transport::FullReload => {
                if self.reload_values.get(id) == Some(&value) {
                    debug!(setting = id, "preview edit ignored: unchanged");
                    return PreviewAction::Ignored;
                }
                self.reload_values.insert(id.to_string(), value);
                self.debouncer.touch(now);
                debug!(setting = id, "preview reload scheduled");
                PreviewAction::Reload
            }
            Transport::LiveMessage => {
                let Some(channel) = self.channels.get(id) else {
                    return PreviewAction::Ignored;
                };
                channel.send_replace(value.clone());
                self.version.send_modify(|v| *v = v.wrapping_add(1));
                debug!(setting = id, "preview patch sent");
                PreviewAction::Patch(PreviewMessage {
                    setting: id.to_string(),
                    value,
                })
            }
        }
    }

    /// True once per burst of full-reload edits, after the quiet period.
    pub fn reload_due(&mut self, now: Instant) -> bool {
        self.debouncer.take_due(now)
    }

    pub fn debouncer(&self) -> &ReloadDebouncer {
        &self.debouncer
    }

    pub fn debouncer_mut(&mut self) -> &mut ReloadDebouncer {
        &mut self.debouncer
    }
}
