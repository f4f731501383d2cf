use sitepanel_common::SettingValue;
use std::collections::BTreeMap;
use tokio::sync::watch;

use super::PreviewMessage;

/// Preview end of the live channel. Receive only.
#[derive(Debug)]
pub struct PreviewReceiver {
    channels: BTreeMap<String, watch::Receiver<SettingValue>>,
    version: watch::Receiver<u64>,
}

impl PreviewReceiver {
    pub(super) fn new(
        channels: BTreeMap<String, watch::Receiver<SettingValue>>,
        version: watch::Receiver<u64>,
    ) -> Self {
        Self { channels, version }
    }

    /// Latest value for a live setting, seen or not.
    pub fn latest(&self, setting: &str) -> Option<SettingValue> {
        self.channels.get(setting).map(|rx| rx.borrow().clone())
    }

    /// Unseen values, one per changed setting, each the latest sent.
    pub fn drain(&mut self) -> Vec<PreviewMessage> {
        self.channels
            .iter_mut()
            .filter_map(|(id, rx)| {
                let value = rx.borrow_and_update();
                if value.has_changed() {
                    Some(PreviewMessage {
                        setting: id.clone(),
                        value: (*value).clone(),
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Wait until at least one live setting changed and return the unseen
    /// values. `None` once the bridge is gone and nothing is left to read.
    pub async fn changed(&mut self) -> Option<Vec<PreviewMessage>> {
        loop {
            let batch = self.drain();
            if !batch.is_empty() {
                return Some(batch);
            }
            if self.version.changed().await.is_err() {
                let batch = self.drain();
                return (!batch.is_empty()).then_some(batch);
            }
        }
    }

    pub fn settings(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }
}
