use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Script,
    Style,
}

/// Client assets requested by the rendered controls, deduplicated by
/// `(kind, handle)` and kept in first-request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetQueue {
    entries: Vec<(AssetKind, &'static str)>,
}

impl AssetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_script(&mut self, handle: &'static str) {
        self.enqueue(AssetKind::Script, handle);
    }

    pub fn enqueue_style(&mut self, handle: &'static str) {
        self.enqueue(AssetKind::Style, handle);
    }

    fn enqueue(&mut self, kind: AssetKind, handle: &'static str) {
        if !self.contains(kind, handle) {
            self.entries.push((kind, handle));
        }
    }

    pub fn contains(&self, kind: AssetKind, handle: &str) -> bool {
        self.entries.iter().any(|(k, h)| *k == kind && *h == handle)
    }

    pub fn scripts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handles(AssetKind::Script)
    }

    pub fn styles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handles(AssetKind::Style)
    }

    fn handles(&self, kind: AssetKind) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, h)| *h)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
