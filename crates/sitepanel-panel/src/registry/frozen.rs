use crate::entities::{Control, Section, Setting};

/// One section with its controls in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub section: Section,
    pub controls: Vec<Control>,
}

/// The frozen registry. Read-only; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Registry {
    layout: Vec<SectionLayout>,
    settings: Vec<Setting>,
}

impl Registry {
    pub(super) fn new(layout: Vec<SectionLayout>, settings: Vec<Setting>) -> Self {
        Self { layout, settings }
    }

    /// Sections in display order, each with its ordered controls.
    pub fn layout(&self) -> &[SectionLayout] {
        &self.layout
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.layout
            .iter()
            .map(|l| &l.section)
            .find(|s| s.id == id)
    }

    pub fn setting(&self, id: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.id == id)
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls().find(|c| c.id == id)
    }

    /// Settings in registration order.
    pub fn settings(&self) -> impl Iterator<Item = &Setting> {
        self.settings.iter()
    }

    /// Controls in display order across all sections.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.layout.iter().flat_map(|l| l.controls.iter())
    }

    /// Settings patched in place by the preview instead of reloading it.
    pub fn live_settings(&self) -> impl Iterator<Item = &Setting> {
        self.settings.iter().filter(|s| s.is_live())
    }

    /// The setting a control is bound to.
    pub fn setting_for(&self, control: &Control) -> Option<&Setting> {
        self.setting(&control.setting_id)
    }

    /// Control ids of one section in display order.
    pub fn control_ids(&self, section_id: &str) -> Vec<&str> {
        self.layout
            .iter()
            .find(|l| l.section.id == section_id)
            .map(|l| l.controls.iter().map(|c| c.id.as_str()).collect())
            .unwrap_or_default()
    }
}
