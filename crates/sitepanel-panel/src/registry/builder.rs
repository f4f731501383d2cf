//! Registration pass.
//!
//! Entities are kept in registration order; ordering by priority happens
//! once, at [`RegistryBuilder::freeze`].

use sitepanel_common::{EntityKind, RegistryError};
use tracing::{debug, info};

use super::frozen::{Registry, SectionLayout};
use crate::entities::{Control, Section, Setting};

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    sections: Vec<Section>,
    /// Ids of sections removed during this pass. They stay reserved.
    removed_sections: Vec<String>,
    settings: Vec<Setting>,
    controls: Vec<Control>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_section(&mut self, section: Section) -> Result<(), RegistryError> {
        if self.section_exists(&section.id) || self.removed_sections.contains(&section.id) {
            return Err(duplicate(EntityKind::Section, &section.id));
        }
        debug!(id = %section.id, priority = section.priority, "registered section");
        self.sections.push(section);
        Ok(())
    }

    pub fn register_setting(&mut self, setting: Setting) -> Result<(), RegistryError> {
        if self.setting_exists(&setting.id) {
            return Err(duplicate(EntityKind::Setting, &setting.id));
        }
        debug!(id = %setting.id, "registered setting");
        self.settings.push(setting);
        Ok(())
    }

    pub fn register_control(&mut self, control: Control) -> Result<(), RegistryError> {
        if self.control_index(&control.id).is_some() {
            return Err(duplicate(EntityKind::Control, &control.id));
        }
        let from = format!("control '{}'", control.id);
        if !self.setting_exists(&control.setting_id) {
            return Err(unknown(EntityKind::Setting, &control.setting_id, from));
        }
        if !self.section_exists(&control.section_id) {
            return Err(unknown(EntityKind::Section, &control.section_id, from));
        }
        debug!(id = %control.id, section = %control.section_id, "registered control");
        self.controls.push(control);
        Ok(())
    }

    /// Detach a section. Controls still pointing at it must be relocated
    /// before [`freeze`](Self::freeze), which otherwise fails with
    /// [`RegistryError::DanglingControl`].
    pub fn remove_section(&mut self, id: &str) -> Result<(), RegistryError> {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return Err(unknown(EntityKind::Section, id, "remove_section".into()));
        };
        self.sections.remove(index);
        self.removed_sections.push(id.to_string());
        debug!(id, "removed section");
        Ok(())
    }

    /// Move a control into another section at a new priority.
    pub fn relocate_control(
        &mut self,
        id: &str,
        section_id: &str,
        priority: i32,
    ) -> Result<(), RegistryError> {
        let index = self
            .control_index(id)
            .ok_or_else(|| unknown(EntityKind::Control, id, "relocate_control".into()))?;
        if !self.section_exists(section_id) {
            return Err(unknown(
                EntityKind::Section,
                section_id,
                format!("control '{id}'"),
            ));
        }

        let control = &mut self.controls[index];
        control.section_id = section_id.to_string();
        control.priority = priority;
        debug!(id, section = section_id, priority, "relocated control");
        Ok(())
    }

    pub fn relabel_control(&mut self, id: &str, label: impl Into<String>) -> Result<(), RegistryError> {
        let index = self
            .control_index(id)
            .ok_or_else(|| unknown(EntityKind::Control, id, "relabel_control".into()))?;
        self.controls[index].label = label.into();
        Ok(())
    }

    /// Finish the pass: verify no control is left in a removed section and
    /// fix the panel order.
    ///
    /// Sections sort by priority, controls by priority within their section;
    /// both sorts are stable, so ties keep registration order.
    pub fn freeze(self) -> Result<Registry, RegistryError> {
        if let Some(orphan) = self
            .controls
            .iter()
            .find(|c| !self.section_exists(&c.section_id))
        {
            return Err(RegistryError::DanglingControl {
                control: orphan.id.clone(),
                section: orphan.section_id.clone(),
            });
        }

        let mut sections = self.sections;
        sections.sort_by_key(|s| s.priority);

        let mut controls = self.controls;
        controls.sort_by_key(|c| c.priority);

        let layout: Vec<SectionLayout> = sections
            .into_iter()
            .map(|section| {
                let controls = controls
                    .iter()
                    .filter(|c| c.section_id == section.id)
                    .cloned()
                    .collect();
                SectionLayout { section, controls }
            })
            .collect();

        let registry = Registry::new(layout, self.settings);
        info!(
            sections = registry.layout().len(),
            settings = registry.settings().count(),
            controls = registry.controls().count(),
            "registry frozen"
        );
        Ok(registry)
    }

    fn section_exists(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    fn setting_exists(&self, id: &str) -> bool {
        self.settings.iter().any(|s| s.id == id)
    }

    fn control_index(&self, id: &str) -> Option<usize> {
        self.controls.iter().position(|c| c.id == id)
    }
}

fn duplicate(kind: EntityKind, id: &str) -> RegistryError {
    RegistryError::DuplicateId {
        kind,
        id: id.to_string(),
    }
}

fn unknown(kind: EntityKind, id: &str, from: String) -> RegistryError {
    RegistryError::UnknownReference {
        kind,
        id: id.to_string(),
        from,
    }
}
