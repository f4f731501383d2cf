//! Conditional head styles.
//!
//! [`StyleGenerator::generate`] walks the rule table in order and keeps the
//! rules whose predicate holds. Every color passes the hex color sanitizer
//! again before it is written out; a value that fails is dropped with a
//! warning, and a rule left with no blocks is not emitted.

mod rules;
pub mod selectors;

#[cfg(test)]
mod tests;

pub use rules::{
    default_rules, RuleBlock, StyleRule, ValueSource, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_DESIGN_COLOR, DEFAULT_DESIGN_TEXT_COLOR, REFERENCE_DESIGN_COLOR,
};

use sitepanel_config::sanitize::sanitize_hex_color;
use sitepanel_panel::ValueSnapshot;
use tracing::{debug, warn};

// =============================================================================
// OUTPUT
// =============================================================================

/// A block that survived value resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedBlock {
    pub selectors: &'static [&'static str],
    pub property: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmittedRule {
    pub name: &'static str,
    pub media: Option<&'static str>,
    pub blocks: Vec<EmittedBlock>,
}

/// The generated head styles, in rule table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<EmittedRule>,
}

impl StyleSheet {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[EmittedRule] {
        &self.rules
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    pub fn contains_rule(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name == name)
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            match rule.media {
                Some(media) => {
                    css.push_str(&format!("@media {media} {{\n"));
                    for block in &rule.blocks {
                        push_block(&mut css, block, "\t");
                    }
                    css.push_str("}\n");
                }
                None => {
                    for block in &rule.blocks {
                        push_block(&mut css, block, "");
                    }
                }
            }
        }
        css
    }

    /// `<style>` element for the page head; empty when no rule applies.
    pub fn to_style_tag(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("<style type=\"text/css\">\n{}</style>", self.to_css())
    }
}

fn push_block(css: &mut String, block: &EmittedBlock, indent: &str) {
    let selectors = block
        .selectors
        .iter()
        .map(|s| format!("{indent}{s}"))
        .collect::<Vec<_>>()
        .join(",\n");
    css.push_str(&format!(
        "{selectors} {{\n{indent}\t{}: {};\n{indent}}}\n",
        block.property, block.value
    ));
}

// =============================================================================
// GENERATOR
// =============================================================================

#[derive(Debug, Clone)]
pub struct StyleGenerator {
    rules: Vec<StyleRule>,
}

impl StyleGenerator {
    pub fn new(rules: Vec<StyleRule>) -> Self {
        Self { rules }
    }

    pub fn generate(&self, values: &ValueSnapshot) -> StyleSheet {
        let mut rules = Vec::new();

        for rule in &self.rules {
            if !(rule.predicate)(values) {
                continue;
            }

            let blocks: Vec<EmittedBlock> = rule
                .blocks
                .iter()
                .filter_map(|block| resolve(rule.name, block, values))
                .collect();

            if blocks.is_empty() {
                debug!(rule = rule.name, "style rule dropped: no valid declarations");
                continue;
            }

            rules.push(EmittedRule {
                name: rule.name,
                media: rule.media,
                blocks,
            });
        }

        StyleSheet { rules }
    }
}

impl Default for StyleGenerator {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

fn resolve(rule: &'static str, block: &RuleBlock, values: &ValueSnapshot) -> Option<EmittedBlock> {
    let value = match block.value {
        ValueSource::Literal(value) => value.to_string(),
        ValueSource::Color(setting) => {
            let raw = values.text(setting);
            match sanitize_hex_color(&raw) {
                Ok(color) if !color.is_empty() => color,
                Ok(_) => {
                    warn!(rule, setting, "style declaration dropped: color is empty");
                    return None;
                }
                Err(e) => {
                    warn!(rule, setting, value = %raw, error = %e, "style declaration dropped");
                    return None;
                }
            }
        }
    };

    Some(EmittedBlock {
        selectors: block.selectors,
        property: block.property,
        value,
    })
}
