//! The head style rule table.
//!
//! Each rule pairs a predicate over the current values with the blocks it
//! emits. Rules are evaluated in table order.

use sitepanel_panel::defaults::ids;
use sitepanel_panel::ValueSnapshot;
use std::fmt;

use super::selectors;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#323232";
pub const DEFAULT_DESIGN_COLOR: &str = "#000000";
pub const DEFAULT_DESIGN_TEXT_COLOR: &str = "#ffffff";
/// Second baseline for the design color, checked by the text color rule.
pub const REFERENCE_DESIGN_COLOR: &str = "#2e9feb";

/// Where a declaration's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Literal(&'static str),
    /// Current value of a color setting, re-checked as a hex color.
    Color(&'static str),
}

/// One `selectors { property: value; }` block.
#[derive(Debug, Clone, Copy)]
pub struct RuleBlock {
    pub selectors: &'static [&'static str],
    pub property: &'static str,
    pub value: ValueSource,
}

#[derive(Clone)]
pub struct StyleRule {
    pub name: &'static str,
    /// Media query wrapping every block of the rule.
    pub media: Option<&'static str>,
    pub predicate: fn(&ValueSnapshot) -> bool,
    pub blocks: Vec<RuleBlock>,
}

impl fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRule")
            .field("name", &self.name)
            .field("media", &self.media)
            .field("blocks", &self.blocks)
            .finish_non_exhaustive()
    }
}

const fn block(
    selectors: &'static [&'static str],
    property: &'static str,
    value: ValueSource,
) -> RuleBlock {
    RuleBlock {
        selectors,
        property,
        value,
    }
}

/// Non-empty and different from `default`.
fn differs(values: &ValueSnapshot, id: &str, default: &str) -> bool {
    let current = values.text(id);
    !current.is_empty() && current != default
}

fn tagline_hidden(values: &ValueSnapshot) -> bool {
    values.is_checked(ids::HIDE_TAGLINE)
}

fn background_changed(values: &ValueSnapshot) -> bool {
    differs(values, ids::BACKGROUND_COLOR, DEFAULT_BACKGROUND_COLOR)
}

fn design_changed(values: &ValueSnapshot) -> bool {
    differs(values, ids::DESIGN_COLOR, DEFAULT_DESIGN_COLOR)
}

/// The text color is re-applied whenever it was changed, and also whenever
/// the design color moved off either of its baselines, so button text keeps
/// contrast even with the text color untouched.
fn design_text_needed(values: &ValueSnapshot) -> bool {
    differs(values, ids::DESIGN_COLOR_TEXT, DEFAULT_DESIGN_TEXT_COLOR)
        || differs(values, ids::DESIGN_COLOR, REFERENCE_DESIGN_COLOR)
        || differs(values, ids::DESIGN_COLOR, DEFAULT_DESIGN_COLOR)
}

fn design_set(values: &ValueSnapshot) -> bool {
    !values.text(ids::DESIGN_COLOR).is_empty()
}

pub fn default_rules() -> Vec<StyleRule> {
    use ValueSource::{Color, Literal};

    vec![
        StyleRule {
            name: "hide-tagline",
            media: None,
            predicate: tagline_hidden,
            blocks: vec![block(selectors::NAVIGATION, "top", Literal("33px"))],
        },
        StyleRule {
            name: "background-color",
            media: None,
            predicate: background_changed,
            blocks: vec![block(
                selectors::BODY,
                "background",
                Color(ids::BACKGROUND_COLOR),
            )],
        },
        StyleRule {
            name: "design-color",
            media: None,
            predicate: design_changed,
            blocks: vec![
                block(selectors::BORDERED, "border-color", Color(ids::DESIGN_COLOR)),
                block(selectors::PROGRESS_BAR, "background", Color(ids::DESIGN_COLOR)),
                block(
                    selectors::LINKS_AND_HIGHLIGHTS,
                    "color",
                    Color(ids::DESIGN_COLOR),
                ),
                block(
                    selectors::BUTTONS_AND_CONTROLS,
                    "background",
                    Color(ids::DESIGN_COLOR),
                ),
            ],
        },
        StyleRule {
            name: "design-text-color",
            media: None,
            predicate: design_text_needed,
            blocks: vec![block(
                selectors::BUTTON_AND_CONTROL_TEXT,
                "color",
                Color(ids::DESIGN_COLOR_TEXT),
            )],
        },
        StyleRule {
            name: "narrow-viewport",
            media: Some("screen and (max-width: 780px)"),
            predicate: design_set,
            blocks: vec![block(
                selectors::NARROW_NAVIGATION_HIGHLIGHTS,
                "color",
                Color(ids::DESIGN_COLOR),
            )],
        },
    ]
}
