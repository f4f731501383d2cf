//! Style generator tests.

use super::*;
use sitepanel_common::SettingValue;
use sitepanel_panel::defaults::{default_registry, ids};

fn defaults() -> ValueSnapshot {
    ValueSnapshot::defaults(&default_registry().unwrap())
}

fn generate(values: &ValueSnapshot) -> StyleSheet {
    StyleGenerator::default().generate(values)
}

#[test]
fn rule_table_order() {
    let names: Vec<&str> = default_rules().iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "hide-tagline",
            "background-color",
            "design-color",
            "design-text-color",
            "narrow-viewport"
        ]
    );
}

#[test]
fn no_border_or_background_rules_at_default_design_color() {
    let sheet = generate(&defaults());
    let css = sheet.to_css();
    assert!(!sheet.contains_rule("design-color"));
    assert!(!sheet.contains_rule("background-color"));
    assert!(!css.contains("border-color"));
    assert!(!css.contains("background"));
}

#[test]
fn no_design_rules_when_design_color_empty() {
    let values = defaults().with(ids::DESIGN_COLOR, "");
    let sheet = generate(&values);
    let css = sheet.to_css();
    assert!(!css.contains("border-color"));
    assert!(!css.contains("background"));
    assert!(!sheet.contains_rule("narrow-viewport"));
    assert!(!sheet.contains_rule("design-text-color"));
}

#[test]
fn changed_design_color_emits_all_design_blocks() {
    let values = defaults().with(ids::DESIGN_COLOR, "#ff0000");
    let sheet = generate(&values);
    let css = sheet.to_css();

    assert_eq!(
        sheet.rule_names(),
        vec!["design-color", "design-text-color", "narrow-viewport"]
    );
    assert!(css.contains("#page,\n.bypostauthor .comment-footer {\n\tborder-color: #ff0000;\n}"));
    assert!(css.contains(".pace .pace-progress {\n\tbackground: #ff0000;\n}"));
    assert!(css.contains(".site-main .paging-navigation a:hover {\n\tcolor: #ff0000;\n}"));
    assert!(css.contains(".widget_calendar table caption {\n\tbackground: #ff0000;\n}"));
}

#[test]
fn design_color_change_forces_text_color_with_default_value() {
    let values = defaults().with(ids::DESIGN_COLOR, "#ff0000");
    let sheet = generate(&values);

    let text_rule = sheet
        .rules()
        .iter()
        .find(|r| r.name == "design-text-color")
        .unwrap();
    assert_eq!(text_rule.blocks[0].value, DEFAULT_DESIGN_TEXT_COLOR);
    assert_eq!(text_rule.blocks[0].property, "color");
}

#[test]
fn reference_design_color_still_emits_text_color() {
    let values = defaults()
        .with(ids::DESIGN_COLOR, REFERENCE_DESIGN_COLOR)
        .with(ids::DESIGN_COLOR_TEXT, DEFAULT_DESIGN_TEXT_COLOR);
    let sheet = generate(&values);
    assert!(sheet.contains_rule("design-color"));
    assert!(sheet.contains_rule("design-text-color"));
}

#[test]
fn changed_text_color_alone_emits_text_rule() {
    let values = defaults()
        .with(ids::DESIGN_COLOR, "")
        .with(ids::DESIGN_COLOR_TEXT, "#222");
    let sheet = generate(&values);
    assert_eq!(sheet.rule_names(), vec!["design-text-color"]);
    assert!(sheet.to_css().contains("color: #222;"));
}

#[test]
fn narrow_viewport_wraps_in_media_query() {
    let sheet = generate(&defaults());
    assert!(sheet.contains_rule("narrow-viewport"));
    let css = sheet.to_css();
    assert!(css.contains(
        "@media screen and (max-width: 780px) {\n\t.site-header .main-navigation ul ul .highlight a,\n\t.site-header .main-navigation .menu > .highlight > a {\n\t\tcolor: #000000;\n\t}\n}\n"
    ));
}

#[test]
fn hidden_tagline_moves_navigation() {
    let values = defaults().with(ids::HIDE_TAGLINE, SettingValue::Int(1));
    let sheet = generate(&values);
    assert_eq!(sheet.rule_names()[0], "hide-tagline");
    assert!(sheet.to_css().starts_with(".main-navigation {\n\ttop: 33px;\n}\n"));

    let values = defaults().with(ids::HIDE_TAGLINE, "1");
    assert!(!generate(&values).contains_rule("hide-tagline"));
}

#[test]
fn background_rule_only_when_changed() {
    let values = defaults().with(ids::BACKGROUND_COLOR, "#fafafa");
    let sheet = generate(&values);
    assert!(sheet.to_css().contains("body {\n\tbackground: #fafafa;\n}"));

    let values = defaults().with(ids::BACKGROUND_COLOR, "");
    assert!(!generate(&values).contains_rule("background-color"));
}

#[test]
fn invalid_stored_color_is_dropped() {
    let values = defaults()
        .with(ids::BACKGROUND_COLOR, "red; } body { color: evil")
        .with(ids::DESIGN_COLOR, "#00ff00")
        .with(ids::DESIGN_COLOR_TEXT, "javascript");
    let sheet = generate(&values);
    let css = sheet.to_css();

    assert!(!css.contains("evil"));
    assert!(!css.contains("javascript"));
    assert!(!sheet.contains_rule("background-color"));
    assert!(!sheet.contains_rule("design-text-color"));
    assert!(sheet.contains_rule("design-color"));
}

#[test]
fn style_tag_wraps_css() {
    let sheet = generate(&defaults().with(ids::DESIGN_COLOR, "#abc"));
    let tag = sheet.to_style_tag();
    assert!(tag.starts_with("<style type=\"text/css\">\n"));
    assert!(tag.ends_with("</style>"));

    let empty = generate(&defaults().with(ids::DESIGN_COLOR, ""));
    assert!(empty.is_empty());
    assert_eq!(empty.to_style_tag(), "");
}
