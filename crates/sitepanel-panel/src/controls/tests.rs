//! Rendering tests for every control variant.

use super::*;
use sitepanel_config::Sanitizer;

fn color_setting(default: &str) -> Setting {
    Setting::new("design_color", Sanitizer::HexColor).with_default(default)
}

#[test]
fn described_color_never_renders_stored_value() {
    let control = Control::new("design_color", "design", ControlKind::described_color())
        .with_label("Primary Design Color");
    let html = control.render(&color_setting("#000000"), &SettingValue::text("#abcdef"));

    assert!(!html.contains("#abcdef"));
    assert!(!html.contains("value="));
    assert!(html.contains(r#"class="color-picker-hex""#));
    assert!(html.contains(r#"maxlength="7""#));
    assert!(html.contains(r#"placeholder="Hex Value""#));
    assert!(html.contains(r##"data-default-color="#000000""##));
}

#[test]
fn default_color_hint_is_hash_prefixed() {
    assert_eq!(
        default_color_hint(&SettingValue::text("323232")),
        Some("#323232".into())
    );
    assert_eq!(
        default_color_hint(&SettingValue::text("#ffffff")),
        Some("#ffffff".into())
    );
    assert_eq!(default_color_hint(&SettingValue::text("")), None);
    assert_eq!(default_color_hint(&SettingValue::Null), None);
}

#[test]
fn empty_default_omits_hint_attribute() {
    let control = Control::new("design_color", "design", ControlKind::described_color());
    let html = control.render(&color_setting(""), &SettingValue::Null);
    assert!(!html.contains("data-default-color"));
}

#[test]
fn label_and_description_are_escaped() {
    let setting = Setting::new("read_more_text", Sanitizer::PlainText);
    let control = Control::new("read_more_text", "content", ControlKind::DescribedText)
        .with_label("<script>alert(1)</script>")
        .with_description("Say \"hi\" & <b>bye</b>");
    let html = control.render(&setting, &SettingValue::text("\"><img src=x>"));

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Say &quot;hi&quot; &amp; &lt;b&gt;bye&lt;/b&gt;"));
    assert!(html.contains(r#"value="&quot;&gt;&lt;img src=x&gt;""#));
    assert!(html.contains(r#"<div class="control-description">"#));
}

#[test]
fn textarea_renders_escaped_body() {
    let setting = Setting::new("footer_credits", Sanitizer::RichTextarea);
    let control = Control::new("footer_credits", "content", ControlKind::DescribedTextarea);
    let html = control.render(&setting, &SettingValue::text("<p>&copy;</p></textarea>"));

    assert!(html.contains(
        r#"<textarea rows="5" style="width:98%;" data-customize-setting-link="footer_credits">&lt;p&gt;&amp;copy;&lt;/p&gt;&lt;/textarea&gt;</textarea>"#
    ));
}

#[test]
fn checkbox_checked_only_for_one() {
    let setting = Setting::new("hide_tagline", Sanitizer::Checkbox);
    let control = Control::new("hide_tagline", "title_tagline", ControlKind::Checkbox)
        .with_label("Hide Tagline");

    assert!(control
        .render(&setting, &SettingValue::Int(1))
        .contains("checked=\"checked\""));
    assert!(!control
        .render(&setting, &SettingValue::text("1"))
        .contains("checked"));
}

#[test]
fn image_shows_current_url_or_placeholder() {
    let setting = Setting::new("logo", Sanitizer::Url);
    let control = Control::new("logo", "title_tagline", ControlKind::Image);

    let html = control.render(&setting, &SettingValue::text("https://x.test/logo.png"));
    assert!(html.contains(r#"<img src="https://x.test/logo.png" alt="" />"#));

    let html = control.render(&setting, &SettingValue::Null);
    assert!(html.contains("No image selected"));
}

#[test]
fn assets_per_variant() {
    let mut assets = AssetQueue::new();
    Control::new("a", "s", ControlKind::DescribedText).enqueue_assets(&mut assets);
    assert!(assets.is_empty());

    Control::new("c", "s", ControlKind::described_color()).enqueue_assets(&mut assets);
    Control::new("d", "s", ControlKind::Color).enqueue_assets(&mut assets);
    Control::new("e", "s", ControlKind::Image).enqueue_assets(&mut assets);

    assert!(assets.contains(AssetKind::Script, COLOR_PICKER_HANDLE));
    assert!(assets.contains(AssetKind::Style, COLOR_PICKER_HANDLE));
    assert!(assets.contains(AssetKind::Script, MEDIA_UPLOAD_HANDLE));
    assert_eq!(assets.len(), 3);
}

#[test]
fn client_json_carries_statuses_for_described_color() {
    let control = Control::new("design_color", "design", ControlKind::described_color())
        .with_priority(20);
    let client = control.to_client(&color_setting("#000000"), &SettingValue::text("#123456"));

    assert_eq!(client["type"], "color");
    assert_eq!(client["priority"], 20);
    assert_eq!(client["value"], "#123456");
    assert_eq!(client["default"], "#000000");
    assert_eq!(client["transport"], "full-reload");
    assert_eq!(client["statuses"][""], "Default");

    let plain = Control::new("x", "s", ControlKind::Text)
        .to_client(&Setting::new("x", Sanitizer::PlainText), &SettingValue::Null);
    assert!(plain.get("statuses").is_none());
    assert!(plain["value"].is_null());
}

#[test]
fn panel_styles_target_descriptions() {
    let css = panel_styles();
    assert!(css.starts_with("<style type=\"text/css\">"));
    assert!(css.contains(".control-description { color: #999; font-style: italic;"));
}
