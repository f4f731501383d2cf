/// Stylesheet printed only inside the control panel.
pub fn panel_styles() -> &'static str {
    r#"<style type="text/css">
body { background: #fff; }
#customize-controls #customize-theme-controls .description { display: block; color: #999; margin: 2px 0 15px; font-style: italic; }
textarea, input, select, .customize-description { font-size: 12px !important; }
.customize-control-title { font-size: 13px !important; margin: 5px 0 3px !important; }
.customize-control label { font-size: 12px !important; }
.customize-control-text,
#customize-control-background_image { margin-bottom: 15px; }
.control-description { color: #999; font-style: italic; margin-bottom: 6px; }
</style>"#
}
