//! Default registration pass: the host's native sections and settings,
//! then the site panel that restructures them.

use sitepanel_common::{Hooks, LifecycleEvent, RegistryError, SettingValue, StorageClass, Transport};
use sitepanel_config::Sanitizer;

use crate::entities::{Control, ControlKind, Section, Setting};
use crate::registry::{Registry, RegistryBuilder};

/// Section, setting and control ids used by the default pass.
pub mod ids {
    pub const TITLE_TAGLINE: &str = "title_tagline";
    pub const COLORS: &str = "colors";
    pub const BACKGROUND_IMAGE_SECTION: &str = "background_image";
    pub const DESIGN: &str = "design";
    pub const CONTENT: &str = "content";

    pub const BLOGNAME: &str = "blogname";
    pub const BLOGDESCRIPTION: &str = "blogdescription";
    pub const LOGO: &str = "logo";
    pub const HIDE_TAGLINE: &str = "hide_tagline";
    pub const DESIGN_COLOR: &str = "design_color";
    pub const DESIGN_COLOR_TEXT: &str = "design_color_text";
    pub const BACKGROUND_COLOR: &str = "background_color";
    pub const BACKGROUND_IMAGE: &str = "background_image";
    pub const POST_EXCERPTS: &str = "post_excerpts";
    pub const READ_MORE_TEXT: &str = "read_more_text";
    pub const FOOTER_CREDITS: &str = "footer_credits";
}

pub type RegisterHooks = Hooks<RegistryBuilder, RegistryError>;

/// Register-event hooks in run order: host defaults, then the site panel.
pub fn register_hooks() -> RegisterHooks {
    let mut hooks = RegisterHooks::new();
    hooks.add(LifecycleEvent::Register, "host_defaults", register_host_defaults);
    hooks.add(LifecycleEvent::Register, "site_panel", register_site_panel);
    hooks
}

/// Run the register hooks over a fresh builder and freeze the result.
pub fn build_registry(hooks: &RegisterHooks) -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    hooks.run(LifecycleEvent::Register, &mut builder)?;
    builder.freeze()
}

pub fn default_registry() -> Result<Registry, RegistryError> {
    build_registry(&register_hooks())
}

/// Native entities the host provides before any site customization.
pub fn register_host_defaults(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register_section(Section::new(ids::TITLE_TAGLINE, "Site Title (Logo) & Tagline", 10))?;
    builder.register_section(Section::new(ids::COLORS, "Colors", 40))?;
    builder.register_section(Section::new(ids::BACKGROUND_IMAGE_SECTION, "Background Image", 80))?;

    builder.register_setting(
        Setting::new(ids::BLOGNAME, Sanitizer::PlainText)
            .with_default("")
            .with_storage(StorageClass::SiteOption)
            .with_transport(Transport::LiveMessage),
    )?;
    builder.register_setting(
        Setting::new(ids::BLOGDESCRIPTION, Sanitizer::PlainText)
            .with_default("")
            .with_storage(StorageClass::SiteOption)
            .with_transport(Transport::LiveMessage),
    )?;
    builder.register_setting(
        Setting::new(ids::BACKGROUND_COLOR, Sanitizer::HexColor)
            .with_default("#323232")
            .with_storage(StorageClass::SiteOption),
    )?;
    builder.register_setting(Setting::new(ids::BACKGROUND_IMAGE, Sanitizer::Url).with_default(""))?;

    builder.register_control(
        Control::new(ids::BLOGNAME, ids::TITLE_TAGLINE, ControlKind::Text)
            .with_label("Site Title")
            .with_priority(10),
    )?;
    builder.register_control(
        Control::new(ids::BLOGDESCRIPTION, ids::TITLE_TAGLINE, ControlKind::Text)
            .with_label("Tagline")
            .with_priority(30),
    )?;
    builder.register_control(
        Control::new(ids::BACKGROUND_COLOR, ids::COLORS, ControlKind::Color)
            .with_label("Background Color"),
    )?;
    builder.register_control(
        Control::new(ids::BACKGROUND_IMAGE, ids::BACKGROUND_IMAGE_SECTION, ControlKind::Image)
            .with_label("Background Image"),
    )?;
    Ok(())
}

/// The site's own panel: logo, tagline flag, design colors, content options,
/// and the native color/background controls moved into the design section.
pub fn register_site_panel(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    // Site title (logo) & tagline
    builder.register_setting(Setting::new(ids::LOGO, Sanitizer::Url))?;
    builder.register_control(
        Control::new(ids::LOGO, ids::TITLE_TAGLINE, ControlKind::Image)
            .with_label("Custom Site Logo (replaces title)")
            .with_priority(20),
    )?;

    builder.register_setting(
        Setting::new(ids::HIDE_TAGLINE, Sanitizer::Checkbox).with_default(SettingValue::Int(0)),
    )?;
    builder.register_control(
        Control::new(ids::HIDE_TAGLINE, ids::TITLE_TAGLINE, ControlKind::Checkbox)
            .with_label("Hide Tagline")
            .with_priority(40),
    )?;

    // Design options
    builder.register_section(
        Section::new(ids::DESIGN, "Design Options", 20)
            .with_description("Control the primary design color and other elements of your site."),
    )?;

    builder.register_setting(
        Setting::new(ids::DESIGN_COLOR, Sanitizer::HexColor)
            .with_default("#000000")
            .with_storage(StorageClass::SiteOption),
    )?;
    builder.register_control(
        Control::new(ids::DESIGN_COLOR, ids::DESIGN, ControlKind::described_color())
            .with_label("Primary Design Color")
            .with_description(
                "The primary design color is used for links, borders, buttons, and other design elements.",
            )
            .with_priority(20),
    )?;

    builder.register_setting(
        Setting::new(ids::DESIGN_COLOR_TEXT, Sanitizer::HexColor)
            .with_default("#ffffff")
            .with_storage(StorageClass::SiteOption),
    )?;
    builder.register_control(
        Control::new(ids::DESIGN_COLOR_TEXT, ids::DESIGN, ControlKind::described_color())
            .with_label("Text Color for Designed Elements")
            .with_description(
                "When the above Primary Design Color is used as a background color, this color option is applied to the text within that element.",
            )
            .with_priority(30),
    )?;

    builder.remove_section(ids::COLORS)?;
    builder.relocate_control(ids::BACKGROUND_COLOR, ids::DESIGN, 40)?;
    builder.relabel_control(ids::BACKGROUND_COLOR, "Full Site Background Color")?;

    builder.remove_section(ids::BACKGROUND_IMAGE_SECTION)?;
    builder.relocate_control(ids::BACKGROUND_IMAGE, ids::DESIGN, 50)?;
    builder.relabel_control(ids::BACKGROUND_IMAGE, "Full Site Background Image")?;

    // Content options
    builder.register_section(
        Section::new(ids::CONTENT, "Content Options", 40).with_description(
            "Adjust the display of content on your website. All options have a default value that can be left as-is but you are free to customize.",
        ),
    )?;

    builder.register_setting(
        Setting::new(ids::POST_EXCERPTS, Sanitizer::Checkbox).with_default(SettingValue::Int(0)),
    )?;
    builder.register_control(
        Control::new(ids::POST_EXCERPTS, ids::CONTENT, ControlKind::Checkbox)
            .with_label("Display Post Excerpts")
            .with_priority(10),
    )?;

    builder.register_setting(
        Setting::new(ids::READ_MORE_TEXT, Sanitizer::PlainText).with_default("Continue reading"),
    )?;
    builder.register_control(
        Control::new(ids::READ_MORE_TEXT, ids::CONTENT, ControlKind::Text)
            .with_label("Excerpt & More Link Text")
            .with_priority(20),
    )?;

    builder.register_setting(Setting::new(ids::FOOTER_CREDITS, Sanitizer::RichTextarea))?;
    builder.register_control(
        Control::new(ids::FOOTER_CREDITS, ids::CONTENT, ControlKind::DescribedTextarea)
            .with_label("Footer Credits & Copyright")
            .with_description(
                "Displays tagline, site title, copyright, and year by default. Allowed tags: <img>, <a>, <div>, <span>, <blockquote>, <p>, <em>, <strong>, <form>, <input>, <br>, <s>, <i>, <b>",
            )
            .with_priority(60),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        default_registry().unwrap()
    }

    #[test]
    fn sections_in_panel_order() {
        let registry = registry();
        let sections: Vec<(&str, i32)> = registry
            .layout()
            .iter()
            .map(|l| (l.section.id.as_str(), l.section.priority))
            .collect();
        assert_eq!(
            sections,
            vec![(ids::TITLE_TAGLINE, 10), (ids::DESIGN, 20), (ids::CONTENT, 40)]
        );
        assert!(registry.section(ids::COLORS).is_none());
        assert!(registry.section(ids::BACKGROUND_IMAGE_SECTION).is_none());
    }

    #[test]
    fn controls_in_panel_order() {
        let registry = registry();
        assert_eq!(
            registry.control_ids(ids::TITLE_TAGLINE),
            vec![ids::BLOGNAME, ids::LOGO, ids::BLOGDESCRIPTION, ids::HIDE_TAGLINE]
        );
        assert_eq!(
            registry.control_ids(ids::DESIGN),
            vec![
                ids::DESIGN_COLOR,
                ids::DESIGN_COLOR_TEXT,
                ids::BACKGROUND_COLOR,
                ids::BACKGROUND_IMAGE
            ]
        );
        assert_eq!(
            registry.control_ids(ids::CONTENT),
            vec![ids::POST_EXCERPTS, ids::READ_MORE_TEXT, ids::FOOTER_CREDITS]
        );
    }

    #[test]
    fn relocated_controls_are_relabeled() {
        let registry = registry();
        let bg = registry.control(ids::BACKGROUND_COLOR).unwrap();
        assert_eq!(bg.label, "Full Site Background Color");
        assert_eq!(bg.priority, 40);
        let image = registry.control(ids::BACKGROUND_IMAGE).unwrap();
        assert_eq!(image.label, "Full Site Background Image");
        assert_eq!(image.section_id, ids::DESIGN);
    }

    #[test]
    fn storage_classes_and_transports() {
        let registry = registry();
        let options = [
            ids::BLOGNAME,
            ids::BLOGDESCRIPTION,
            ids::DESIGN_COLOR,
            ids::DESIGN_COLOR_TEXT,
            ids::BACKGROUND_COLOR,
        ];
        for setting in registry.settings() {
            let expected = if options.contains(&setting.id.as_str()) {
                StorageClass::SiteOption
            } else {
                StorageClass::ThemeMod
            };
            assert_eq!(setting.storage_class, expected, "{}", setting.id);
            assert_eq!(setting.capability.as_str(), "edit_theme_options");
        }

        let live: Vec<&str> = registry.live_settings().map(|s| s.id.as_str()).collect();
        assert_eq!(live, vec![ids::BLOGNAME, ids::BLOGDESCRIPTION]);
    }

    #[test]
    fn every_control_has_a_setting() {
        let registry = registry();
        assert_eq!(registry.controls().count(), 11);
        assert_eq!(registry.settings().count(), 11);
        for control in registry.controls() {
            assert!(registry.setting_for(control).is_some(), "{}", control.id);
        }
    }

    #[test]
    fn site_panel_alone_fails_without_host_defaults() {
        let mut hooks = RegisterHooks::new();
        hooks.add(LifecycleEvent::Register, "site_panel", register_site_panel);
        assert!(matches!(
            build_registry(&hooks),
            Err(RegistryError::UnknownReference { .. })
        ));
    }

    #[test]
    fn hooks_run_host_first() {
        assert_eq!(
            register_hooks().names(LifecycleEvent::Register),
            vec!["host_defaults", "site_panel"]
        );
    }
}
