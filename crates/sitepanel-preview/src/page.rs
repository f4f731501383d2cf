//! Page lifecycle hooks: head styles on every page, panel styles in the
//! editor, and the preview script only inside the preview frame.

use sitepanel_common::{Hooks, LifecycleEvent, SitepanelError};
use sitepanel_panel::{panel_styles, Registry, ValueSnapshot};
use std::sync::Arc;

use crate::bridge::preview_script;
use crate::style::StyleGenerator;

/// What the page hooks write into.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub registry: Arc<Registry>,
    pub values: ValueSnapshot,
    pub head: Vec<String>,
    pub scripts: Vec<String>,
}

impl PageContext {
    pub fn new(registry: Arc<Registry>, values: ValueSnapshot) -> Self {
        Self {
            registry,
            values,
            head: Vec::new(),
            scripts: Vec::new(),
        }
    }

    pub fn head_html(&self) -> String {
        self.head.join("\n")
    }

    pub fn scripts_html(&self) -> String {
        self.scripts.join("\n")
    }
}

pub type PageHooks = Hooks<PageContext, SitepanelError>;

pub fn page_hooks() -> PageHooks {
    let mut hooks = PageHooks::new();
    hooks.add(LifecycleEvent::HeadStyles, "head_styles", head_styles);
    hooks.add(LifecycleEvent::ControlsPrintStyles, "panel_styles", print_panel_styles);
    hooks.add(LifecycleEvent::PreviewInit, "preview_script", enqueue_preview_script);
    hooks
}

fn head_styles(ctx: &mut PageContext) -> Result<(), SitepanelError> {
    let tag = StyleGenerator::default().generate(&ctx.values).to_style_tag();
    if !tag.is_empty() {
        ctx.head.push(tag);
    }
    Ok(())
}

fn print_panel_styles(ctx: &mut PageContext) -> Result<(), SitepanelError> {
    ctx.head.push(panel_styles().to_string());
    Ok(())
}

fn enqueue_preview_script(ctx: &mut PageContext) -> Result<(), SitepanelError> {
    let script = preview_script(&ctx.registry);
    ctx.scripts.push(format!("<script>\n{script}\n</script>"));
    Ok(())
}
