//! Front-of-site output for the settings panel.
//!
//! - [`style`]: the conditional head style block, driven by a declarative
//!   rule table.
//! - [`bridge`]: editor to preview synchronization. Full-reload settings
//!   debounce a frame reload; live settings are published on a per-setting
//!   channel and patched into the preview DOM.
//! - [`page`]: the page lifecycle hooks that emit both.

pub mod bridge;
pub mod page;
pub mod style;

pub use bridge::{PreviewAction, PreviewBridge, PreviewMessage, PreviewReceiver, ReloadDebouncer};
pub use page::{page_hooks, PageContext, PageHooks};
pub use style::{StyleGenerator, StyleSheet};
