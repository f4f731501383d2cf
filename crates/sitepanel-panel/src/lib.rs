//! Settings panel core: the control registry, control variants, the default
//! registration pass and the sanitized save path.
//!
//! A [`Registry`] is built once per admin session by running the
//! [`LifecycleEvent::Register`](sitepanel_common::LifecycleEvent) hooks over a
//! [`RegistryBuilder`], then frozen and shared read-only behind an `Arc`.

pub mod controls;
pub mod customizer;
pub mod defaults;
pub mod entities;
pub mod registry;
pub mod snapshot;

pub use controls::{panel_styles, AssetKind, AssetQueue, ControlWidget};
pub use customizer::{Customizer, RenderedPanel, SaveOutcome};
pub use defaults::{build_registry, default_registry, register_hooks, RegisterHooks};
pub use entities::{Control, ControlKind, Section, Setting};
pub use registry::{Registry, RegistryBuilder, SectionLayout};
pub use snapshot::ValueSnapshot;
