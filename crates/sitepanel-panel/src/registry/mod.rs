//! Control registry: a mutable builder for the registration pass and the
//! frozen, read-only [`Registry`] every other component receives.

mod builder;
mod frozen;


pub use builder::RegistryBuilder;
pub use frozen::{Registry, SectionLayout};
