pub mod errors;
pub mod hooks;
pub mod id;
pub mod types;

pub use errors::{
    ConfigError, EntityKind, RegistryError, SanitizeError, SitepanelError, StoreError,
};
pub use hooks::{Hooks, LifecycleEvent};
pub use id::{new_id, SessionId};
pub use types::{Capability, SettingValue, StorageClass, Transport};

pub type Result<T> = std::result::Result<T, SitepanelError>;
