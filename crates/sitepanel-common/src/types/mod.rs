mod setting;
mod value;

pub use setting::{Capability, StorageClass, Transport};
pub use value::SettingValue;
