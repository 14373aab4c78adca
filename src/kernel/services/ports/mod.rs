//! Service ports: plain data contracts shared by the kernel and adapters.

pub mod config;
pub mod settings;

pub use config::ComposerConfig;
pub use settings::{KeybindingRule, Settings};
