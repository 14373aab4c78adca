//! Service adapters: OS specific implementations (filesystem, key tables).

pub mod config;
pub mod keybinding;
pub mod paths;
pub mod settings;

pub use config::ConfigService;
pub use keybinding::KeybindingService;
pub use paths::{ensure_log_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_keybinding,
    SettingsError,
};
