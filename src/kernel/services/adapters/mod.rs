//! Service adapters: OS specific implementations (filesystem, writers).

pub mod display;
pub mod keybinding;
pub mod paths;
pub mod settings;

pub use display::WriterDisplay;
pub use keybinding::KeybindingService;
pub use paths::{ensure_log_dir, get_app_data_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_command,
    parse_keybinding,
};
