//! Service ports: traits + data contracts.

pub mod display;
pub mod settings;

pub use display::DisplayPort;
pub use settings::{KeybindingRule, Settings, ThemeSettings};
