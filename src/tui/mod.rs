//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the calculator core and the headless replay
//! never depend on terminal crates.

pub mod crossterm;
pub mod terminal_guard;
pub mod view;

#[cfg(unix)]
pub use terminal_guard::SignalWatch;
pub use terminal_guard::{ScreenMode, TerminalGuard, TerminationSignal};
pub use view::{EventResult, View};
