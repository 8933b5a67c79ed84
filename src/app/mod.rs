//! 应用层：计算器视图、按键面板、主题

pub mod calculator;
pub mod keypad;
pub mod theme;

pub use calculator::Calculator;
pub use theme::UiTheme;
