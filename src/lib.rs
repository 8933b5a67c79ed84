//! zcalc - 终端计算器库
//!
//! 模块结构：
//! - core: 输入事件与语义命令（与终端库无关）
//! - kernel: 表达式状态、求值管线、Store、设置与快捷键服务
//! - headless: 无界面的按键回放（`zcalc replay`）
//! - tui / app: crossterm + ratatui 前端（`tui` feature）

pub mod core;
pub mod headless;
pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
