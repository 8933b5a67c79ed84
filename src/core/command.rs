//! 命令系统：语义命令定义
//!
//! - Command: 语义命令枚举（不关心具体按键或按钮）
//! - 名称与设置文件中的 `command` 字段一一对应

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 表达式编辑 ====================
    Append(char),
    Backspace,
    Clear,
    AllClear,

    // ==================== 求值 ====================
    Equals,

    // ==================== 系统操作 ====================
    Quit,

    // ==================== 扩展点 ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Append(_) => "append",
            Command::Backspace => "backspace",
            Command::Clear => "clear",
            Command::AllClear => "all-clear",
            Command::Equals => "equals",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    /// Parses a command name as written in settings or on a keypad button.
    ///
    /// `append:<token>` carries a single-character token; anything unknown is
    /// kept as [`Command::Custom`].
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if let Some(token) = trimmed.strip_prefix("append:") {
            let mut chars = token.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                return Command::Append(ch);
            }
            return Command::Custom(trimmed.to_string());
        }

        match trimmed {
            "backspace" => Command::Backspace,
            "clear" => Command::Clear,
            "all-clear" | "allClear" => Command::AllClear,
            "equals" | "commit" => Command::Equals,
            "quit" => Command::Quit,
            _ => Command::Custom(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
