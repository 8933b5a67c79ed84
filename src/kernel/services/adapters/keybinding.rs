//! 快捷键：按键 → 命令

use crate::core::event::{Key, KeyCode};
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

use super::settings::{parse_command, parse_keybinding};

pub struct KeybindingService {
    bindings: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            bindings: default_keybindings(),
        }
    }

    pub fn resolve(&self, key: &Key) -> Option<&Command> {
        self.bindings.get(key)
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<Command> {
        self.bindings.remove(key)
    }

    /// Applies user rules on top of the current bindings. Returns how many
    /// rules were applied; rules with an unparsable key are skipped.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unparsable key");
                continue;
            };
            if rule.command.trim().is_empty() {
                let _ = self.unbind(&key);
            } else {
                self.bind(key, parse_command(&rule.command));
            }
            applied += 1;
        }
        applied
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(32);

    for digit in '0'..='9' {
        bindings.insert(Key::simple(KeyCode::Char(digit)), Command::Append(digit));
    }
    for op in ['+', '-', '*', '/', '%', '(', ')'] {
        bindings.insert(Key::simple(KeyCode::Char(op)), Command::Append(op));
    }
    bindings.insert(Key::simple(KeyCode::Char('.')), Command::Append('.'));
    bindings.insert(Key::simple(KeyCode::Char(',')), Command::Append('.'));

    bindings.insert(Key::simple(KeyCode::Enter), Command::Equals);
    bindings.insert(Key::simple(KeyCode::Char('=')), Command::Equals);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::Backspace);
    bindings.insert(Key::simple(KeyCode::Delete), Command::Clear);
    bindings.insert(Key::simple(KeyCode::Esc), Command::AllClear);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
