//! Headless key replay: key names → keybindings → store, no terminal.

use thiserror::Error;

use crate::kernel::services::adapters::settings::parse_keybinding;
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::DisplayPort;
use crate::kernel::{Action, Display, Effect, Store};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeadlessError {
    #[error("unknown key name `{0}`")]
    UnknownKey(String),
}

/// What happened to one replayed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Dispatched { state_changed: bool },
    Unbound,
    Quit,
}

pub struct HeadlessSession {
    store: Store,
    keybindings: KeybindingService,
    quit: bool,
}

impl HeadlessSession {
    pub fn new(keybindings: KeybindingService) -> Self {
        Self {
            store: Store::default(),
            keybindings,
            quit: false,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn display(&self) -> Display {
        self.store.display()
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Feeds one key name such as `7`, `+`, `enter` or `ctrl+q`.
    pub fn feed_key_name(&mut self, name: &str) -> Result<KeyOutcome, HeadlessError> {
        let key =
            parse_keybinding(name).ok_or_else(|| HeadlessError::UnknownKey(name.to_string()))?;
        let Some(command) = self.keybindings.resolve(&key).cloned() else {
            tracing::debug!(key = name, "unbound key ignored");
            return Ok(KeyOutcome::Unbound);
        };

        let result = self.store.dispatch(Action::RunCommand(command));
        if result.effects.contains(&Effect::Quit) {
            self.quit = true;
            return Ok(KeyOutcome::Quit);
        }
        Ok(KeyOutcome::Dispatched {
            state_changed: result.state_changed,
        })
    }

    /// Feeds keys in order and stops early at a quit key.
    pub fn replay<I, S>(&mut self, names: I) -> Result<Display, HeadlessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            if self.feed_key_name(name.as_ref())? == KeyOutcome::Quit {
                break;
            }
        }
        Ok(self.display())
    }

    pub fn present(&self, port: &mut dyn DisplayPort) -> std::io::Result<()> {
        port.present(&self.display())
    }
}

impl Default for HeadlessSession {
    fn default() -> Self {
        Self::new(KeybindingService::new())
    }
}

#[cfg(test)]
#[path = "../tests/unit/headless.rs"]
mod tests;
