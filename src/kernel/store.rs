use crate::core::Command;

use super::display::{render_display, Display};
use super::{Action, CalcState, Effect};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: CalcState,
}

impl Store {
    pub fn new(state: CalcState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn display(&self) -> Display {
        render_display(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::SetExpression(value) => {
                DispatchResult::changed(self.state.set_expression(value))
            }
            Action::Tick => DispatchResult::default(),
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        match cmd {
            Command::Append(token) => DispatchResult::changed(self.state.append(token)),
            Command::Backspace => DispatchResult::changed(self.state.backspace()),
            Command::Clear => DispatchResult::changed(self.state.clear()),
            Command::AllClear => DispatchResult::changed(self.state.all_clear()),
            Command::Equals => DispatchResult::changed(self.state.commit()),
            Command::Quit => DispatchResult {
                effects: vec![Effect::Quit],
                state_changed: false,
            },
            Command::Custom(name) => {
                tracing::warn!(command = %name, "unknown command");
                DispatchResult::default()
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(CalcState::new())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
