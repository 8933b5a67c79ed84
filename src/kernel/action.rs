use crate::core::Command;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RunCommand(Command),
    SetExpression(String),
    Tick,
}
