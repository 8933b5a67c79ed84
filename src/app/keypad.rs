//! 按键面板：按钮网格布局与点击命中

use crate::core::Command;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const KEYPAD_COLUMNS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Action,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    /// Command name as accepted by [`Command::from_name`].
    pub command: &'static str,
    pub kind: ButtonKind,
    /// Columns taken in its row.
    pub span: u16,
}

impl KeypadButton {
    const fn new(label: &'static str, command: &'static str, kind: ButtonKind) -> Self {
        Self {
            label,
            command,
            kind,
            span: 1,
        }
    }

    const fn wide(self, span: u16) -> Self {
        Self { span, ..self }
    }

    pub fn command(&self) -> Command {
        Command::from_name(self.command)
    }
}

use ButtonKind::{Action, Digit, Equals, Operator};

const fn digit(label: &'static str, command: &'static str) -> KeypadButton {
    KeypadButton::new(label, command, Digit)
}

const fn op(label: &'static str, command: &'static str) -> KeypadButton {
    KeypadButton::new(label, command, Operator)
}

/// Operators show their typographic glyphs but append the ASCII operator.
pub static KEYPAD_ROWS: [&[KeypadButton]; 6] = [
    &[
        KeypadButton::new("AC", "all-clear", Action).wide(2),
        KeypadButton::new("C", "clear", Action),
        KeypadButton::new("⌫", "backspace", Action),
    ],
    &[
        op("(", "append:("),
        op(")", "append:)"),
        op("%", "append:%"),
        op("÷", "append:/"),
    ],
    &[
        digit("7", "append:7"),
        digit("8", "append:8"),
        digit("9", "append:9"),
        op("×", "append:*"),
    ],
    &[
        digit("4", "append:4"),
        digit("5", "append:5"),
        digit("6", "append:6"),
        op("−", "append:-"),
    ],
    &[
        digit("1", "append:1"),
        digit("2", "append:2"),
        digit("3", "append:3"),
        op("+", "append:+"),
    ],
    &[
        digit("0", "append:0").wide(2),
        digit(".", "append:."),
        KeypadButton::new("=", "equals", Equals),
    ],
];

/// Splits `area` into one rect per button, row by row.
pub fn layout(area: Rect) -> Vec<(Rect, &'static KeypadButton)> {
    let row_count = KEYPAD_ROWS.len() as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD_ROWS.iter().map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    let mut placed = Vec::with_capacity(24);
    for (row_area, buttons) in rows.iter().zip(KEYPAD_ROWS.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                buttons
                    .iter()
                    .map(|b| Constraint::Ratio(u32::from(b.span), u32::from(KEYPAD_COLUMNS))),
            )
            .split(*row_area);
        for (cell, button) in cells.iter().zip(buttons.iter()) {
            placed.push((*cell, button));
        }
    }
    placed
}

pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<&'static KeypadButton> {
    layout(area)
        .into_iter()
        .find(|(rect, _)| contains(*rect, column, row))
        .map(|(_, button)| button)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
#[path = "../../tests/unit/app/keypad.rs"]
mod tests;
