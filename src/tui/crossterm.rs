//! crossterm → `core::event` conversion.

use crossterm::event as ct;

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Converts a terminal event. Key releases are dropped; terminals with the
/// kitty protocol report them and the calculator only acts on presses.
pub fn into_input_event(event: ct::Event) -> Option<InputEvent> {
    match event {
        ct::Event::Key(key) if key.kind == ct::KeyEventKind::Release => None,
        ct::Event::Key(key) => Some(InputEvent::Key(into_key_event(key))),
        ct::Event::Mouse(mouse) => Some(InputEvent::Mouse(into_mouse_event(mouse))),
        ct::Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        ct::Event::FocusGained => Some(InputEvent::FocusGained),
        ct::Event::FocusLost => Some(InputEvent::FocusLost),
        ct::Event::Paste(text) => Some(InputEvent::Paste(text)),
    }
}

pub fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: into_key_code(event.code),
        modifiers: into_key_modifiers(event.modifiers),
        kind: match event.kind {
            ct::KeyEventKind::Press => KeyEventKind::Press,
            ct::KeyEventKind::Release => KeyEventKind::Release,
            ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        },
    }
}

fn into_key_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    [
        (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (ct::KeyModifiers::ALT, KeyModifiers::ALT),
        (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(native, _)| mods.contains(*native))
    .fold(KeyModifiers::NONE, |acc, (_, ours)| acc | ours)
}

fn into_key_code(code: ct::KeyCode) -> KeyCode {
    match code {
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::F(n) => KeyCode::F(n),
        _ => KeyCode::Unknown,
    }
}

pub fn into_mouse_event(event: ct::MouseEvent) -> MouseEvent {
    MouseEvent {
        kind: into_mouse_event_kind(event.kind),
        column: event.column,
        row: event.row,
        modifiers: into_key_modifiers(event.modifiers),
    }
}

fn into_mouse_button(button: ct::MouseButton) -> MouseButton {
    match button {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

fn into_mouse_event_kind(kind: ct::MouseEventKind) -> MouseEventKind {
    match kind {
        ct::MouseEventKind::Down(button) => MouseEventKind::Down(into_mouse_button(button)),
        ct::MouseEventKind::Up(button) => MouseEventKind::Up(into_mouse_button(button)),
        ct::MouseEventKind::Drag(button) => MouseEventKind::Drag(into_mouse_button(button)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        ct::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
        ct::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
