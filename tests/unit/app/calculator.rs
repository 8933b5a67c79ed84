use super::*;
use crate::core::event::{KeyCode, KeyModifiers};
use crate::kernel::services::ports::KeybindingRule;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn calculator() -> Calculator {
    Calculator::new(&Settings::default())
}

fn draw(calc: &mut Calculator, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| {
            let area = frame.area();
            calc.render(frame, area);
        })
        .expect("draw");
    buffer_lines(terminal.backend().buffer())
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn display_line(lines: &[String], row: usize) -> String {
    lines[row].trim_matches('│').trim().to_string()
}

fn press(calc: &mut Calculator, code: KeyCode, modifiers: KeyModifiers) -> EventResult {
    calc.handle_input(&InputEvent::Key(KeyEvent::new(code, modifiers)))
}

fn type_str(calc: &mut Calculator, text: &str) {
    for ch in text.chars() {
        press(calc, KeyCode::Char(ch), KeyModifiers::NONE);
    }
}

fn click(calc: &mut Calculator, column: u16, row: u16) -> EventResult {
    calc.handle_input(&InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

#[test]
fn initial_render_shows_zero_and_preview() {
    let mut calc = calculator();
    let lines = draw(&mut calc, 24, 20);
    assert!(lines[0].contains("zcalc"));
    assert_eq!(display_line(&lines, 1), "0");
    assert_eq!(display_line(&lines, 2), "= 0");
}

#[test]
fn typing_updates_both_lines() {
    let mut calc = calculator();
    type_str(&mut calc, "12+3");
    let lines = draw(&mut calc, 24, 20);
    assert_eq!(display_line(&lines, 1), "12+3");
    assert_eq!(display_line(&lines, 2), "= 15");
}

#[test]
fn failed_commit_renders_err() {
    let mut calc = calculator();
    type_str(&mut calc, "5/");
    assert_eq!(
        press(&mut calc, KeyCode::Enter, KeyModifiers::NONE),
        EventResult::Consumed
    );
    let lines = draw(&mut calc, 24, 20);
    assert_eq!(display_line(&lines, 1), "Err");
    assert_eq!(display_line(&lines, 2), "= 0");
}

#[test]
fn shifted_operator_keys_still_append() {
    let mut calc = calculator();
    press(&mut calc, KeyCode::Char('2'), KeyModifiers::NONE);
    press(&mut calc, KeyCode::Char('*'), KeyModifiers::SHIFT);
    press(&mut calc, KeyCode::Char('4'), KeyModifiers::NONE);
    assert_eq!(calc.store().display().preview, "= 8");
}

#[test]
fn ctrl_q_quits_and_unbound_keys_are_ignored() {
    let mut calc = calculator();
    assert_eq!(
        press(&mut calc, KeyCode::Char('q'), KeyModifiers::NONE),
        EventResult::Ignored
    );
    assert_eq!(
        press(&mut calc, KeyCode::Char('q'), KeyModifiers::CONTROL),
        EventResult::Quit
    );
}

#[test]
fn key_release_is_ignored() {
    let mut calc = calculator();
    let mut event = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
    event.kind = KeyEventKind::Release;
    assert_eq!(
        calc.handle_input(&InputEvent::Key(event)),
        EventResult::Ignored
    );
    assert_eq!(calc.store().state().expression(), "");
}

#[test]
fn keypad_labels_are_drawn() {
    let mut calc = calculator();
    let lines = draw(&mut calc, 24, 20);
    let text = lines.join("\n");
    for label in ["AC", "⌫", "÷", "×", "−", "="] {
        assert!(text.contains(label), "missing {label}");
    }
}

#[test]
fn clicking_keypad_buttons_dispatches_commands() {
    let mut calc = calculator();
    draw(&mut calc, 24, 20);
    let area = calc.keypad_area().expect("keypad drawn");

    let rect_of = |label: &str| {
        keypad::layout(area)
            .into_iter()
            .find(|(_, button)| button.label == label)
            .map(|(rect, _)| rect)
            .expect("button present")
    };

    for label in ["7", "×", "6", "="] {
        let rect = rect_of(label);
        assert_eq!(click(&mut calc, rect.x, rect.y), EventResult::Consumed);
    }
    assert_eq!(calc.store().state().expression(), "42");
}

#[test]
fn clicks_outside_keypad_are_ignored() {
    let mut calc = calculator();
    draw(&mut calc, 24, 20);
    assert_eq!(click(&mut calc, 1, 1), EventResult::Ignored);
}

#[test]
fn hidden_keypad_ignores_clicks() {
    let settings = Settings {
        show_keypad: false,
        ..Settings::default()
    };
    let mut calc = Calculator::new(&settings);
    draw(&mut calc, 24, 20);
    assert_eq!(calc.keypad_area(), None);
    assert_eq!(click(&mut calc, 5, 10), EventResult::Ignored);
}

#[test]
fn tiny_terminal_skips_keypad() {
    let mut calc = calculator();
    let lines = draw(&mut calc, 24, 8);
    assert_eq!(calc.keypad_area(), None);
    assert_eq!(display_line(&lines, 1), "0");
}

#[test]
fn long_expressions_keep_their_tail() {
    let mut calc = calculator();
    type_str(&mut calc, "1234567890+1234567890");
    let lines = draw(&mut calc, 12, 20);
    let shown = display_line(&lines, 1);
    assert!(shown.starts_with('…'));
    assert!(shown.ends_with("567890"));
}

#[test]
fn settings_rules_rebind_keys() {
    let settings = Settings {
        keybindings: vec![KeybindingRule {
            key: "x".to_string(),
            command: "append:*".to_string(),
        }],
        ..Settings::default()
    };
    let mut calc = Calculator::new(&settings);
    type_str(&mut calc, "3x3");
    assert_eq!(calc.store().display().preview, "= 9");
}

#[test]
fn tail_to_width_marks_truncation() {
    assert_eq!(tail_to_width("12345", 5), "12345");
    assert_eq!(tail_to_width("12345", 3), "…45");
    assert_eq!(tail_to_width("12345", 0), "");
}

#[test]
fn idle_tick_needs_no_redraw() {
    let mut calc = calculator();
    type_str(&mut calc, "1+1");
    assert!(!calc.tick());
    assert_eq!(calc.store().state().expression(), "1+1");
}
