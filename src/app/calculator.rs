//! 计算器视图：按键/鼠标 → 命令 → Store，渲染显示区与按键面板

use crate::app::keypad::{self, ButtonKind, KeypadButton};
use crate::app::theme::UiTheme;
use crate::core::event::{
    InputEvent, Key, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crate::core::Command;
use crate::kernel::calc::ERROR_TEXT;
use crate::kernel::services::adapters::KeybindingService;
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action, Effect, Store};
use crate::tui::view::{EventResult, View};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const TITLE: &str = " zcalc ";
const DISPLAY_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 1;
const FOOTER_HINT: &str = "Enter = · Esc AC · Ctrl+Q quit";
const MIN_KEYPAD_HEIGHT: u16 = 6;

pub struct Calculator {
    store: Store,
    keybindings: KeybindingService,
    theme: UiTheme,
    show_keypad: bool,
    keypad_area: Option<Rect>,
}

impl Calculator {
    pub fn new(settings: &Settings) -> Self {
        let mut keybindings = KeybindingService::new();
        let applied = keybindings.apply_rules(&settings.keybindings);
        if applied > 0 {
            tracing::info!(applied, "keybinding rules applied");
        }
        Self::with_parts(
            Store::default(),
            keybindings,
            UiTheme::from_settings(&settings.theme),
            settings.show_keypad,
        )
    }

    pub fn with_parts(
        store: Store,
        keybindings: KeybindingService,
        theme: UiTheme,
        show_keypad: bool,
    ) -> Self {
        Self {
            store,
            keybindings,
            theme,
            show_keypad,
            keypad_area: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut UiTheme {
        &mut self.theme
    }

    /// Keypad rect from the last render; `None` when it was not drawn.
    pub fn keypad_area(&self) -> Option<Rect> {
        self.keypad_area
    }

    /// Idle tick from the event loop; returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.store.dispatch(Action::Tick).state_changed
    }

    fn run_command(&mut self, command: Command) -> EventResult {
        let result = self.store.dispatch(Action::RunCommand(command));
        if result.effects.contains(&Effect::Quit) {
            return EventResult::Quit;
        }
        EventResult::Consumed
    }

    fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }
        let key = Key::from(*event);
        match self.keybindings.resolve(&key).cloned() {
            Some(command) => self.run_command(command),
            None => EventResult::Ignored,
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Ignored;
        }
        let Some(area) = self.keypad_area else {
            return EventResult::Ignored;
        };
        match keypad::hit_test(area, event.column, event.row) {
            Some(button) => self.run_command(button.command()),
            None => EventResult::Ignored,
        }
    }

    fn render_display(&self, frame: &mut Frame, area: Rect) {
        let display = self.store.display();
        let errored = self.store.state().is_errored();
        let preview_failed = !errored && display.preview.ends_with(ERROR_TEXT);

        let expression_fg = if errored {
            self.theme.error_fg
        } else {
            self.theme.expression_fg
        };
        let preview_fg = if preview_failed {
            self.theme.error_fg
        } else {
            self.theme.preview_fg
        };

        let width = usize::from(area.width.saturating_sub(2));
        let lines = vec![
            Line::from(Span::styled(
                tail_to_width(&display.expression, width),
                Style::default()
                    .fg(expression_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                tail_to_width(&display.preview, width),
                Style::default().fg(preview_fg),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(Span::styled(TITLE, Style::default().fg(self.theme.header_fg)));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Right)
                .block(block),
            area,
        );
    }

    fn render_keypad(&self, frame: &mut Frame, area: Rect) {
        for (cell, button) in keypad::layout(area) {
            self.render_button(frame, cell, button);
        }
    }

    fn render_button(&self, frame: &mut Frame, cell: Rect, button: &KeypadButton) {
        let style = self.button_style(button.kind);
        // One column of gap between neighbours.
        let cell = Rect {
            width: if cell.width > 2 { cell.width - 1 } else { cell.width },
            ..cell
        };
        frame.render_widget(Block::default().style(style), cell);

        let label_row = Rect {
            y: cell.y + cell.height.saturating_sub(1) / 2,
            height: cell.height.min(1),
            ..cell
        };
        frame.render_widget(
            Paragraph::new(button.label)
                .style(style)
                .alignment(Alignment::Center),
            label_row,
        );
    }

    fn button_style(&self, kind: ButtonKind) -> Style {
        let base = Style::default().bg(self.theme.button_bg);
        match kind {
            ButtonKind::Digit => base.fg(self.theme.button_fg),
            ButtonKind::Operator => base.fg(self.theme.operator_fg),
            ButtonKind::Action => base.fg(self.theme.action_fg),
            ButtonKind::Equals => Style::default()
                .fg(self.theme.button_fg)
                .bg(self.theme.equals_bg)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                FOOTER_HINT,
                Style::default().fg(self.theme.muted_fg),
            ))
            .alignment(Alignment::Center),
            area,
        );
    }
}

impl View for Calculator {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key_event) => self.handle_key(key_event),
            InputEvent::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            InputEvent::Resize(_, _) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let display_area = chunks[0];
        let keypad_area = chunks[1];
        let footer_area = chunks[2];

        self.render_display(frame, display_area);
        self.render_footer(frame, footer_area);

        if self.show_keypad && keypad_area.height >= MIN_KEYPAD_HEIGHT {
            self.render_keypad(frame, keypad_area);
            self.keypad_area = Some(keypad_area);
        } else {
            self.keypad_area = None;
        }
    }
}

/// Keeps the last `width` chars, marking the cut with `…`.
fn tail_to_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let keep = width - 1;
    let mut out = String::with_capacity(keep + 3);
    out.push('…');
    out.extend(text.chars().skip(count - keep));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/app/calculator.rs"]
mod tests;
