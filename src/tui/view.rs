use crate::core::event::InputEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }

    /// Whether the frame should be redrawn after this event.
    pub fn needs_redraw(&self) -> bool {
        !self.is_ignored()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/view.rs"]
mod tests;
