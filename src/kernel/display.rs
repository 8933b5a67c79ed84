//! Display projection: state → the two text lines a frontend shows.
//!
//! Pure function of [`CalcState`]; frontends call it after every dispatch that
//! reports a state change.

use super::calc::ERROR_TEXT;
use super::state::CalcState;

pub const EMPTY_EXPRESSION_TEXT: &str = "0";
pub const PREVIEW_PREFIX: &str = "= ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    /// Expression line: the expression, `0` when empty, `Err` after a failed commit.
    pub expression: String,
    /// Preview line, always prefixed with `= `.
    pub preview: String,
}

pub fn render_display(state: &CalcState) -> Display {
    if state.is_errored() {
        return Display {
            expression: ERROR_TEXT.to_string(),
            preview: format!("{}{}", PREVIEW_PREFIX, EMPTY_EXPRESSION_TEXT),
        };
    }

    let expression = if state.expression().is_empty() {
        EMPTY_EXPRESSION_TEXT.to_string()
    } else {
        state.expression().to_string()
    };

    Display {
        expression,
        preview: format!("{}{}", PREVIEW_PREFIX, state.evaluate()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/display.rs"]
mod tests;
