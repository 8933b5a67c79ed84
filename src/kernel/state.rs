use super::calc::{evaluate, Evaluation};

/// Calculator state owned by the [`Store`](super::Store).
///
/// All mutators return `true` when the observable state changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcState {
    expression: String,
    /// Set by a failed commit; the next mutation clears it.
    errored: bool,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expression(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            errored: false,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn is_errored(&self) -> bool {
        self.errored
    }

    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.expression)
    }

    pub fn set_expression(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let changed = self.errored || self.expression != value;
        self.expression = value;
        self.errored = false;
        changed
    }

    pub fn append(&mut self, token: char) -> bool {
        if token == '.' && self.trailing_number_run().contains('.') {
            return false;
        }

        if self.expression == "0" && token.is_ascii_digit() {
            return self.set_expression(token.to_string());
        }

        let mut next = String::with_capacity(self.expression.len() + token.len_utf8());
        next.push_str(&self.expression);
        next.push(token);
        self.set_expression(next)
    }

    pub fn backspace(&mut self) -> bool {
        let mut next = self.expression.clone();
        next.pop();
        self.set_expression(next)
    }

    pub fn clear(&mut self) -> bool {
        self.set_expression(String::new())
    }

    /// Same reset as [`clear`](Self::clear); an empty expression always previews `= 0`.
    pub fn all_clear(&mut self) -> bool {
        self.set_expression(String::new())
    }

    /// Replaces the expression with its result, or resets to empty with the
    /// error flash raised when evaluation fails.
    pub fn commit(&mut self) -> bool {
        match self.evaluate() {
            Evaluation::Error(err) => {
                tracing::debug!(expression = %self.expression, error = %err, "commit failed");
                self.expression.clear();
                self.errored = true;
                true
            }
            result => self.set_expression(result.to_string()),
        }
    }

    /// Last maximal run of `[0-9.]` at the end of the expression.
    fn trailing_number_run(&self) -> &str {
        self.expression
            .rsplit(|c: char| !(c.is_ascii_digit() || c == '.'))
            .next()
            .unwrap_or("")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
