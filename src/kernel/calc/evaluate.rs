use std::fmt;

use super::error::EvalError;
use super::format::format_number;
use super::lexer::tokenize;
use super::parser::Parser;
use super::sanitize::{check_allowed, normalize_operators, rewrite_percent};

pub const ERROR_TEXT: &str = "Err";
pub const INFINITY_TEXT: &str = "∞";

/// Outcome of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// A finite number.
    Value(f64),
    /// Well-formed expression with a non-finite result (`1/0`, `0/0`).
    Infinite,
    /// Disallowed input or a syntax error.
    Error(EvalError),
}

impl Evaluation {
    pub fn is_error(&self) -> bool {
        matches!(self, Evaluation::Error(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Evaluation::Infinite)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Evaluation::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&EvalError> {
        match self {
            Evaluation::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Prints the value as it appears on the preview line and as a committed result.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Value(v) => f.write_str(&format_number(*v)),
            Evaluation::Infinite => f.write_str(INFINITY_TEXT),
            Evaluation::Error(_) => f.write_str(ERROR_TEXT),
        }
    }
}

/// Evaluates a calculator expression. Never panics and never fails outward:
/// every problem is folded into [`Evaluation::Error`].
pub fn evaluate(expression: &str) -> Evaluation {
    if expression.is_empty() {
        return Evaluation::Value(0.0);
    }

    match evaluate_number(expression) {
        Ok(v) if v.is_finite() => Evaluation::Value(v),
        Ok(_) => Evaluation::Infinite,
        Err(err) => {
            tracing::trace!(expression, error = %err, "evaluation failed");
            Evaluation::Error(err)
        }
    }
}

/// The raw pipeline: normalize, whitelist, rewrite percents, parse.
pub fn evaluate_number(expression: &str) -> Result<f64, EvalError> {
    let normalized = normalize_operators(expression);
    check_allowed(&normalized)?;
    let rewritten = rewrite_percent(&normalized);
    let tokens = tokenize(&rewritten)?;
    Parser::new(&tokens).parse()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/calc/evaluate.rs"]
mod tests;
