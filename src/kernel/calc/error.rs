use thiserror::Error;

/// Why an expression could not be evaluated.
///
/// Offsets are byte offsets into the string the failing stage saw: the
/// normalized input for [`EvalError::DisallowedChar`], the percent-rewritten
/// text for everything else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("disallowed character {ch:?} at {offset}")]
    DisallowedChar { ch: char, offset: usize },
    #[error("invalid number literal {literal:?} at {offset}")]
    InvalidNumber { literal: String, offset: usize },
    #[error("unexpected {found} at {offset}")]
    UnexpectedToken { found: String, offset: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unbalanced parenthesis at {offset}")]
    UnbalancedParen { offset: usize },
}
