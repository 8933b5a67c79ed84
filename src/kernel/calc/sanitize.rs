//! Input sanitization ahead of tokenizing.
//!
//! Three passes, always in this order: unicode operator normalization, the
//! character whitelist gate, then the percent rewrite.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use super::error::EvalError;

lazy_static! {
    /// `<number>%` with no sign: integer or decimal with digits on both sides of the dot.
    static ref PERCENT_LITERAL: Regex = Regex::new(r"([0-9]+(?:\.[0-9]+)?)%").unwrap();
}

/// Keypad glyphs and their ASCII operator equivalents.
const OPERATOR_GLYPHS: [(char, char); 3] = [('×', '*'), ('÷', '/'), ('−', '-')];

pub fn normalize_operators(src: &str) -> Cow<'_, str> {
    if !src.chars().any(|c| OPERATOR_GLYPHS.iter().any(|(g, _)| *g == c)) {
        return Cow::Borrowed(src);
    }

    let normalized = src
        .chars()
        .map(|c| {
            OPERATOR_GLYPHS
                .iter()
                .find(|(glyph, _)| *glyph == c)
                .map_or(c, |(_, ascii)| *ascii)
        })
        .collect();
    Cow::Owned(normalized)
}

pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%')
        || c.is_whitespace()
}

/// Rejects the first character outside `[0-9+\-*/().%\s]`.
pub fn check_allowed(src: &str) -> Result<(), EvalError> {
    match src.char_indices().find(|(_, c)| !is_allowed_char(*c)) {
        Some((offset, ch)) => Err(EvalError::DisallowedChar { ch, offset }),
        None => Ok(()),
    }
}

/// Rewrites every `n%` into `(n/100)` in a single non-overlapping pass.
///
/// Matches are taken from the input only; a rewritten group is never scanned
/// again, so `10%%` becomes `(10/100)%` and the trailing `%` is left for the
/// parser to treat as a binary operator.
pub fn rewrite_percent(src: &str) -> Cow<'_, str> {
    PERCENT_LITERAL.replace_all(src, "(${1}/100)")
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/calc/sanitize.rs"]
mod tests;
