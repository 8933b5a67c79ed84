use std::fmt;

use super::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::StarStar => f.write_str("'**'"),
            Token::Slash => f.write_str("'/'"),
            Token::Percent => f.write_str("'%'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
        }
    }
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

pub fn tokenize(src: &str) -> Result<Vec<Spanned>, EvalError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::with_capacity(src.len());
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        let offset = pos;
        let token = match b {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                let (token, end) = lex_number(src, pos)?;
                pos = end;
                tokens.push(Spanned { token, offset });
                continue;
            }
            // `++` and `--` with nothing between them are rejected, not stacked.
            b'+' | b'-' if bytes.get(pos + 1) == Some(&b) => {
                return Err(EvalError::UnexpectedToken {
                    found: format!("'{}{}'", b as char, b as char),
                    offset,
                });
            }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 1;
                Token::StarStar
            }
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'%' => Token::Percent,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            _ => {
                // Whitespace beyond ASCII passes the whitelist; skip it whole.
                let ch = src[pos..].chars().next().ok_or(EvalError::UnexpectedEnd)?;
                if ch.is_whitespace() {
                    pos += ch.len_utf8();
                    continue;
                }
                return Err(EvalError::UnexpectedToken {
                    found: format!("{:?}", ch),
                    offset,
                });
            }
        };
        pos += 1;
        tokens.push(Spanned { token, offset });
    }

    Ok(tokens)
}

/// `DIGITS ('.' DIGITS?)? | '.' DIGITS`, where the integer part is `0` or
/// has no leading zero.
fn lex_number(src: &str, start: usize) -> Result<(Token, usize), EvalError> {
    let bytes = src.as_bytes();
    let mut end = start;
    let mut int_digits = 0;
    let mut frac_digits = 0;

    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        int_digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            frac_digits += 1;
        }
    }

    let literal = &src[start..end];
    let leading_zero = int_digits > 1 && bytes[start] == b'0';
    if leading_zero || (int_digits == 0 && frac_digits == 0) {
        return Err(EvalError::InvalidNumber {
            literal: literal.to_string(),
            offset: start,
        });
    }

    literal
        .parse::<f64>()
        .map(|n| (Token::Number(n), end))
        .map_err(|_| EvalError::InvalidNumber {
            literal: literal.to_string(),
            offset: start,
        })
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/calc/lexer.rs"]
mod tests;
