//! Recursive-descent evaluator over [`Token`]s.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') signed | power
//! signed  := ('+' | '-') signed | primary     // never the base of '**'
//! power   := primary ('**' unary)?
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Values are computed while parsing; there is no intermediate tree. IEEE
//! semantics are kept throughout, so `1/0` yields `inf` and `0/0` yields `NaN`
//! rather than an error.

use super::error::EvalError;
use super::lexer::{Spanned, Token};

pub struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Spanned]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses the whole token stream as one expression.
    pub fn parse(mut self) -> Result<f64, EvalError> {
        let value = self.parse_expr()?;
        match self.peek() {
            None => Ok(value),
            Some(Spanned {
                token: Token::RParen,
                offset,
            }) => Err(EvalError::UnbalancedParen { offset: *offset }),
            Some(spanned) => Err(unexpected(spanned)),
        }
    }

    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<Token> {
        self.peek().map(|s| s.token)
    }

    fn advance(&mut self) -> Option<&Spanned> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn parse_expr(&mut self) -> Result<f64, EvalError> {
        let mut left = self.parse_term()?;

        while let Some(tok) = self.peek_token() {
            match tok {
                Token::Plus => {
                    self.advance();
                    left += self.parse_term()?;
                }
                Token::Minus => {
                    self.advance();
                    left -= self.parse_term()?;
                }
                _ => break,
            }
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<f64, EvalError> {
        let mut left = self.parse_unary()?;

        while let Some(tok) = self.peek_token() {
            match tok {
                Token::Star => {
                    self.advance();
                    left *= self.parse_unary()?;
                }
                Token::Slash => {
                    self.advance();
                    left /= self.parse_unary()?;
                }
                Token::Percent => {
                    self.advance();
                    left %= self.parse_unary()?;
                }
                _ => break,
            }
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<f64, EvalError> {
        match self.peek_token() {
            Some(Token::Minus | Token::Plus) => self.parse_signed(),
            _ => self.parse_power(),
        }
    }

    /// A sign and its operand. `-2**2` is ambiguous and rejected; `(-2)**2`
    /// and `-(2**2)` are not.
    fn parse_signed(&mut self) -> Result<f64, EvalError> {
        let value = match self.peek_token() {
            Some(Token::Minus) => {
                self.advance();
                -self.parse_signed()?
            }
            Some(Token::Plus) => {
                self.advance();
                self.parse_signed()?
            }
            _ => self.parse_primary()?,
        };

        match self.peek() {
            Some(spanned) if spanned.token == Token::StarStar => Err(unexpected(spanned)),
            _ => Ok(value),
        }
    }

    /// Right-associative; the exponent may carry its own sign.
    fn parse_power(&mut self) -> Result<f64, EvalError> {
        let base = self.parse_primary()?;

        if let Some(Token::StarStar) = self.peek_token() {
            self.advance();
            let exp = self.parse_unary()?;
            Ok(base.powf(exp))
        } else {
            Ok(base)
        }
    }

    fn parse_primary(&mut self) -> Result<f64, EvalError> {
        let spanned = *self.advance().ok_or(EvalError::UnexpectedEnd)?;
        match spanned.token {
            Token::Number(n) => Ok(n),
            Token::LParen => {
                let value = self.parse_expr()?;
                match self.advance() {
                    Some(Spanned {
                        token: Token::RParen,
                        ..
                    }) => Ok(value),
                    Some(other) => Err(unexpected(other)),
                    None => Err(EvalError::UnbalancedParen {
                        offset: spanned.offset,
                    }),
                }
            }
            _ => Err(unexpected(&spanned)),
        }
    }
}

fn unexpected(spanned: &Spanned) -> EvalError {
    EvalError::UnexpectedToken {
        found: spanned.token.to_string(),
        offset: spanned.offset,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/calc/parser.rs"]
mod tests;
