//! Expression evaluation pipeline.
//!
//! - sanitize.rs : operator glyphs, whitelist gate, percent rewrite
//! - lexer.rs    : tokens
//! - parser.rs   : recursive descent, evaluates while parsing
//! - format.rs   : result → text
//! - evaluate.rs : the full pipeline and its sentinel outcomes

mod error;
mod evaluate;
mod format;
mod lexer;
mod parser;
mod sanitize;

pub use error::EvalError;
pub use evaluate::{evaluate, evaluate_number, Evaluation, ERROR_TEXT, INFINITY_TEXT};
pub use format::format_number;
pub use sanitize::is_allowed_char;
