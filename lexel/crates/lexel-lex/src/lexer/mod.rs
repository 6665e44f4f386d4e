//! Lexer module.
//!
//! The engine is split into focused components:
//! - `core` - the Lexer struct, token dispatch and lifecycle
//! - `matching` - rule-table lookups at the cursor
//! - `comment` - whitespace and comment skipping
//! - `string` - string literal sub-lexer
//! - `number` - integer and float sub-lexers
//! - `word` - words and keywords

mod comment;
mod core;
mod matching;
mod number;
mod string;
mod word;

#[cfg(test)]
pub(crate) mod testing;

pub use self::core::{Lexer, LexerStatus};
pub use self::string::StringMode;
