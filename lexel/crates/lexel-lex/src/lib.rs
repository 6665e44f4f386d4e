//! lexel-lex - Table-driven tokenizer engine
//!
//! This crate turns a byte buffer into a stream of tokens, driven entirely
//! by a declarative [`RuleTable`]: comment styles, string delimiters,
//! numeric-literal prefixes and suffixes, punctuation and keywords. There is
//! no grammar and no generated state machine; the same engine lexes a C-like
//! language, a Lisp or an assembler depending on the table it is given.
//!
//! # Example Usage
//!
//! ```
//! use lexel_lex::{IntegerRules, Lexer, RuleTable, TokenType, WordRule};
//!
//! const IDENT: TokenType = TokenType::new(0);
//! const INT: TokenType = TokenType::new(1);
//! const STRING: TokenType = TokenType::new(2);
//! const LPAREN: TokenType = TokenType::new(3);
//! const RPAREN: TokenType = TokenType::new(4);
//! const KW_DEF: TokenType = TokenType::new(5);
//!
//! let rules = RuleTable::builder()
//!     .line_comment("#")
//!     .line_string("\"", "\"", STRING)
//!     .escape_chars("\\")
//!     .integers(IntegerRules::new(INT).default_base(10))
//!     .punctuation("(", LPAREN)
//!     .punctuation(")", RPAREN)
//!     .keyword("def", KW_DEF)
//!     .default_word_type(IDENT)
//!     .word_rule(WordRule::Word)
//!     .build();
//!
//! let mut lexer = Lexer::new("def f(\"x\", 42) # done", &rules);
//! let first = lexer.next_token();
//! assert_eq!(first.token_type, KW_DEF);
//!
//! // The lexer is also an iterator over the remaining tokens.
//! let texts: Vec<&[u8]> = lexer.map(|token| token.text).collect();
//! assert_eq!(texts, [&b"f"[..], b"(", b"\"x\"", b",", b"42", b")"]);
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - byte cursor with line/column tracking and matching primitives
//! - [`token`] - token types, reserved types and lexical errors
//! - [`rules`] - rule tables and their builder
//! - [`hooks`] - extension points called while lexing
//! - [`lexer`] - the engine: dispatch, comments, strings, numbers, words
//! - [`config`] - rule tables loaded from TOML
//! - [`classify`] - byte classification
//!
//! # Errors
//!
//! Lexical errors never stop the stream. They surface as tokens with a
//! reserved error type (see [`TokenType::is_error`]) spanning the offending
//! text, and lexing resumes after them.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod cursor;
pub mod hooks;
pub mod lexer;
pub mod rules;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use config::{ConfigError, ConfigResult, RuleConfig};
pub use cursor::{Cursor, CursorSnapshot};
pub use hooks::LexerHooks;
pub use lexer::{Lexer, LexerStatus, StringMode};
pub use rules::{
    DelimPair, FloatPrefix, FloatRules, IntegerRules, KeywordMap, NumberPrefix, Pattern,
    RuleTable, RuleTableBuilder, StringDelim, WordRule,
};
pub use token::{error_message, LexError, Token, TokenType};
