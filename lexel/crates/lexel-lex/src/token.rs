//! Token definitions.
//!
//! A token is a typed span of the source buffer. Token types are plain
//! integers: non-negative values belong to the caller, negative values are
//! reserved for the engine (sentinels, line endings and errors). The
//! reserved values are fixed so that code sharing them with other tools
//! agrees on their meaning.

use std::fmt;

use lexel_util::{Location, Span};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The type of a token.
///
/// # Example
///
/// ```
/// use lexel_lex::TokenType;
///
/// const IDENT: TokenType = TokenType::new(1);
///
/// assert!(!IDENT.is_reserved());
/// assert!(TokenType::ERROR_UNCLOSED_STRING.is_error());
/// assert_eq!(TokenType::END.raw(), -1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenType(i32);

impl TokenType {
    /// End of the token stream.
    pub const END: TokenType = TokenType(-1);
    /// A token that has not been produced by the lexer.
    pub const UNINITIALIZED: TokenType = TokenType(-2);
    /// End of the token stream, forced by a hook or caller.
    pub const END_ABNORMAL: TokenType = TokenType(-3);
    /// A line terminator, when line-ending tokens are enabled.
    pub const LINE_ENDING: TokenType = TokenType(-4);
    /// Marker for "no token emitted yet".
    pub const NO_PREVIOUS: TokenType = TokenType(-5);

    /// Generic error; every type at or below this one is an error.
    pub const ERROR_GENERIC: TokenType = TokenType(-16);
    /// Input ended where more was required.
    pub const ERROR_UNEXPECTED_END: TokenType = TokenType(-17);
    /// A block comment was never closed.
    pub const ERROR_UNCLOSED_COMMENT: TokenType = TokenType(-18);
    /// A string literal was never closed.
    pub const ERROR_UNCLOSED_STRING: TokenType = TokenType(-19);
    /// An integer prefix with no digits after it.
    pub const ERROR_INVALID_INTEGER: TokenType = TokenType(-20);
    /// A float prefix with no digits after it.
    pub const ERROR_INVALID_FLOAT: TokenType = TokenType(-21);

    /// Creates a caller-defined token type.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is negative; negative types are reserved.
    pub const fn new(kind: i32) -> Self {
        assert!(kind >= 0, "negative token types are reserved for the lexer");
        TokenType(kind)
    }

    /// Creates a caller-defined token type, or `None` if `kind` is negative.
    pub const fn checked(kind: i32) -> Option<Self> {
        if kind >= 0 {
            Some(TokenType(kind))
        } else {
            None
        }
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns true for engine-reserved (negative) types.
    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.0 < 0
    }

    /// Returns true for error types.
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 <= Self::ERROR_GENERIC.0
    }

    /// Returns true for either end-of-stream sentinel.
    #[inline]
    pub const fn is_end(self) -> bool {
        self.0 == Self::END.0 || self.0 == Self::END_ABNORMAL.0
    }

    fn reserved_name(self) -> Option<&'static str> {
        let name = match self {
            Self::END => "END",
            Self::UNINITIALIZED => "UNINITIALIZED",
            Self::END_ABNORMAL => "END_ABNORMAL",
            Self::LINE_ENDING => "LINE_ENDING",
            Self::NO_PREVIOUS => "NO_PREVIOUS",
            Self::ERROR_GENERIC => "ERROR_GENERIC",
            Self::ERROR_UNEXPECTED_END => "ERROR_UNEXPECTED_END",
            Self::ERROR_UNCLOSED_COMMENT => "ERROR_UNCLOSED_COMMENT",
            Self::ERROR_UNCLOSED_STRING => "ERROR_UNCLOSED_STRING",
            Self::ERROR_INVALID_INTEGER => "ERROR_INVALID_INTEGER",
            Self::ERROR_INVALID_FLOAT => "ERROR_INVALID_FLOAT",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Debug for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reserved_name() {
            Some(name) => write!(f, "TokenType::{name}"),
            None => write!(f, "TokenType({})", self.0),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reserved_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Lexical errors.
///
/// An error is recorded on the lexer when detected and surfaces as the type
/// of the next token it finalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    /// Catch-all error
    #[error("generic lexer error")]
    Generic,

    /// Input ended where more was required
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A block comment was never closed
    #[error("unclosed block comment")]
    UnclosedComment,

    /// A string literal was never closed
    #[error("unclosed string literal")]
    UnclosedString,

    /// A numeric prefix was not followed by any digits
    #[error("invalid integer literal")]
    InvalidInteger,

    /// A float was missing its digits
    #[error("invalid float literal")]
    InvalidFloat,
}

impl LexError {
    /// The reserved token type this error surfaces as.
    pub const fn token_type(self) -> TokenType {
        match self {
            LexError::Generic => TokenType::ERROR_GENERIC,
            LexError::UnexpectedEnd => TokenType::ERROR_UNEXPECTED_END,
            LexError::UnclosedComment => TokenType::ERROR_UNCLOSED_COMMENT,
            LexError::UnclosedString => TokenType::ERROR_UNCLOSED_STRING,
            LexError::InvalidInteger => TokenType::ERROR_INVALID_INTEGER,
            LexError::InvalidFloat => TokenType::ERROR_INVALID_FLOAT,
        }
    }

    /// The error a token type stands for.
    ///
    /// Error types without a specific meaning map to [`LexError::Generic`];
    /// non-error types return `None`.
    pub fn from_token_type(token_type: TokenType) -> Option<Self> {
        if !token_type.is_error() {
            return None;
        }
        let error = match token_type {
            TokenType::ERROR_UNEXPECTED_END => LexError::UnexpectedEnd,
            TokenType::ERROR_UNCLOSED_COMMENT => LexError::UnclosedComment,
            TokenType::ERROR_UNCLOSED_STRING => LexError::UnclosedString,
            TokenType::ERROR_INVALID_INTEGER => LexError::InvalidInteger,
            TokenType::ERROR_INVALID_FLOAT => LexError::InvalidFloat,
            _ => LexError::Generic,
        };
        Some(error)
    }
}

/// Human-readable message for an error token type.
///
/// # Example
///
/// ```
/// use lexel_lex::{error_message, TokenType};
///
/// assert_eq!(
///     error_message(TokenType::ERROR_UNCLOSED_COMMENT),
///     Some("unclosed block comment"),
/// );
/// assert_eq!(error_message(TokenType::new(3)), None);
/// ```
pub fn error_message(token_type: TokenType) -> Option<&'static str> {
    let message = match LexError::from_token_type(token_type)? {
        LexError::Generic => "generic lexer error",
        LexError::UnexpectedEnd => "unexpected end of input",
        LexError::UnclosedComment => "unclosed block comment",
        LexError::UnclosedString => "unclosed string literal",
        LexError::InvalidInteger => "invalid integer literal",
        LexError::InvalidFloat => "invalid float literal",
    };
    Some(message)
}

/// A lexical token: a typed span borrowed from the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// The bytes of the token.
    pub text: &'src [u8],
    /// Byte range and start location.
    pub span: Span,
    /// What kind of token this is.
    pub token_type: TokenType,
}

impl<'src> Token<'src> {
    /// Returns the token text as a string, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.text).ok()
    }

    /// Returns the line and column where the token starts.
    pub fn location(&self) -> Location {
        self.span.location
    }

    /// Returns true if this is an error token.
    pub fn is_error(&self) -> bool {
        self.token_type.is_error()
    }

    /// Returns true if this is an end-of-stream sentinel.
    pub fn is_end(&self) -> bool {
        self.token_type.is_end()
    }

    /// Returns the error this token reports, if any.
    pub fn error(&self) -> Option<LexError> {
        LexError::from_token_type(self.token_type)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            self.span.location,
            self.token_type,
            self.text.escape_ascii()
        )
    }
}
