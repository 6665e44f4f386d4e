//! Core lexer implementation.
//!
//! This module contains the Lexer struct, its lifecycle and the per-token
//! dispatch. The sub-lexers live in the sibling modules.

use std::ffi::CStr;

use lexel_util::{Location, Span};
use tracing::{debug, trace};

use crate::cursor::{Cursor, CursorSnapshot};
use crate::rules::RuleTable;
use crate::token::{LexError, Token, TokenType};

use super::string::StringMode;

/// Where a lexer is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexerStatus {
    /// Between tokens.
    #[default]
    Ready,
    /// Inside a token.
    Lexing,
    /// END has been emitted.
    Finished,
    /// The stream was stopped early.
    FinishedAbnormal,
}

impl LexerStatus {
    /// Returns true for both finished states.
    pub fn is_finished(self) -> bool {
        matches!(self, LexerStatus::Finished | LexerStatus::FinishedAbnormal)
    }
}

/// Table-driven lexer.
///
/// A lexer borrows its source buffer and its rule table; it owns nothing
/// but its cursor and a little state, so creating one is cheap. Tokens
/// borrow the source, not the lexer, and stay valid after the lexer is
/// gone.
///
/// # Example
///
/// ```
/// use lexel_lex::{IntegerRules, Lexer, RuleTable, TokenType};
///
/// const WORD: TokenType = TokenType::new(0);
/// const INT: TokenType = TokenType::new(1);
///
/// let rules = RuleTable::builder()
///     .integers(IntegerRules::new(INT).default_base(10))
///     .default_word_type(WORD)
///     .build();
/// let mut lexer = Lexer::new("x 42", &rules);
///
/// assert_eq!(lexer.next_token().token_type, WORD);
/// let int = lexer.next_token();
/// assert_eq!((int.token_type, int.text), (INT, &b"42"[..]));
/// assert_eq!(lexer.next_token().token_type, TokenType::END);
/// assert!(lexer.is_finished());
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'src, 'rules> {
    /// Byte cursor over the source.
    pub(crate) cursor: Cursor<'src>,

    /// Where the token being lexed starts.
    pub(crate) token_start: CursorSnapshot,

    /// Rules driving the lexer.
    pub(crate) rules: &'rules RuleTable,

    status: LexerStatus,

    /// Error waiting to become the type of the next finalized token.
    error: Option<LexError>,

    prev_token_type: TokenType,
}

impl<'src, 'rules> Lexer<'src, 'rules> {
    /// Creates a lexer over `source`.
    ///
    /// Anything viewable as bytes works: `&str`, `&[u8]`, `&String`.
    ///
    /// # Panics
    ///
    /// Panics if `rules` holds an empty pattern or a base outside `2..=36`,
    /// which only a table built by hand can.
    pub fn new<S>(source: &'src S, rules: &'rules RuleTable) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        rules.assert_well_formed();
        Self {
            cursor: Cursor::new(source.as_ref()),
            token_start: CursorSnapshot::default(),
            rules,
            status: LexerStatus::Ready,
            error: None,
            prev_token_type: TokenType::NO_PREVIOUS,
        }
    }

    /// Creates a lexer over a buffer that ends at its first NUL byte.
    ///
    /// Bytes from the first NUL onwards are ignored; a buffer without a NUL
    /// is used whole.
    pub fn from_nul_terminated(source: &'src [u8], rules: &'rules RuleTable) -> Self {
        let len = source.iter().position(|&b| b == 0).unwrap_or(source.len());
        Self::new(&source[..len], rules)
    }

    /// Creates a lexer over the contents of a C string.
    pub fn from_c_str(source: &'src CStr, rules: &'rules RuleTable) -> Self {
        Self::new(source.to_bytes(), rules)
    }

    // ------------------------------------------------------------------
    // Driving the lexer
    // ------------------------------------------------------------------

    /// Returns the next token.
    ///
    /// Once END (or END_ABNORMAL) has been returned, every further call
    /// returns the same sentinel again without running hooks.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.status.is_finished() {
            return self.sentinel();
        }

        // An error recorded between tokens is held back while whitespace is
        // skipped, so it surfaces where the next token would have started.
        self.start_token();
        let external = self.error.take();
        self.skip_whitespace();
        if self.error.is_none() {
            self.start_token();
            self.error = external;
        }
        if self.error.is_some() {
            return self.finish_token(TokenType::ERROR_GENERIC);
        }

        if self.cursor.is_at_end() {
            self.status = LexerStatus::Finished;
            debug!(position = self.cursor.position(), "end of input");
            return self.finish_token(TokenType::END);
        }

        let token_type = self.lex_token_type();
        self.finish_token(token_type)
    }

    /// Picks the sub-lexer for the current position and runs it.
    fn lex_token_type(&mut self) -> TokenType {
        let rules = self.rules;

        if rules.emit_line_endings && self.cursor.match_chars(b"\n") {
            return TokenType::LINE_ENDING;
        }
        if let Some(delim) = self.match_line_string_opener() {
            self.lex_string(&delim.closer, StringMode::LineBound);
            return delim.token_type;
        }
        if let Some(delim) = self.match_multiline_string_opener() {
            self.lex_string(&delim.closer, StringMode::Multiline);
            return delim.token_type;
        }
        if let Some(token_type) = self.lex_number() {
            return token_type;
        }
        if let Some(token_type) = self.match_punctuation() {
            return token_type;
        }
        self.lex_word()
    }

    /// Marks the current position as the start of a token.
    pub fn start_token(&mut self) {
        self.token_start = self.cursor.snapshot();
        if self.status == LexerStatus::Ready {
            self.status = LexerStatus::Lexing;
        }
    }

    /// Builds the token spanning from the token start to the cursor.
    ///
    /// A pending error overrides `token_type` and is cleared. Runs the
    /// `after_token` hook.
    ///
    /// If the cursor was moved back past the token start, the token is
    /// empty and sits at the cursor.
    pub fn finish_token(&mut self, token_type: TokenType) -> Token<'src> {
        let token_type = match self.error.take() {
            Some(error) => error.token_type(),
            None => token_type,
        };

        let end = self.cursor.position();
        let start = if self.token_start.position <= end {
            self.token_start
        } else {
            self.cursor.snapshot()
        };
        let token = Token {
            text: self.cursor.slice_from(start.position),
            span: Span::new(start.position, end, start.location()),
            token_type,
        };

        self.prev_token_type = token_type;
        if self.status == LexerStatus::Lexing {
            self.status = LexerStatus::Ready;
        }
        trace!(token = %token, "token");

        let rules = self.rules;
        if let Some(hooks) = rules.hooks.as_deref() {
            hooks.after_token(self, &token);
        }
        token
    }

    /// The end-of-stream token at the current position.
    fn sentinel(&self) -> Token<'src> {
        let position = self.cursor.position();
        let token_type = if self.status == LexerStatus::FinishedAbnormal {
            TokenType::END_ABNORMAL
        } else {
            TokenType::END
        };
        Token {
            text: &self.cursor.source()[position..position],
            span: Span::point(position, self.cursor.location()),
            token_type,
        }
    }

    /// Rewinds the cursor to the start of the current token.
    pub fn unlex(&mut self) {
        self.cursor.restore(self.token_start);
    }

    /// Rewinds to the start of the buffer and forgets all state.
    ///
    /// A reset lexer produces exactly the same tokens as a fresh one.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.token_start = CursorSnapshot::default();
        self.status = LexerStatus::Ready;
        self.error = None;
        self.prev_token_type = TokenType::NO_PREVIOUS;
    }

    /// Stops the stream: every further call to [`Lexer::next_token`]
    /// returns END_ABNORMAL.
    pub fn finish_abnormally(&mut self) {
        debug!(position = self.cursor.position(), "lexer finished abnormally");
        self.status = LexerStatus::FinishedAbnormal;
    }

    /// Records an error. It becomes the type of the next finalized token.
    ///
    /// A later error replaces an earlier one that has not surfaced yet.
    /// An error recorded between tokens, by a hook or by the caller,
    /// surfaces as an empty token after the following whitespace and
    /// comments are skipped. If that skipping runs into an unclosed
    /// comment, the comment error is reported instead.
    pub fn set_error(&mut self, error: LexError) {
        debug!(%error, position = self.cursor.position(), "lexical error");
        self.error = Some(error);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current lifecycle state.
    pub fn status(&self) -> LexerStatus {
        self.status
    }

    /// Returns true once END or END_ABNORMAL has been produced.
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Error waiting to surface, if any.
    pub fn pending_error(&self) -> Option<LexError> {
        self.error
    }

    /// Type of the last finalized token, or NO_PREVIOUS.
    pub fn previous_token_type(&self) -> TokenType {
        self.prev_token_type
    }

    /// Byte offset where the current token starts.
    pub fn token_start(&self) -> usize {
        self.token_start.position
    }

    /// Line and column where the current token starts.
    pub fn token_start_location(&self) -> Location {
        self.token_start.location()
    }

    /// The rule table driving this lexer.
    pub fn rules(&self) -> &'rules RuleTable {
        self.rules
    }

    /// The cursor.
    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    /// Mutable access to the cursor, for hooks and hand-written sub-lexers.
    ///
    /// Moving the cursor before the start of the current token makes
    /// [`Lexer::finish_token`] produce an empty token at the cursor.
    pub fn cursor_mut(&mut self) -> &mut Cursor<'src> {
        &mut self.cursor
    }
}

impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    /// Yields tokens up to, not including, the end sentinel.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}
