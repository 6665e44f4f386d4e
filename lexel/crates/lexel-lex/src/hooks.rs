//! Lexer hooks.
//!
//! Hooks let a rule table run custom code at fixed points of the lexing
//! loop without forking the engine. Each method receives the lexer by
//! mutable reference, so a hook can inspect the cursor, record an error
//! with [`Lexer::set_error`] or stop the stream with
//! [`Lexer::finish_abnormally`].
//!
//! All methods default to doing nothing.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use lexel_lex::{Lexer, LexerHooks, RuleTable, Token};
//!
//! struct Counter(Arc<AtomicUsize>);
//!
//! impl LexerHooks for Counter {
//!     fn after_token(&self, _lexer: &mut Lexer<'_, '_>, _token: &Token<'_>) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let seen = Arc::new(AtomicUsize::new(0));
//! let rules = RuleTable::builder().hooks(Counter(Arc::clone(&seen))).build();
//! let tokens: Vec<_> = Lexer::new("a b c", &rules).collect();
//!
//! assert_eq!(tokens.len(), 3);
//! // Three words plus the END token.
//! assert_eq!(seen.load(Ordering::Relaxed), 4);
//! ```

use crate::lexer::Lexer;
use crate::token::Token;

/// Extension points of the lexing loop.
///
/// A rule table is shared between lexers and threads, so hooks must be
/// `Send + Sync`; keep per-run state in atomics or behind a lock.
pub trait LexerHooks: Send + Sync {
    /// Called when an integer literal is abandoned, right before the cursor
    /// rewinds to the start of the token.
    fn before_unlex_integer(&self, _lexer: &mut Lexer<'_, '_>) {}

    /// Called when a float literal is abandoned, right before the cursor
    /// rewinds to the start of the token.
    fn before_unlex_float(&self, _lexer: &mut Lexer<'_, '_>) {}

    /// Called after every finalized token, END included.
    ///
    /// Sentinels re-emitted by a finished lexer do not call this again.
    fn after_token(&self, _lexer: &mut Lexer<'_, '_>, _token: &Token<'_>) {}
}
