//! Whitespace and comment skipping.

use crate::classify::{is_line_terminator, is_whitespace};
use crate::rules::DelimPair;
use crate::token::{LexError, TokenType};

use super::core::Lexer;

impl<'src, 'rules> Lexer<'src, 'rules> {
    /// Skips whitespace, line comments and block comments.
    ///
    /// A line terminator is kept when it should become a LINE_ENDING token.
    /// If a block comment is left unclosed, the error is recorded and the
    /// token start is moved to the comment opener so the error token covers
    /// the whole comment.
    ///
    /// Returns the number of bytes skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        let start = self.cursor.position();

        loop {
            if self.check_skippable_whitespace() {
                self.cursor.advance();
                continue;
            }

            if self.match_line_comment() {
                self.skip_line_comment();
                continue;
            }

            let opener = self.cursor.snapshot();
            if let Some((pair, nestable)) = self.match_block_comment() {
                self.skip_block_comment(pair, nestable);
                if self.pending_error().is_some() {
                    self.token_start = opener;
                    break;
                }
                continue;
            }

            break;
        }

        self.cursor.position() - start
    }

    /// Returns true if the current byte is whitespace the lexer may drop.
    fn check_skippable_whitespace(&self) -> bool {
        match self.cursor.peek() {
            Some(byte) if is_line_terminator(byte) => !self.line_ending_pending(),
            Some(byte) => is_whitespace(byte),
            None => false,
        }
    }

    /// Returns true if the next line terminator must be emitted as a token.
    fn line_ending_pending(&self) -> bool {
        let rules = self.rules;
        rules.emit_line_endings
            && !(rules.coalesce_line_endings
                && self.previous_token_type() == TokenType::LINE_ENDING)
    }

    /// Skips the rest of a line comment, leaving the terminator in place.
    fn skip_line_comment(&mut self) {
        while self.cursor.peek().is_some_and(|byte| !is_line_terminator(byte)) {
            self.cursor.advance();
        }
    }

    /// Skips the body of a block comment whose opener was just consumed.
    ///
    /// Stops after the closer. A nestable comment recurses on each nested
    /// opener. Running out of input records an unclosed-comment error.
    ///
    /// Returns the number of bytes consumed, closer included.
    pub fn skip_block_comment(&mut self, pair: &DelimPair, nestable: bool) -> usize {
        let start = self.cursor.position();

        loop {
            if self.cursor.match_string(&pair.closer) {
                break;
            }

            if nestable && self.cursor.match_string(&pair.opener) {
                let inner = self.skip_block_comment(pair, true);
                if inner == 0 || self.pending_error().is_some() {
                    self.set_error(LexError::UnclosedComment);
                    break;
                }
                continue;
            }

            if self.cursor.advance().is_none() || self.cursor.is_at_end() {
                self.set_error(LexError::UnclosedComment);
                break;
            }
        }

        self.cursor.position() - start
    }
}
