//! String literal sub-lexer.

use crate::classify::is_line_terminator;
use crate::token::LexError;

use super::core::Lexer;

/// Whether a string may span lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringMode {
    /// A line terminator inside the string is an error.
    LineBound,
    /// Line terminators are part of the string.
    Multiline,
}

impl<'src, 'rules> Lexer<'src, 'rules> {
    /// Lexes the body of a string whose opener was just consumed.
    ///
    /// Stops after `closer`. An escape byte makes the byte after it part of
    /// the string whatever it is. Running out of input, or meeting a line
    /// terminator in [`StringMode::LineBound`], records an unclosed-string
    /// error; the terminator is part of the error token.
    ///
    /// Returns true if the string was closed.
    pub fn lex_string(&mut self, closer: &[u8], mode: StringMode) -> bool {
        let rules = self.rules;

        loop {
            if self.cursor.match_string(closer) {
                return true;
            }

            if self.cursor.match_chars(&rules.escape_chars) {
                self.cursor.advance();
                continue;
            }

            match self.cursor.advance() {
                Some(byte) if mode == StringMode::LineBound && is_line_terminator(byte) => {
                    self.set_error(LexError::UnclosedString);
                    return false;
                }
                Some(_) => {}
                None => {
                    self.set_error(LexError::UnclosedString);
                    return false;
                }
            }
        }
    }
}
