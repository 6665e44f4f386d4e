//! Rule-table lookups at the cursor.
//!
//! `check_*` methods only look; `match_*` methods consume what they found.
//! Every list is tried in declaration order.

use crate::classify::is_whitespace;
use crate::cursor::Cursor;
use crate::rules::{DelimPair, StringDelim};
use crate::token::TokenType;

use super::core::Lexer;

impl<'src, 'rules> Lexer<'src, 'rules> {
    /// Returns true if a line comment starts here.
    pub fn check_line_comment(&self) -> bool {
        self.cursor.check_any_string(&self.rules.line_comments).is_some()
    }

    /// Consumes a line-comment opener.
    pub fn match_line_comment(&mut self) -> bool {
        let rules = self.rules;
        self.cursor.match_any_string(&rules.line_comments).is_some()
    }

    /// Returns true if a block comment, nestable or not, starts here.
    pub fn check_block_comment(&self) -> bool {
        let rules = self.rules;
        rules
            .nestable_comments
            .iter()
            .chain(&rules.unnestable_comments)
            .any(|pair| self.cursor.check_string(&pair.opener))
    }

    /// Consumes a block-comment opener.
    ///
    /// Returns the pair and whether it nests. Nestable pairs are tried
    /// first.
    pub fn match_block_comment(&mut self) -> Option<(&'rules DelimPair, bool)> {
        let rules = self.rules;
        for pair in &rules.nestable_comments {
            if self.cursor.match_string(&pair.opener) {
                return Some((pair, true));
            }
        }
        for pair in &rules.unnestable_comments {
            if self.cursor.match_string(&pair.opener) {
                return Some((pair, false));
            }
        }
        None
    }

    /// Returns true if a string of either kind starts here.
    pub fn check_string_opener(&self) -> bool {
        let rules = self.rules;
        rules
            .line_strings
            .iter()
            .chain(&rules.multiline_strings)
            .any(|delim| self.cursor.check_string(&delim.opener))
    }

    /// Consumes the opener of a line-bound string.
    pub fn match_line_string_opener(&mut self) -> Option<&'rules StringDelim> {
        let rules = self.rules;
        Self::match_delim(&mut self.cursor, &rules.line_strings)
    }

    /// Consumes the opener of a multiline string.
    pub fn match_multiline_string_opener(&mut self) -> Option<&'rules StringDelim> {
        let rules = self.rules;
        Self::match_delim(&mut self.cursor, &rules.multiline_strings)
    }

    fn match_delim(
        cursor: &mut Cursor<'src>,
        delims: &'rules [StringDelim],
    ) -> Option<&'rules StringDelim> {
        let delim = delims
            .iter()
            .find(|delim| cursor.check_string(&delim.opener))?;
        cursor.advance_by(delim.opener.len());
        Some(delim)
    }

    /// Returns the type of the punctuation starting here.
    pub fn check_punctuation(&self) -> Option<TokenType> {
        let rules = self.rules;
        rules
            .punctuation
            .iter()
            .find(|p| self.cursor.check_string(&p.pattern))
            .map(|p| p.token_type)
    }

    /// Consumes punctuation and returns its type.
    pub fn match_punctuation(&mut self) -> Option<TokenType> {
        let rules = self.rules;
        let punct = rules
            .punctuation
            .iter()
            .find(|p| self.cursor.check_string(&p.pattern))?;
        self.cursor.advance_by(punct.pattern.len());
        Some(punct.token_type)
    }

    /// Consumes a number sign.
    pub fn match_number_sign(&mut self) -> bool {
        let rules = self.rules;
        self.cursor.match_any_string(&rules.number_signs).is_some()
    }

    /// Returns true if a float radix separator is next.
    pub fn check_radix_separator(&self) -> bool {
        self.rules
            .floats
            .as_ref()
            .is_some_and(|floats| self.cursor.check_chars(&floats.radix_separators))
    }

    /// Consumes a float radix separator.
    pub fn match_radix_separator(&mut self) -> bool {
        let rules = self.rules;
        rules
            .floats
            .as_ref()
            .is_some_and(|floats| self.cursor.match_chars(&floats.radix_separators))
    }

    /// Returns true if the current byte is a digit separator.
    pub fn check_digit_separator(&self) -> bool {
        self.cursor.check_chars(&self.rules.digit_separators)
    }

    /// Returns true if a word in [`crate::WordRule::Word`] mode must stop
    /// here: whitespace, a comment or string opener, or punctuation.
    pub fn check_reserved(&self) -> bool {
        self.cursor.peek().is_some_and(is_whitespace)
            || self.check_line_comment()
            || self.check_block_comment()
            || self.check_string_opener()
            || self.check_punctuation().is_some()
    }
}
