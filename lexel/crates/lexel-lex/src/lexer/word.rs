//! Words and keywords.

use crate::classify::is_whitespace;
use crate::rules::WordRule;
use crate::token::TokenType;

use super::core::Lexer;

impl<'src, 'rules> Lexer<'src, 'rules> {
    /// Lexes a word: the fallback when nothing else matches here.
    ///
    /// Always consumes at least one byte. The whole word is then looked up
    /// in the keyword table.
    pub(super) fn lex_word(&mut self) -> TokenType {
        let rules = self.rules;

        self.cursor.advance();
        match rules.word_rule {
            WordRule::Symbolic => {
                while self.cursor.peek().is_some_and(|byte| !is_whitespace(byte)) {
                    self.cursor.advance();
                }
            }
            WordRule::Word => {
                while !self.cursor.is_at_end() && !self.check_reserved() {
                    self.cursor.advance();
                }
            }
        }

        let word = self.cursor.slice_from(self.token_start());
        rules.keyword(word).unwrap_or(rules.default_word_type)
    }
}
