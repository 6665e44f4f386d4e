//! Number literal lexing.
//!
//! Integers are tried before floats. A literal opens with an optional sign
//! and either a configured prefix or, when the rules give a default base,
//! a digit in that base. Digit separators may appear anywhere in a digit
//! run and do not count as digits.
//!
//! An integer directly followed by a float radix separator is re-lexed as a
//! float, so `3.14` is one FLOAT token and not INT, DOT, INT.

use tracing::debug;

use crate::classify::digit_value;
use crate::rules::{FloatRules, IntegerRules};
use crate::token::{LexError, TokenType};

use super::core::Lexer;

/// How a numeric literal opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NumberStart<'r> {
    /// Prefix text; empty for the default base.
    pattern: &'r [u8],
    base: u32,
    /// Empty for integers and for floats without exponents.
    exponent_marker: &'r [u8],
}

impl<'src, 'rules> Lexer<'src, 'rules> {
    /// Lexes an integer or float literal if one starts here.
    pub(super) fn lex_number(&mut self) -> Option<TokenType> {
        let rules = self.rules;

        if let Some(integers) = &rules.integers {
            if let Some(start) = self.check_integer_start(integers) {
                return Some(self.lex_integer_literal(integers, start));
            }
        }

        let floats = rules.floats.as_ref()?;
        let start = self.check_float_start(floats)?;
        Some(self.lex_float_literal(floats, start))
    }

    /// Lexes a run of digits in `base`, with separators.
    ///
    /// Returns the number of digits. With no digits at all the
    /// `before_unlex_integer` hook runs and the cursor rewinds to the start
    /// of the token.
    pub fn lex_integer(&mut self, base: u32) -> usize {
        let digits = self.lex_digit_run(base);
        if digits == 0 {
            self.abandon_integer();
        }
        digits
    }

    /// Lexes the body of a float: mantissa, optional fraction after a radix
    /// separator, optional exponent after `exponent_marker`.
    ///
    /// Exponent digits are decimal. Returns the total number of digits. The
    /// float is abandoned, and 0 returned, when there are no digits at all
    /// or when an exponent marker is not followed by exponent digits; the
    /// `before_unlex_float` hook runs and the cursor rewinds to the start of
    /// the token.
    pub fn lex_float(&mut self, base: u32, exponent_marker: &[u8]) -> usize {
        match self.scan_float(base, exponent_marker) {
            Some(digits) if digits > 0 => digits,
            _ => {
                self.abandon_float();
                0
            }
        }
    }

    fn lex_digit_run(&mut self, base: u32) -> usize {
        let mut digits = 0;
        loop {
            if self.cursor.match_digit(base) {
                digits += 1;
            } else if self.check_digit_separator() {
                self.cursor.advance();
            } else {
                return digits;
            }
        }
    }

    /// Consumes a float body without judging it.
    ///
    /// Returns `None` for a dangling exponent marker.
    fn scan_float(&mut self, base: u32, exponent_marker: &[u8]) -> Option<usize> {
        let rules = self.rules;

        let mut digits = self.lex_digit_run(base);
        if self.match_radix_separator() {
            digits += self.lex_digit_run(base);
        }

        if !exponent_marker.is_empty() && self.cursor.match_string(exponent_marker) {
            if let Some(floats) = &rules.floats {
                self.cursor.match_chars(&floats.exponent_signs);
            }
            match self.lex_digit_run(10) {
                0 => return None,
                exponent => digits += exponent,
            }
        }

        Some(digits)
    }

    fn abandon_integer(&mut self) {
        let rules = self.rules;
        if let Some(hooks) = rules.hooks.as_deref() {
            hooks.before_unlex_integer(self);
        }
        self.unlex();
    }

    fn abandon_float(&mut self) {
        let rules = self.rules;
        if let Some(hooks) = rules.hooks.as_deref() {
            hooks.before_unlex_float(self);
        }
        self.unlex();
    }

    /// Runs `check` after an optional sign, then puts the sign back.
    fn with_sign_lookahead<T>(
        &mut self,
        check: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let before = self.cursor.snapshot();
        self.match_number_sign();
        let found = check(self);
        self.cursor.restore(before);
        found
    }

    fn check_integer_start(
        &mut self,
        integers: &'rules IntegerRules,
    ) -> Option<NumberStart<'rules>> {
        self.with_sign_lookahead(|lexer| {
            if let Some(prefix) = integers
                .prefixes
                .iter()
                .find(|prefix| lexer.cursor.check_string(&prefix.pattern))
            {
                return Some(NumberStart {
                    pattern: &prefix.pattern,
                    base: prefix.base,
                    exponent_marker: &[],
                });
            }

            let base = integers.default_base?;
            lexer.cursor.check_digit(base).then_some(NumberStart {
                pattern: &[],
                base,
                exponent_marker: &[],
            })
        })
    }

    fn check_float_start(
        &mut self,
        floats: &'rules FloatRules,
    ) -> Option<NumberStart<'rules>> {
        self.with_sign_lookahead(|lexer| {
            if let Some(prefix) = floats
                .prefixes
                .iter()
                .find(|prefix| lexer.cursor.check_string(&prefix.pattern))
            {
                return Some(NumberStart {
                    pattern: &prefix.pattern,
                    base: prefix.base,
                    exponent_marker: &prefix.exponent_marker,
                });
            }

            let base = floats.default_base?;
            // A bare fraction such as `.5` also opens a float.
            let opens = lexer.cursor.check_digit(base)
                || (lexer.cursor.check_chars(&floats.radix_separators)
                    && lexer
                        .cursor
                        .peek_at(1)
                        .is_some_and(|byte| digit_value(byte, base).is_some()));
            opens.then_some(NumberStart {
                pattern: &[],
                base,
                exponent_marker: &floats.default_exponent_marker,
            })
        })
    }

    fn consume_number_start(&mut self, start: NumberStart<'rules>) {
        self.match_number_sign();
        self.cursor.advance_by(start.pattern.len());
    }

    fn lex_integer_literal(
        &mut self,
        integers: &'rules IntegerRules,
        start: NumberStart<'rules>,
    ) -> TokenType {
        self.consume_number_start(start);
        if self.lex_integer(start.base) == 0 {
            self.recover_invalid_integer(start);
            return integers.token_type;
        }

        let rules = self.rules;
        if let Some(floats) = &rules.floats {
            if self.check_radix_separator() {
                debug!(
                    position = self.token_start(),
                    "integer followed by radix separator, relexing as float"
                );
                self.abandon_integer();
                // Only a float opening the same way may take over.
                return match self.check_float_start(floats) {
                    Some(float_start) if float_start.pattern == start.pattern => {
                        self.lex_float_literal(floats, float_start)
                    }
                    _ => {
                        self.recover_invalid_integer(start);
                        integers.token_type
                    }
                };
            }
        }

        self.cursor.match_any_string(&integers.suffixes);
        integers.token_type
    }

    fn lex_float_literal(
        &mut self,
        floats: &'rules FloatRules,
        start: NumberStart<'rules>,
    ) -> TokenType {
        self.consume_number_start(start);
        if self.lex_float(start.base, start.exponent_marker) == 0 {
            self.consume_number_start(start);
            self.scan_float(start.base, start.exponent_marker);
            self.set_error(LexError::InvalidFloat);
            return floats.token_type;
        }

        self.cursor.match_any_string(&floats.suffixes);
        floats.token_type
    }

    /// Re-consumes a rejected integer so the error token covers it.
    fn recover_invalid_integer(&mut self, start: NumberStart<'rules>) {
        self.consume_number_start(start);
        self.lex_digit_run(start.base);
        self.set_error(LexError::InvalidInteger);
    }
}
