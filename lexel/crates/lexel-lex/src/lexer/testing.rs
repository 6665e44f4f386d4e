//! Shared rule tables for lexer unit tests.

use crate::hooks::LexerHooks;
use crate::rules::{FloatRules, IntegerRules, RuleTable, RuleTableBuilder, WordRule};
use crate::token::TokenType;

use super::Lexer;

pub(crate) const IDENT: TokenType = TokenType::new(0);
pub(crate) const INT: TokenType = TokenType::new(1);
pub(crate) const FLOAT: TokenType = TokenType::new(2);
pub(crate) const STRING: TokenType = TokenType::new(3);

pub(crate) const KW_IF: TokenType = TokenType::new(10);
pub(crate) const KW_LET: TokenType = TokenType::new(11);
pub(crate) const KW_FN: TokenType = TokenType::new(12);
pub(crate) const KW_RETURN: TokenType = TokenType::new(13);

pub(crate) const LPAREN: TokenType = TokenType::new(20);
pub(crate) const RPAREN: TokenType = TokenType::new(21);
pub(crate) const LBRACE: TokenType = TokenType::new(22);
pub(crate) const RBRACE: TokenType = TokenType::new(23);
pub(crate) const SEMI: TokenType = TokenType::new(24);
pub(crate) const EQ_EQ: TokenType = TokenType::new(25);
pub(crate) const EQ: TokenType = TokenType::new(26);
pub(crate) const PLUS: TokenType = TokenType::new(27);
pub(crate) const MINUS: TokenType = TokenType::new(28);
pub(crate) const DOT: TokenType = TokenType::new(29);
pub(crate) const COMMA: TokenType = TokenType::new(30);

/// A small C-like language.
pub(crate) fn toy_builder() -> RuleTableBuilder {
    RuleTable::builder()
        .line_comment("//")
        .nestable_comment("/+", "+/")
        .unnestable_comment("/*", "*/")
        .line_string("\"", "\"", STRING)
        .multiline_string("`", "`", STRING)
        .escape_chars("\\")
        .digit_separators("_")
        .integers(
            IntegerRules::new(INT)
                .default_base(10)
                .prefix("0x", 16)
                .prefix("0b", 2)
                .prefix("0o", 8)
                .suffix("u"),
        )
        .floats(
            FloatRules::new(FLOAT)
                .default_base(10, "e")
                .exponent_signs("+-")
                .radix_separators(".")
                .suffix("f"),
        )
        .punctuation("==", EQ_EQ)
        .punctuation("=", EQ)
        .punctuation("(", LPAREN)
        .punctuation(")", RPAREN)
        .punctuation("{", LBRACE)
        .punctuation("}", RBRACE)
        .punctuation(";", SEMI)
        .punctuation("+", PLUS)
        .punctuation("-", MINUS)
        .punctuation(".", DOT)
        .punctuation(",", COMMA)
        .keyword("if", KW_IF)
        .keyword("let", KW_LET)
        .keyword("fn", KW_FN)
        .keyword("return", KW_RETURN)
        .default_word_type(IDENT)
        .word_rule(WordRule::Word)
}

pub(crate) fn toy_rules() -> RuleTable {
    toy_builder().build()
}

pub(crate) fn toy_rules_with_hooks(hooks: impl LexerHooks + 'static) -> RuleTable {
    toy_builder().hooks(hooks).build()
}

/// Lexes `source` to the end, sentinel excluded, as `(type, text)` pairs.
pub(crate) fn lex<'s>(source: &'s str, rules: &RuleTable) -> Vec<(TokenType, &'s str)> {
    Lexer::new(source, rules)
        .map(|token| (token.token_type, token.as_str().unwrap()))
        .collect()
}

/// Token types only.
pub(crate) fn kinds(source: &str, rules: &RuleTable) -> Vec<TokenType> {
    Lexer::new(source, rules).map(|token| token.token_type).collect()
}
