//! Edge case tests for lexel-lex

#[cfg(test)]
mod tests {
    use crate::lexer::testing::*;
    use crate::{
        Lexer, LexerStatus, RuleTable, Token, TokenType, WordRule,
    };
    use proptest::prelude::*;

    const ID: TokenType = TokenType::new(0);
    const KEYWORD_DEF: TokenType = TokenType::new(1);
    const STR: TokenType = TokenType::new(2);
    const L_PAREN: TokenType = TokenType::new(3);
    const R_PAREN: TokenType = TokenType::new(4);
    const L_BRACE: TokenType = TokenType::new(5);
    const R_BRACE: TokenType = TokenType::new(6);

    fn lex_all<'s>(source: &'s str, rules: &RuleTable) -> Vec<Token<'s>> {
        let mut lexer = Lexer::new(source, rules);
        let mut tokens = Vec::new();
        // Every token but END consumes input, so this bound is never hit.
        for _ in 0..=source.len() + 1 {
            let token = lexer.next_token();
            tokens.push(token);
            if token.is_end() {
                return tokens;
            }
        }
        panic!("lexer made no progress on {source:?}");
    }

    // ==================== END-TO-END ====================

    #[test]
    fn test_edge_def_hello() {
        let rules = RuleTable::builder()
            .keyword("def", KEYWORD_DEF)
            .punctuation("(", L_PAREN)
            .punctuation(")", R_PAREN)
            .punctuation("{", L_BRACE)
            .punctuation("}", R_BRACE)
            .line_string("\"", "\"", STR)
            .word_rule(WordRule::Word)
            .default_word_type(ID)
            .build();

        let tokens = lex_all("def hello() { println(\"hi\") }", &rules);
        let got: Vec<(TokenType, &[u8])> =
            tokens.iter().map(|t| (t.token_type, t.text)).collect();
        let expected: Vec<(TokenType, &[u8])> = vec![
            (KEYWORD_DEF, b"def"),
            (ID, b"hello"),
            (L_PAREN, b"("),
            (R_PAREN, b")"),
            (L_BRACE, b"{"),
            (ID, b"println"),
            (L_PAREN, b"("),
            (STR, b"\"hi\""),
            (R_PAREN, b")"),
            (R_BRACE, b"}"),
            (TokenType::END, b""),
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn test_edge_reclassification() {
        let rules = toy_rules();
        let tokens = lex_all("3.14", &rules);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].token_type, FLOAT);
        assert_eq!(tokens[0].text, b"3.14");
    }

    #[test]
    fn test_edge_unclosed_nestable_comment() {
        let rules = RuleTable::builder().nestable_comment("/*", "*/").build();
        let mut lexer = Lexer::new("/* never closed", &rules);
        let token = lexer.next_token();
        assert_eq!(token.token_type, TokenType::ERROR_UNCLOSED_COMMENT);
        assert_eq!(token.text, b"/* never closed");
        assert_eq!(token.span.start, 0);

        let end = lexer.next_token();
        assert_eq!(end.token_type, TokenType::END);
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), end);
        }
    }

    #[test]
    fn test_edge_escaped_delimiter() {
        let rules = RuleTable::builder()
            .line_string("\"", "\"", STR)
            .escape_chars("\\")
            .build();
        let tokens = lex_all(r#""a\"b""#, &rules);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].token_type, STR);
        assert_eq!(tokens[0].text, br#""a\"b""#);
    }

    // ==================== BOUNDARIES ====================

    #[test]
    fn test_edge_single_byte_inputs() {
        let rules = toy_rules();
        for byte in 0u8..=255 {
            let source = [byte];
            let tokens: Vec<_> = Lexer::new(&source[..], &rules).collect();
            let consumed: usize = tokens.iter().map(|t| t.span.len()).sum();
            assert!(consumed <= 1, "byte {byte:#x}");
        }
    }

    #[test]
    fn test_edge_long_word() {
        let rules = toy_rules();
        let name = "a".repeat(10_000);
        let source = format!("let {name} = 1;");
        let tokens = lex_all(&source, &rules);
        assert_eq!(tokens[1].text.len(), 10_000);
        assert_eq!(tokens[1].token_type, IDENT);
    }

    #[test]
    fn test_edge_deeply_nested_comment() {
        let rules = toy_rules();
        let depth = 200;
        let source = format!("{}x{} y", "/+".repeat(depth), "+/".repeat(depth));
        assert_eq!(lex(&source, &rules), [(IDENT, "y")]);
    }

    #[test]
    fn test_edge_locations_are_zero_based() {
        let rules = toy_rules();
        let tokens = lex_all("a\n  bb\n\n c", &rules);
        let locations: Vec<(u32, u32)> = tokens
            .iter()
            .map(|t| (t.location().line, t.location().column))
            .collect();
        assert_eq!(locations, [(0, 0), (1, 2), (3, 1), (3, 2)]);
    }

    #[test]
    fn test_edge_crlf_is_whitespace() {
        let rules = toy_rules();
        assert_eq!(lex("a\r\nb", &rules), [(IDENT, "a"), (IDENT, "b")]);
    }

    #[test]
    fn test_edge_error_then_continue() {
        let rules = toy_rules();
        assert_eq!(
            lex("x = \"oops\ny = 0x;", &rules),
            [
                (IDENT, "x"),
                (EQ, "="),
                (TokenType::ERROR_UNCLOSED_STRING, "\"oops\n"),
                (IDENT, "y"),
                (EQ, "="),
                (TokenType::ERROR_INVALID_INTEGER, "0x"),
                (SEMI, ";"),
            ]
        );
    }

    #[test]
    fn test_edge_empty_rules_split_on_whitespace() {
        let rules = RuleTable::default();
        let tokens = lex_all("  (a+b)\t* c  ", &rules);
        let texts: Vec<&[u8]> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, [&b"(a+b)"[..], b"*", b"c", b""]);
    }

    #[test]
    fn test_edge_status_never_regresses() {
        let rules = toy_rules();
        let mut lexer = Lexer::new("a", &rules);
        lexer.next_token();
        lexer.next_token();
        for _ in 0..3 {
            lexer.next_token();
            assert_eq!(lexer.status(), LexerStatus::Finished);
        }
    }

    // ==================== PROPERTIES ====================

    /// Source text built from the bytes the toy rules care about.
    const ALPHABET: &str = "[a-z0-9 .\"`\\\\/*+_x()=;\\n-]{0,64}";

    proptest! {
        #[test]
        fn prop_tokens_cover_source(source in ALPHABET) {
            let rules = toy_rules();
            let tokens = lex_all(&source, &rules);
            let bytes = source.as_bytes();

            let mut previous_end = 0;
            for token in &tokens {
                prop_assert!(token.span.start >= previous_end);
                prop_assert!(token.span.end <= bytes.len());
                prop_assert!(!token.text.is_empty() || token.is_end() || token.is_error());

                // Whatever lies between two tokens must be skippable.
                let gap = &bytes[previous_end..token.span.start];
                let mut skipper = Lexer::new(gap, &rules);
                prop_assert_eq!(skipper.skip_whitespace(), gap.len());
                prop_assert!(skipper.pending_error().is_none());

                previous_end = token.span.end;
            }
            prop_assert_eq!(previous_end, bytes.len());
        }

        #[test]
        fn prop_reset_is_deterministic(source in ALPHABET) {
            let rules = toy_rules();
            let mut lexer = Lexer::new(&source, &rules);
            let first: Vec<_> = lexer.by_ref().collect();
            let end = lexer.next_token();

            lexer.reset();
            prop_assert_eq!(lexer.cursor().location(), lexel_util::Location::START);
            let second: Vec<_> = lexer.by_ref().collect();
            prop_assert_eq!(first, second);
            prop_assert_eq!(lexer.next_token(), end);
        }

        #[test]
        fn prop_sentinel_is_idempotent(source in ALPHABET) {
            let rules = toy_rules();
            let mut lexer = Lexer::new(&source, &rules);
            lexer.by_ref().for_each(drop);
            let end = lexer.next_token();
            prop_assert_eq!(end.token_type, TokenType::END);
            for _ in 0..3 {
                prop_assert_eq!(lexer.next_token(), end);
                prop_assert_eq!(lexer.status(), LexerStatus::Finished);
            }
        }

        #[test]
        fn prop_decimal_runs_are_one_integer(digits in "[1-9][0-9_]{0,30}") {
            let rules = toy_rules();
            prop_assert_eq!(kinds(&digits, &rules), vec![INT]);
        }

        #[test]
        fn prop_hex_runs_are_one_integer(digits in "[0-9a-fA-F]{1,16}") {
            let rules = toy_rules();
            let source = format!("0x{digits}");
            prop_assert_eq!(kinds(&source, &rules), vec![INT]);
        }

        #[test]
        fn prop_plain_strings_are_one_token(body in "[^\"\\\\\\n]{0,64}") {
            let rules = toy_rules();
            let source = format!("\"{body}\"");
            prop_assert_eq!(kinds(&source, &rules), vec![STRING]);
        }
    }
}
