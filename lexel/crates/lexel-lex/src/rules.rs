//! Rule tables.
//!
//! A [`RuleTable`] is the declarative description of a language's lexical
//! surface: which comment styles exist, how strings and numbers are
//! delimited, which punctuation and keywords to recognize.
//!
//! Every list is scanned in declaration order and the first match wins. The
//! engine never reorders patterns, so overlapping entries such as `=` and
//! `==` must be declared longest first.
//!
//! Tables are plain data and can be built with struct literals, but the
//! [`RuleTableBuilder`] is the usual way in. A hand-built table is checked
//! when a lexer is created over it; empty patterns and bases outside
//! `2..=36` panic there.
//!
//!
//! ```
//! use lexel_lex::{IntegerRules, RuleTable, TokenType, WordRule};
//!
//! const IDENT: TokenType = TokenType::new(0);
//! const INT: TokenType = TokenType::new(1);
//! const EQ_EQ: TokenType = TokenType::new(2);
//! const EQ: TokenType = TokenType::new(3);
//!
//! let rules = RuleTable::builder()
//!     .line_comment("#")
//!     .integers(IntegerRules::new(INT).default_base(10).prefix("0x", 16))
//!     .punctuation("==", EQ_EQ)
//!     .punctuation("=", EQ)
//!     .word_rule(WordRule::Word)
//!     .default_word_type(IDENT)
//!     .build();
//!
//! assert_eq!(rules.punctuation.len(), 2);
//! ```

use std::fmt;
use std::hash::BuildHasherDefault;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::classify::{MAX_BASE, MIN_BASE};
use crate::hooks::LexerHooks;
use crate::token::TokenType;

/// Keyword table: insertion-ordered, exact-match lookup.
pub type KeywordMap = IndexMap<Vec<u8>, TokenType, BuildHasherDefault<FxHasher>>;

/// An opener/closer pair for block comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelimPair {
    /// Text that opens the comment.
    pub opener: Vec<u8>,
    /// Text that closes the comment.
    pub closer: Vec<u8>,
}

/// A string delimiter pair and the type of the tokens it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringDelim {
    /// Text that opens the string.
    pub opener: Vec<u8>,
    /// Text that closes the string.
    pub closer: Vec<u8>,
    /// Type assigned to the string token.
    pub token_type: TokenType,
}

/// A literal pattern and the type of the tokens it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Text to match.
    pub pattern: Vec<u8>,
    /// Type assigned on a match.
    pub token_type: TokenType,
}

/// An integer prefix such as `0x`, and the base of the digits after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPrefix {
    /// Prefix text.
    pub pattern: Vec<u8>,
    /// Base of the digits that follow.
    pub base: u32,
}

/// A float prefix, its digit base, and its exponent marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloatPrefix {
    /// Prefix text.
    pub pattern: Vec<u8>,
    /// Base of the mantissa and fraction digits.
    pub base: u32,
    /// Text that introduces the exponent; empty disables exponents.
    pub exponent_marker: Vec<u8>,
}

/// How the fallback scan delimits a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordRule {
    /// A word runs until whitespace.
    #[default]
    Symbolic,
    /// A word runs until whitespace, a comment or string opener, or
    /// punctuation.
    Word,
}

/// Integer literal rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerRules {
    /// Type of integer tokens.
    pub token_type: TokenType,
    /// Base of unprefixed integers; `None` requires a prefix.
    pub default_base: Option<u32>,
    /// Prefixes, tried in order.
    pub prefixes: Vec<NumberPrefix>,
    /// Suffixes allowed after the digits, tried in order.
    pub suffixes: Vec<Vec<u8>>,
}

impl IntegerRules {
    /// Integer rules with no prefixes and no default base.
    pub fn new(token_type: TokenType) -> Self {
        Self {
            token_type,
            default_base: None,
            prefixes: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    /// Accept unprefixed integers in `base`.
    pub fn default_base(mut self, base: u32) -> Self {
        self.default_base = Some(checked_base(base));
        self
    }

    /// Add a prefix introducing digits in `base`.
    pub fn prefix(mut self, pattern: impl AsRef<[u8]>, base: u32) -> Self {
        self.prefixes.push(NumberPrefix {
            pattern: non_empty(pattern, "integer prefix"),
            base: checked_base(base),
        });
        self
    }

    /// Add a suffix such as `u` or `L`.
    pub fn suffix(mut self, suffix: impl AsRef<[u8]>) -> Self {
        self.suffixes.push(non_empty(suffix, "integer suffix"));
        self
    }
}

/// Float literal rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloatRules {
    /// Type of float tokens.
    pub token_type: TokenType,
    /// Base of unprefixed floats; `None` requires a prefix.
    pub default_base: Option<u32>,
    /// Exponent marker of unprefixed floats; empty disables exponents.
    pub default_exponent_marker: Vec<u8>,
    /// Prefixes, tried in order.
    pub prefixes: Vec<FloatPrefix>,
    /// Suffixes allowed after the literal, tried in order.
    pub suffixes: Vec<Vec<u8>>,
    /// Signs allowed right after the exponent marker.
    pub exponent_signs: Vec<u8>,
    /// Bytes separating the integer and fractional parts.
    pub radix_separators: Vec<u8>,
}

impl FloatRules {
    /// Float rules with no prefixes, no default base and no separators.
    pub fn new(token_type: TokenType) -> Self {
        Self {
            token_type,
            default_base: None,
            default_exponent_marker: Vec::new(),
            prefixes: Vec::new(),
            suffixes: Vec::new(),
            exponent_signs: Vec::new(),
            radix_separators: Vec::new(),
        }
    }

    /// Accept unprefixed floats in `base`, with `exponent_marker`.
    pub fn default_base(mut self, base: u32, exponent_marker: impl AsRef<[u8]>) -> Self {
        self.default_base = Some(checked_base(base));
        self.default_exponent_marker = exponent_marker.as_ref().to_vec();
        self
    }

    /// Add a prefix introducing a float in `base`.
    pub fn prefix(
        mut self,
        pattern: impl AsRef<[u8]>,
        base: u32,
        exponent_marker: impl AsRef<[u8]>,
    ) -> Self {
        self.prefixes.push(FloatPrefix {
            pattern: non_empty(pattern, "float prefix"),
            base: checked_base(base),
            exponent_marker: exponent_marker.as_ref().to_vec(),
        });
        self
    }

    /// Add a suffix such as `f`.
    pub fn suffix(mut self, suffix: impl AsRef<[u8]>) -> Self {
        self.suffixes.push(non_empty(suffix, "float suffix"));
        self
    }

    /// Set the exponent sign bytes.
    pub fn exponent_signs(mut self, signs: impl AsRef<[u8]>) -> Self {
        self.exponent_signs = signs.as_ref().to_vec();
        self
    }

    /// Set the radix separator bytes.
    pub fn radix_separators(mut self, separators: impl AsRef<[u8]>) -> Self {
        self.radix_separators = separators.as_ref().to_vec();
        self
    }
}

/// The complete set of lexical rules for one language.
///
/// A table is read-only while lexers borrow it and can be shared between
/// any number of them, across threads.
#[derive(Clone)]
pub struct RuleTable {
    /// Line-comment openers.
    pub line_comments: Vec<Vec<u8>>,
    /// Block comments whose opener may recur inside them.
    pub nestable_comments: Vec<DelimPair>,
    /// Block comments that end at the first closer.
    pub unnestable_comments: Vec<DelimPair>,
    /// Strings that may not span a line terminator.
    pub line_strings: Vec<StringDelim>,
    /// Strings that may span lines.
    pub multiline_strings: Vec<StringDelim>,
    /// Escape bytes shared by all strings.
    pub escape_chars: Vec<u8>,
    /// Bytes allowed between digits of numeric literals.
    pub digit_separators: Vec<u8>,
    /// Signs allowed in front of numeric literals.
    pub number_signs: Vec<Vec<u8>>,
    /// Integer literal rules; `None` disables integers.
    pub integers: Option<IntegerRules>,
    /// Float literal rules; `None` disables floats.
    pub floats: Option<FloatRules>,
    /// Punctuation patterns.
    pub punctuation: Vec<Pattern>,
    /// Keywords, matched against whole words.
    pub keywords: KeywordMap,
    /// Type of words that are not keywords.
    pub default_word_type: TokenType,
    /// How words are delimited.
    pub word_rule: WordRule,
    /// Emit a token for each significant line terminator.
    pub emit_line_endings: bool,
    /// Never emit two line-ending tokens in a row.
    pub coalesce_line_endings: bool,
    /// Extension points called while lexing.
    pub hooks: Option<Arc<dyn LexerHooks>>,
}

impl RuleTable {
    /// Start building a rule table.
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    /// Look up the type of a keyword.
    pub fn keyword(&self, word: &[u8]) -> Option<TokenType> {
        self.keywords.get(word).copied()
    }

    /// Panics on the programmer errors the builder rejects.
    ///
    /// An empty opener matches everywhere and would stall the lexer.
    pub(crate) fn assert_well_formed(&self) {
        for opener in &self.line_comments {
            assert_non_empty(opener, "line comment opener");
        }
        for pair in self.nestable_comments.iter().chain(&self.unnestable_comments) {
            assert_non_empty(&pair.opener, "comment opener");
            assert_non_empty(&pair.closer, "comment closer");
        }
        for delim in self.line_strings.iter().chain(&self.multiline_strings) {
            assert_non_empty(&delim.opener, "string opener");
            assert_non_empty(&delim.closer, "string closer");
        }
        for sign in &self.number_signs {
            assert_non_empty(sign, "number sign");
        }
        for pattern in &self.punctuation {
            assert_non_empty(&pattern.pattern, "punctuation");
        }

        if let Some(ints) = &self.integers {
            if let Some(base) = ints.default_base {
                checked_base(base);
            }
            for prefix in &ints.prefixes {
                assert_non_empty(&prefix.pattern, "integer prefix");
                checked_base(prefix.base);
            }
            for suffix in &ints.suffixes {
                assert_non_empty(suffix, "integer suffix");
            }
        }
        if let Some(floats) = &self.floats {
            if let Some(base) = floats.default_base {
                checked_base(base);
            }
            for prefix in &floats.prefixes {
                assert_non_empty(&prefix.pattern, "float prefix");
                checked_base(prefix.base);
            }
            for suffix in &floats.suffixes {
                assert_non_empty(suffix, "float suffix");
            }
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            line_comments: Vec::new(),
            nestable_comments: Vec::new(),
            unnestable_comments: Vec::new(),
            line_strings: Vec::new(),
            multiline_strings: Vec::new(),
            escape_chars: Vec::new(),
            digit_separators: Vec::new(),
            number_signs: Vec::new(),
            integers: None,
            floats: None,
            punctuation: Vec::new(),
            keywords: KeywordMap::default(),
            default_word_type: TokenType::new(0),
            word_rule: WordRule::default(),
            emit_line_endings: false,
            coalesce_line_endings: false,
            hooks: None,
        }
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTable")
            .field("line_comments", &self.line_comments)
            .field("nestable_comments", &self.nestable_comments)
            .field("unnestable_comments", &self.unnestable_comments)
            .field("line_strings", &self.line_strings)
            .field("multiline_strings", &self.multiline_strings)
            .field("escape_chars", &self.escape_chars)
            .field("digit_separators", &self.digit_separators)
            .field("number_signs", &self.number_signs)
            .field("integers", &self.integers)
            .field("floats", &self.floats)
            .field("punctuation", &self.punctuation)
            .field("keywords", &self.keywords)
            .field("default_word_type", &self.default_word_type)
            .field("word_rule", &self.word_rule)
            .field("emit_line_endings", &self.emit_line_endings)
            .field("coalesce_line_endings", &self.coalesce_line_endings)
            .field("hooks", &self.hooks.as_ref().map(|_| "<hooks>"))
            .finish()
    }
}

/// Fluent construction of a [`RuleTable`].
///
/// Entries are appended in call order, which is also their match order.
///
/// # Panics
///
/// Methods panic on programmer errors: empty patterns and bases outside
/// `2..=36`. Tables loaded from configuration files are validated by
/// [`crate::config`] instead.
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    table: RuleTable,
}

impl RuleTableBuilder {
    /// A builder for an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line-comment opener.
    pub fn line_comment(mut self, opener: impl AsRef<[u8]>) -> Self {
        self.table
            .line_comments
            .push(non_empty(opener, "line comment opener"));
        self
    }

    /// Add a block comment that may nest.
    pub fn nestable_comment(mut self, opener: impl AsRef<[u8]>, closer: impl AsRef<[u8]>) -> Self {
        self.table.nestable_comments.push(delim_pair(opener, closer));
        self
    }

    /// Add a block comment that ends at the first closer.
    pub fn unnestable_comment(
        mut self,
        opener: impl AsRef<[u8]>,
        closer: impl AsRef<[u8]>,
    ) -> Self {
        self.table
            .unnestable_comments
            .push(delim_pair(opener, closer));
        self
    }

    /// Add a string delimiter that may not span lines.
    pub fn line_string(
        mut self,
        opener: impl AsRef<[u8]>,
        closer: impl AsRef<[u8]>,
        token_type: TokenType,
    ) -> Self {
        self.table
            .line_strings
            .push(string_delim(opener, closer, token_type));
        self
    }

    /// Add a string delimiter that may span lines.
    pub fn multiline_string(
        mut self,
        opener: impl AsRef<[u8]>,
        closer: impl AsRef<[u8]>,
        token_type: TokenType,
    ) -> Self {
        self.table
            .multiline_strings
            .push(string_delim(opener, closer, token_type));
        self
    }

    /// Set the escape bytes shared by all strings.
    pub fn escape_chars(mut self, chars: impl AsRef<[u8]>) -> Self {
        self.table.escape_chars = chars.as_ref().to_vec();
        self
    }

    /// Set the digit separator bytes.
    pub fn digit_separators(mut self, chars: impl AsRef<[u8]>) -> Self {
        self.table.digit_separators = chars.as_ref().to_vec();
        self
    }

    /// Add a number sign.
    pub fn number_sign(mut self, sign: impl AsRef<[u8]>) -> Self {
        self.table.number_signs.push(non_empty(sign, "number sign"));
        self
    }

    /// Enable integer literals.
    pub fn integers(mut self, rules: IntegerRules) -> Self {
        self.table.integers = Some(rules);
        self
    }

    /// Enable float literals.
    pub fn floats(mut self, rules: FloatRules) -> Self {
        self.table.floats = Some(rules);
        self
    }

    /// Add a punctuation pattern.
    pub fn punctuation(mut self, pattern: impl AsRef<[u8]>, token_type: TokenType) -> Self {
        self.table.punctuation.push(Pattern {
            pattern: non_empty(pattern, "punctuation"),
            token_type,
        });
        self
    }

    /// Add a keyword. A repeated keyword keeps its first type.
    pub fn keyword(mut self, keyword: impl AsRef<[u8]>, token_type: TokenType) -> Self {
        self.table
            .keywords
            .entry(non_empty(keyword, "keyword"))
            .or_insert(token_type);
        self
    }

    /// Set the type of words that are not keywords.
    pub fn default_word_type(mut self, token_type: TokenType) -> Self {
        self.table.default_word_type = token_type;
        self
    }

    /// Set how words are delimited.
    pub fn word_rule(mut self, rule: WordRule) -> Self {
        self.table.word_rule = rule;
        self
    }

    /// Emit a token for significant line terminators.
    pub fn emit_line_endings(mut self, emit: bool) -> Self {
        self.table.emit_line_endings = emit;
        self
    }

    /// Collapse runs of line endings into one token.
    pub fn coalesce_line_endings(mut self, coalesce: bool) -> Self {
        self.table.coalesce_line_endings = coalesce;
        self
    }

    /// Install hooks.
    pub fn hooks(mut self, hooks: impl LexerHooks + 'static) -> Self {
        self.table.hooks = Some(Arc::new(hooks));
        self
    }

    /// Finish the table.
    pub fn build(self) -> RuleTable {
        self.table
    }
}

fn checked_base(base: u32) -> u32 {
    assert!(
        (MIN_BASE..=MAX_BASE).contains(&base),
        "numeric base {base} outside {MIN_BASE}..={MAX_BASE}"
    );
    base
}

fn assert_non_empty(pattern: &[u8], what: &str) {
    assert!(!pattern.is_empty(), "{what} must not be empty");
}

fn non_empty(pattern: impl AsRef<[u8]>, what: &str) -> Vec<u8> {
    let pattern = pattern.as_ref();
    assert_non_empty(pattern, what);
    pattern.to_vec()
}

fn delim_pair(opener: impl AsRef<[u8]>, closer: impl AsRef<[u8]>) -> DelimPair {
    DelimPair {
        opener: non_empty(opener, "comment opener"),
        closer: non_empty(closer, "comment closer"),
    }
}

fn string_delim(
    opener: impl AsRef<[u8]>,
    closer: impl AsRef<[u8]>,
    token_type: TokenType,
) -> StringDelim {
    StringDelim {
        opener: non_empty(opener, "string opener"),
        closer: non_empty(closer, "string closer"),
        token_type,
    }
}

static_assertions::assert_impl_all!(RuleTable: Send, Sync, Clone);
