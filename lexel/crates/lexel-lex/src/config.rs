//! Rule tables loaded from TOML.
//!
//! [`RuleConfig`] mirrors [`RuleTable`] field for field, with patterns
//! written as strings and token types as plain integers. Everything is
//! optional; a missing list is empty and missing integer or float sections
//! disable those literals.
//!
//! ```toml
//! word_rule = "word"
//! default_word_type = 1
//! line_comments = ["//"]
//! nestable_comments = [{ opener = "/*", closer = "*/" }]
//! escape_chars = "\\"
//! line_strings = [{ opener = "\"", closer = "\"", token_type = 2 }]
//! punctuation = [{ pattern = "==", token_type = 10 }]
//! keywords = [{ pattern = "def", token_type = 20 }]
//!
//! [integers]
//! token_type = 3
//! default_base = 10
//! prefixes = [{ pattern = "0x", base = 16 }]
//!
//! [floats]
//! token_type = 4
//! default_base = 10
//! exponent_marker = "e"
//! exponent_signs = "+-"
//! radix_separators = "."
//! ```
//!
//! Unlike [`crate::RuleTableBuilder`], which panics on programmer errors,
//! conversion validates its input and reports a [`ConfigError`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{MAX_BASE, MIN_BASE};
use crate::rules::{
    DelimPair, FloatPrefix, FloatRules, IntegerRules, KeywordMap, NumberPrefix, Pattern,
    RuleTable, StringDelim, WordRule,
};
use crate::token::TokenType;

/// Errors raised while loading a rule configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rule file could not be read.
    #[error("failed to read rule file {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML was malformed or did not match the expected shape.
    #[error("failed to parse rules: {0}")]
    Parse(#[from] toml::de::Error),

    /// A caller token type was negative.
    #[error("{field}: token type {value} is negative")]
    NegativeTokenType {
        /// Offending field.
        field: String,
        /// Offending value.
        value: i32,
    },

    /// A numeric base was outside 2..=36.
    #[error("{field}: base {base} outside 2..=36")]
    InvalidBase {
        /// Offending field.
        field: String,
        /// Offending value.
        base: u32,
    },

    /// A pattern was empty.
    #[error("{field}: pattern must not be empty")]
    EmptyPattern {
        /// Offending field.
        field: String,
    },
}

/// Result type alias using ConfigError.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Opener/closer pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DelimConfig {
    /// Opening text.
    pub opener: String,
    /// Closing text.
    pub closer: String,
}

/// String delimiter pair and token type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StringConfig {
    /// Opening text.
    pub opener: String,
    /// Closing text.
    pub closer: String,
    /// Token type of the string.
    pub token_type: i32,
}

/// Pattern and token type, for punctuation and keywords.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    /// Text to match.
    pub pattern: String,
    /// Token type on a match.
    pub token_type: i32,
}

/// Numeric prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PrefixConfig {
    /// Prefix text.
    pub pattern: String,
    /// Digit base after the prefix.
    pub base: u32,
    /// Exponent marker; floats only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub exponent_marker: String,
}

/// `[integers]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IntegerConfig {
    /// Token type of integers.
    pub token_type: i32,
    /// Base of unprefixed integers.
    #[serde(default)]
    pub default_base: Option<u32>,
    /// Prefixes, in match order.
    #[serde(default)]
    pub prefixes: Vec<PrefixConfig>,
    /// Suffixes, in match order.
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// `[floats]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FloatConfig {
    /// Token type of floats.
    pub token_type: i32,
    /// Base of unprefixed floats.
    #[serde(default)]
    pub default_base: Option<u32>,
    /// Exponent marker of unprefixed floats.
    #[serde(default)]
    pub exponent_marker: String,
    /// Prefixes, in match order.
    #[serde(default)]
    pub prefixes: Vec<PrefixConfig>,
    /// Suffixes, in match order.
    #[serde(default)]
    pub suffixes: Vec<String>,
    /// Exponent sign bytes.
    #[serde(default)]
    pub exponent_signs: String,
    /// Radix separator bytes.
    #[serde(default)]
    pub radix_separators: String,
}

/// A rule table as written in a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// How words are delimited.
    pub word_rule: WordRule,
    /// Token type of words that are not keywords.
    pub default_word_type: i32,
    /// Emit LINE_ENDING tokens.
    pub emit_line_endings: bool,
    /// Collapse runs of line endings.
    pub coalesce_line_endings: bool,
    /// Line-comment openers.
    pub line_comments: Vec<String>,
    /// Nestable block comments.
    pub nestable_comments: Vec<DelimConfig>,
    /// Unnestable block comments.
    pub unnestable_comments: Vec<DelimConfig>,
    /// Line-bound strings.
    pub line_strings: Vec<StringConfig>,
    /// Multiline strings.
    pub multiline_strings: Vec<StringConfig>,
    /// Escape bytes.
    pub escape_chars: String,
    /// Digit separator bytes.
    pub digit_separators: String,
    /// Number signs.
    pub number_signs: Vec<String>,
    /// Punctuation, in match order.
    pub punctuation: Vec<PatternConfig>,
    /// Keywords.
    pub keywords: Vec<PatternConfig>,
    /// Integer literal rules.
    pub integers: Option<IntegerConfig>,
    /// Float literal rules.
    pub floats: Option<FloatConfig>,
}

impl RuleConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration and turn it into a rule table.
    pub fn into_rule_table(self) -> ConfigResult<RuleTable> {
        let mut keywords = KeywordMap::default();
        for (i, keyword) in self.keywords.iter().enumerate() {
            let field = format!("keywords[{i}]");
            let pattern = non_empty(&keyword.pattern, &field)?;
            let token_type = token_type(keyword.token_type, &field)?;
            keywords.entry(pattern).or_insert(token_type);
        }

        Ok(RuleTable {
            line_comments: self
                .line_comments
                .iter()
                .enumerate()
                .map(|(i, opener)| non_empty(opener, &format!("line_comments[{i}]")))
                .collect::<ConfigResult<_>>()?,
            nestable_comments: delim_pairs(&self.nestable_comments, "nestable_comments")?,
            unnestable_comments: delim_pairs(&self.unnestable_comments, "unnestable_comments")?,
            line_strings: string_delims(&self.line_strings, "line_strings")?,
            multiline_strings: string_delims(&self.multiline_strings, "multiline_strings")?,
            escape_chars: self.escape_chars.into_bytes(),
            digit_separators: self.digit_separators.into_bytes(),
            number_signs: self
                .number_signs
                .iter()
                .enumerate()
                .map(|(i, sign)| non_empty(sign, &format!("number_signs[{i}]")))
                .collect::<ConfigResult<_>>()?,
            integers: self.integers.as_ref().map(integer_rules).transpose()?,
            floats: self.floats.as_ref().map(float_rules).transpose()?,
            punctuation: self
                .punctuation
                .iter()
                .enumerate()
                .map(|(i, punct)| {
                    let field = format!("punctuation[{i}]");
                    Ok(Pattern {
                        pattern: non_empty(&punct.pattern, &field)?,
                        token_type: token_type(punct.token_type, &field)?,
                    })
                })
                .collect::<ConfigResult<_>>()?,
            keywords,
            default_word_type: token_type(self.default_word_type, "default_word_type")?,
            word_rule: self.word_rule,
            emit_line_endings: self.emit_line_endings,
            coalesce_line_endings: self.coalesce_line_endings,
            hooks: None,
        })
    }
}

fn token_type(value: i32, field: &str) -> ConfigResult<TokenType> {
    TokenType::checked(value).ok_or_else(|| ConfigError::NegativeTokenType {
        field: field.to_string(),
        value,
    })
}

fn base(base: u32, field: &str) -> ConfigResult<u32> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(base)
    } else {
        Err(ConfigError::InvalidBase {
            field: field.to_string(),
            base,
        })
    }
}

fn non_empty(pattern: &str, field: &str) -> ConfigResult<Vec<u8>> {
    if pattern.is_empty() {
        return Err(ConfigError::EmptyPattern {
            field: field.to_string(),
        });
    }
    Ok(pattern.as_bytes().to_vec())
}

fn delim_pairs(pairs: &[DelimConfig], name: &str) -> ConfigResult<Vec<DelimPair>> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let field = format!("{name}[{i}]");
            Ok(DelimPair {
                opener: non_empty(&pair.opener, &field)?,
                closer: non_empty(&pair.closer, &field)?,
            })
        })
        .collect()
}

fn string_delims(delims: &[StringConfig], name: &str) -> ConfigResult<Vec<StringDelim>> {
    delims
        .iter()
        .enumerate()
        .map(|(i, delim)| {
            let field = format!("{name}[{i}]");
            Ok(StringDelim {
                opener: non_empty(&delim.opener, &field)?,
                closer: non_empty(&delim.closer, &field)?,
                token_type: token_type(delim.token_type, &field)?,
            })
        })
        .collect()
}

fn suffixes(suffixes: &[String], name: &str) -> ConfigResult<Vec<Vec<u8>>> {
    suffixes
        .iter()
        .enumerate()
        .map(|(i, suffix)| non_empty(suffix, &format!("{name}.suffixes[{i}]")))
        .collect()
}

fn integer_rules(config: &IntegerConfig) -> ConfigResult<IntegerRules> {
    Ok(IntegerRules {
        token_type: token_type(config.token_type, "integers.token_type")?,
        default_base: config
            .default_base
            .map(|b| base(b, "integers.default_base"))
            .transpose()?,
        prefixes: config
            .prefixes
            .iter()
            .enumerate()
            .map(|(i, prefix)| {
                let field = format!("integers.prefixes[{i}]");
                Ok(NumberPrefix {
                    pattern: non_empty(&prefix.pattern, &field)?,
                    base: base(prefix.base, &field)?,
                })
            })
            .collect::<ConfigResult<_>>()?,
        suffixes: suffixes(&config.suffixes, "integers")?,
    })
}

fn float_rules(config: &FloatConfig) -> ConfigResult<FloatRules> {
    Ok(FloatRules {
        token_type: token_type(config.token_type, "floats.token_type")?,
        default_base: config
            .default_base
            .map(|b| base(b, "floats.default_base"))
            .transpose()?,
        default_exponent_marker: config.exponent_marker.as_bytes().to_vec(),
        prefixes: config
            .prefixes
            .iter()
            .enumerate()
            .map(|(i, prefix)| {
                let field = format!("floats.prefixes[{i}]");
                Ok(FloatPrefix {
                    pattern: non_empty(&prefix.pattern, &field)?,
                    base: base(prefix.base, &field)?,
                    exponent_marker: prefix.exponent_marker.as_bytes().to_vec(),
                })
            })
            .collect::<ConfigResult<_>>()?,
        suffixes: suffixes(&config.suffixes, "floats")?,
        exponent_signs: config.exponent_signs.as_bytes().to_vec(),
        radix_separators: config.radix_separators.as_bytes().to_vec(),
    })
}
