//! Tokens command implementation.
//!
//! Loads a rule table from TOML, lexes a source file with it and prints one
//! line per token, sentinel included.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use lexel_lex::{error_message, Lexer, RuleConfig, RuleTable, Token};
use tracing::{debug, info, warn};

use crate::error::{LexeltError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source file to lex.
    pub source: PathBuf,
    /// TOML rule file.
    pub rules: PathBuf,
    /// Exit successfully even when error tokens were produced.
    pub allow_errors: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    /// Execute the command, writing the listing to stdout.
    pub fn run(&self) -> Result<()> {
        let rules = RuleConfig::load_from_path(&self.args.rules)?.into_rule_table()?;
        debug!(rules = %self.args.rules.display(), "loaded rule table");

        let source = fs::read(&self.args.source).map_err(|source| LexeltError::Source {
            path: self.args.source.clone(),
            source,
        })?;

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let summary = write_tokens(&source, &rules, &mut out)?;
        out.flush()?;

        info!(
            source = %self.args.source.display(),
            tokens = summary.tokens,
            errors = summary.errors,
            "lexed source"
        );

        if summary.errors > 0 && !self.args.allow_errors {
            return Err(LexeltError::LexicalErrors {
                count: summary.errors,
            });
        }
        Ok(())
    }
}

/// Counts gathered while writing a token listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Tokens written, sentinel included.
    pub tokens: usize,
    /// Error tokens among them.
    pub errors: usize,
}

/// Lex `source` and write `line:column<TAB>type<TAB>text` per token.
pub fn write_tokens<W: Write>(source: &[u8], rules: &RuleTable, out: &mut W) -> Result<Summary> {
    let mut lexer = Lexer::new(source, rules);
    let mut summary = Summary::default();

    loop {
        let token = lexer.next_token();
        write_token(out, &token)?;
        summary.tokens += 1;

        if token.is_error() {
            summary.errors += 1;
            if let Some(message) = error_message(token.token_type) {
                warn!(location = %token.location(), "{message}");
            }
        }
        if token.is_end() {
            return Ok(summary);
        }
    }
}

fn write_token<W: Write>(out: &mut W, token: &Token<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}",
        token.location(),
        token.token_type,
        token.text.escape_ascii()
    )
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    TokensCommand::new(args).run()
}
