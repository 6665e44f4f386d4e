//! Lexelt CLI - dump the token stream of a source file.
//!
//! This is the main entry point for the lexelt CLI application. It uses clap
//! for argument parsing and dispatches to the command handlers.

mod commands;
mod error;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_tokens, TokensArgs};
use error::{LexeltError, Result};

/// Lexelt - A token dumper for lexel rule tables
///
/// Lexes source files with a rule table described in TOML and prints the
/// resulting tokens.
#[derive(Parser, Debug)]
#[command(name = "lexelt")]
#[command(author = "Lexel Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A token dumper for lexel rule tables", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXELT_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, global = true, env = "LEXELT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lexelt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Prints one `line:column<TAB>type<TAB>text` line per token, ending with
    /// the END sentinel. Exits with an error if any error token was produced.
    Tokens(TokensCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to lex
    source: PathBuf,

    /// TOML rule file
    #[arg(short, long, env = "LEXELT_RULES")]
    rules: PathBuf,

    /// Exit successfully even if error tokens were produced
    #[arg(long)]
    allow_errors: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    execute_command(cli.command)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never interleave with the token listing.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LexeltError::Logging(e.to_string()))?;

    Ok(())
}

/// Execute the selected command.
fn execute_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Tokens(cmd) => {
            let source = cmd.source.clone();
            let args = TokensArgs {
                source: cmd.source,
                rules: cmd.rules,
                allow_errors: cmd.allow_errors,
            };
            run_tokens(args).with_context(|| format!("while lexing {}", source.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_tokens() {
        let cli = Cli::parse_from(["lexelt", "tokens", "input.src", "--rules", "lang.toml"]);
        match cli.command {
            Commands::Tokens(cmd) => {
                assert_eq!(cmd.source, PathBuf::from("input.src"));
                assert_eq!(cmd.rules, PathBuf::from("lang.toml"));
                assert!(!cmd.allow_errors);
            }
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "lexelt",
            "tokens",
            "input.src",
            "-r",
            "lang.toml",
            "--allow-errors",
            "--verbose",
            "--no-color",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        match cli.command {
            Commands::Tokens(cmd) => assert!(cmd.allow_errors),
        }
    }

    #[test]
    fn test_cli_requires_rules() {
        let result = Cli::try_parse_from(["lexelt", "tokens", "input.src"]);
        if std::env::var_os("LEXELT_RULES").is_none() {
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["lexelt"]).is_err());
    }
}
