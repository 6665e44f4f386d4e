//! Error handling module for the lexelt CLI.

use std::path::PathBuf;

use lexel_lex::ConfigError;
use thiserror::Error;

/// Main error type for the lexelt CLI application.
#[derive(Error, Debug)]
pub enum LexeltError {
    /// The rule file could not be loaded or validated.
    #[error("Rule error: {0}")]
    Rules(#[from] ConfigError),

    /// The source file could not be read.
    #[error("failed to read source {}: {source}", .path.display())]
    Source {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the token listing failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source produced error tokens.
    #[error("{count} lexical error(s)")]
    LexicalErrors {
        /// Number of error tokens.
        count: usize,
    },

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias using LexeltError.
pub type Result<T> = std::result::Result<T, LexeltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_errors_display() {
        let err = LexeltError::LexicalErrors { count: 3 };
        assert_eq!(err.to_string(), "3 lexical error(s)");
    }

    #[test]
    fn test_rules_error_display() {
        let err = LexeltError::from(ConfigError::EmptyPattern {
            field: "keywords[0]".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Rule error: keywords[0]: pattern must not be empty"
        );
    }

    #[test]
    fn test_source_error_display() {
        let err = LexeltError::Source {
            path: PathBuf::from("missing.src"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read source missing.src: not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LexeltError = io_err.into();
        assert!(matches!(err, LexeltError::Io(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
