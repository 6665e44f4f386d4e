//! Command modules for the lexelt CLI.

pub mod tokens;

pub use tokens::{run_tokens, TokensArgs};
