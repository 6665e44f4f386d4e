//! Core error types for lexel-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for arena allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The requested alignment is zero or not a power of two
    #[error("alignment ({0}) must be a power of two")]
    InvalidAlignment(usize),

    /// The padded request does not fit in the remaining capacity
    #[error("arena exhausted: requested {requested} bytes, {available} available")]
    OutOfSpace {
        /// Bytes requested, including alignment padding
        requested: usize,
        /// Bytes left in the backing buffer
        available: usize,
    },
}

/// Result type alias for arena operations
pub type ArenaResult<T> = std::result::Result<T, ArenaError>;
