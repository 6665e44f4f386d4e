//! lexel-util - Foundation types shared by the lexel crates
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate holds the small, dependency-light pieces that the tokenizer
//! engine and its tooling build on:
//!
//! - [`span`] - byte spans and zero-based line/column locations
//! - [`arena`] - a bump allocator over a caller-supplied buffer
//! - [`error`] - error types for the utilities above
//!
//! # Example
//!
//! ```
//! use lexel_util::{Arena, Location, Span};
//!
//! let span = Span::new(4, 9, Location::new(0, 4));
//! assert_eq!(span.len(), 5);
//!
//! let mut backing = [0u8; 64];
//! let mut arena = Arena::new(&mut backing);
//! let bytes = arena.alloc_copy(b"hello", 1).unwrap();
//! assert_eq!(bytes, b"hello");
//! ```

#![warn(missing_docs)]

pub mod arena;
pub mod error;
pub mod span;

pub use arena::Arena;
pub use error::{ArenaError, ArenaResult};
pub use span::{Location, Span};
