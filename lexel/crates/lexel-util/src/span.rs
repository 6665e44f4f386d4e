//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets into a buffer plus the line and column where a range begins.
//! Both line and column are zero-based, matching the cursor that produces
//! them.
//!
//! # Examples
//!
//! ```
//! use lexel_util::span::{Location, Span};
//!
//! let span = Span::new(10, 20, Location::new(1, 5));
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.location.line, 1);
//! ```

use std::fmt;

/// A zero-based line/column position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Line number (0-based)
    pub line: u32,
    /// Column number (0-based, in bytes)
    pub column: u32,
}

impl Location {
    /// The first byte of a buffer
    pub const START: Location = Location { line: 0, column: 0 };

    /// Create a new location
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` represents a half-open byte range `[start, end)` together with
/// the location of its first byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Location of the first byte
    pub location: Location,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use lexel_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        location: Location::START,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `location` - Line and column of `start`
    #[inline]
    pub fn new(start: usize, end: usize, location: Location) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self {
            start,
            end,
            location,
        }
    }

    /// Create an empty span at `offset`
    #[inline]
    pub fn point(offset: usize, location: Location) -> Self {
        Self::new(offset, offset, location)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use lexel_util::span::{Location, Span};
    ///
    /// let span = Span::new(10, 20, Location::START);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Borrow the bytes this span covers
    ///
    /// Returns `None` if the span does not fit inside `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(3, 7, Location::new(2, 1));
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 7);
        assert_eq!(span.len(), 4);
        assert_eq!(span.location, Location::new(2, 1));
    }

    #[test]
    fn test_point_is_empty() {
        let span = Span::point(5, Location::new(0, 5));
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(5));
    }

    #[test]
    fn test_slice() {
        let source = b"let x = 42;";
        let span = Span::new(4, 5, Location::new(0, 4));
        assert_eq!(span.slice(source), Some(&b"x"[..]));
        assert_eq!(Span::new(8, 40, Location::START).slice(source), None);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new(3, 14).to_string(), "3:14");
        assert_eq!(Location::START.to_string(), "0:0");
    }
}
