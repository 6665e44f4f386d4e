//! Byte cursor for traversing source buffers.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while moving through a source buffer, together with the matching
//! primitives the tokenizer is built from. Every construct comes as a pair:
//! a `check_*` method that only looks, and a `match_*` method that looks and
//! consumes on success.
//!
//! Line and column are zero-based. Moving backwards over a line terminator
//! recomputes the column from the buffer, since it cannot be recovered by
//! decrementing.

use lexel_util::Location;

use crate::classify::{digit_value, is_line_terminator};

/// A cursor over a borrowed byte buffer.
///
/// All movement saturates at the buffer bounds: the cursor never points
/// before the first byte or past the last one.
///
/// # Example
///
/// ```
/// use lexel_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"let x = 42;");
///
/// assert_eq!(cursor.peek(), Some(b'l'));
/// assert_eq!(cursor.advance(), Some(b'l'));
/// assert_eq!(cursor.peek(), Some(b'e'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte offset in the source.
    position: usize,

    /// Current line number (0-based).
    line: u32,

    /// Current column number (0-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 0,
            column: 0,
        }
    }

    /// Returns the byte under the cursor, or `None` at the end.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Returns the byte `offset` bytes ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use lexel_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"abc");
    /// assert_eq!(cursor.peek_at(2), Some(b'c'));
    /// assert_eq!(cursor.peek_at(3), None);
    /// ```
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position.checked_add(offset)?).copied()
    }

    /// Consumes one byte and returns it.
    ///
    /// A line terminator bumps the line and resets the column. Returns
    /// `None`, without moving, at the end of the source.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        if is_line_terminator(byte) {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Consumes `count` bytes.
    ///
    /// Best effort: if fewer than `count` bytes remain, everything left is
    /// consumed and `false` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use lexel_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"abcdef");
    /// assert!(cursor.advance_by(3));
    /// assert_eq!(cursor.peek(), Some(b'd'));
    /// assert!(!cursor.advance_by(10));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn advance_by(&mut self, count: usize) -> bool {
        for _ in 0..count {
            if self.advance().is_none() {
                return false;
            }
        }
        true
    }

    /// Steps back one byte and returns it.
    ///
    /// Returns `None`, without moving, at the start of the source.
    pub fn rewind(&mut self) -> Option<u8> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        let byte = self.source[self.position];
        if is_line_terminator(byte) {
            self.line = self.line.saturating_sub(1);
            self.column = self.column_at(self.position);
        } else {
            self.column = self.column.saturating_sub(1);
        }
        Some(byte)
    }

    /// Steps back `count` bytes.
    ///
    /// Best effort: stops at the start of the source and returns `false` if
    /// fewer than `count` bytes were behind the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use lexel_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"ab\ncd");
    /// cursor.advance_by(4);
    /// assert_eq!((cursor.line(), cursor.column()), (1, 1));
    /// assert!(cursor.rewind_by(2));
    /// assert_eq!((cursor.line(), cursor.column()), (0, 2));
    /// ```
    pub fn rewind_by(&mut self, count: usize) -> bool {
        for _ in 0..count {
            if self.rewind().is_none() {
                return false;
            }
        }
        true
    }

    /// Column of `position`, found by scanning back to the previous line
    /// terminator or the start of the buffer.
    fn column_at(&self, position: usize) -> u32 {
        let line_start = self.source[..position]
            .iter()
            .rposition(|&byte| is_line_terminator(byte))
            .map_or(0, |index| index + 1);
        (position - line_start) as u32
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true if the cursor is at the start of the source.
    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Returns the current line number (0-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (0-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current line and column.
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Returns the current byte offset in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the full source buffer.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Returns the source from the current position to the end.
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position..]
    }

    /// Returns the bytes from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use lexel_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"let x");
    /// let start = cursor.position();
    /// cursor.advance_by(3);
    /// assert_eq!(cursor.slice_from(start), b"let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start.min(self.position)..self.position]
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        debug_assert!(snapshot.position <= self.source.len());
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }

    /// Moves the cursor back to the first byte, at line 0, column 0.
    pub fn reset(&mut self) {
        self.restore(CursorSnapshot::default());
    }

    // ------------------------------------------------------------------
    // Matching primitives
    // ------------------------------------------------------------------

    /// Returns true if the current byte is one of `set`.
    ///
    /// # Example
    ///
    /// ```
    /// use lexel_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"+1");
    /// assert!(cursor.check_chars(b"+-"));
    /// assert!(cursor.match_chars(b"+-"));
    /// assert!(!cursor.match_chars(b"+-"));
    /// ```
    #[inline]
    pub fn check_chars(&self, set: &[u8]) -> bool {
        self.peek().is_some_and(|byte| set.contains(&byte))
    }

    /// Consumes the current byte if it is one of `set`.
    pub fn match_chars(&mut self, set: &[u8]) -> bool {
        if self.check_chars(set) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the upcoming bytes are exactly `pattern`.
    ///
    /// A pattern longer than the remaining input never matches.
    #[inline]
    pub fn check_string(&self, pattern: &[u8]) -> bool {
        self.remaining().starts_with(pattern)
    }

    /// Consumes `pattern` if the upcoming bytes are exactly it.
    pub fn match_string(&mut self, pattern: &[u8]) -> bool {
        if self.check_string(pattern) {
            self.advance_by(pattern.len());
            true
        } else {
            false
        }
    }

    /// Returns true if the upcoming bytes match the first `n` bytes of
    /// `pattern`.
    ///
    /// Unlike [`Cursor::check_string`], the comparison is truncated rather
    /// than failed when the input runs out: `n` is clamped to the pattern
    /// length and then to the bytes remaining. At the end of the input the
    /// comparison is empty and always succeeds.
    ///
    /// # Example
    ///
    /// ```
    /// use lexel_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"ab");
    /// assert!(cursor.check_string_n(b"abc", 3));
    /// assert!(!cursor.check_string(b"abc"));
    /// ```
    pub fn check_string_n(&self, pattern: &[u8], n: usize) -> bool {
        let len = self.string_n_len(pattern, n);
        self.remaining()[..len] == pattern[..len]
    }

    /// Consumes the clamped prefix compared by [`Cursor::check_string_n`].
    pub fn match_string_n(&mut self, pattern: &[u8], n: usize) -> bool {
        if self.check_string_n(pattern, n) {
            self.advance_by(self.string_n_len(pattern, n));
            true
        } else {
            false
        }
    }

    fn string_n_len(&self, pattern: &[u8], n: usize) -> usize {
        n.min(pattern.len()).min(self.remaining().len())
    }

    /// Returns the index of the first pattern in `patterns` that matches.
    ///
    /// Patterns are tried in order; the first match wins even when a later
    /// pattern would match more input.
    ///
    /// # Example
    ///
    /// ```
    /// use lexel_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"==");
    /// assert_eq!(cursor.check_any_string(["=", "=="]), Some(0));
    /// assert_eq!(cursor.check_any_string(["==", "="]), Some(0));
    /// assert_eq!(cursor.check_any_string(["!="]), None);
    /// ```
    pub fn check_any_string<I>(&self, patterns: I) -> Option<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        patterns
            .into_iter()
            .position(|pattern| self.check_string(pattern.as_ref()))
    }

    /// Consumes the first pattern in `patterns` that matches and returns
    /// its index.
    pub fn match_any_string<I>(&mut self, patterns: I) -> Option<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for (index, pattern) in patterns.into_iter().enumerate() {
            if self.match_string(pattern.as_ref()) {
                return Some(index);
            }
        }
        None
    }

    /// Returns true if the current byte is a digit in `base`.
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `2..=36`.
    ///
    /// # Example
    ///
    /// ```
    /// use lexel_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"f");
    /// assert!(cursor.check_digit(16));
    /// assert!(!cursor.check_digit(10));
    /// ```
    pub fn check_digit(&self, base: u32) -> bool {
        match self.peek() {
            Some(byte) => digit_value(byte, base).is_some(),
            None => {
                // Validate the base even when there is nothing to look at.
                let _ = digit_value(b'0', base);
                false
            }
        }
    }

    /// Consumes the current byte if it is a digit in `base`.
    pub fn match_digit(&mut self, base: u32) -> bool {
        if self.check_digit(base) {
            self.advance();
            true
        } else {
            false
        }
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (0-based).
    pub line: u32,
    /// Column number (0-based).
    pub column: u32,
}

impl CursorSnapshot {
    /// Returns the line and column of the snapshot.
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}
