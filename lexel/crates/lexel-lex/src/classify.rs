//! Byte classification utilities.
//!
//! The engine works on raw byte values; nothing here is Unicode-aware.
//! Whitespace follows the C locale and digits cover bases 2 through 36.

/// Smallest base accepted by [`digit_value`].
pub const MIN_BASE: u32 = 2;

/// Largest base accepted by [`digit_value`]: ten decimal digits plus
/// twenty-six letters.
pub const MAX_BASE: u32 = 36;

/// Returns true for the line terminator.
#[inline]
pub fn is_line_terminator(byte: u8) -> bool {
    byte == b'\n'
}

/// Returns true for the C-locale whitespace set: space, `\t`, `\n`, `\v`,
/// `\f` and `\r`.
///
/// # Example
///
/// ```
/// use lexel_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(0x0b));
/// assert!(!is_whitespace(b'_'));
/// ```
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Returns the value of `byte` as a digit in `base`, if it is one.
///
/// `0`-`9` map to 0-9; letters map case-insensitively to 10-35, so `a` and
/// `A` are both 10. A digit is only valid when its value is below `base`.
///
/// # Panics
///
/// Panics if `base` is outside `MIN_BASE..=MAX_BASE`.
///
/// # Example
///
/// ```
/// use lexel_lex::classify::digit_value;
///
/// assert_eq!(digit_value(b'7', 8), Some(7));
/// assert_eq!(digit_value(b'8', 8), None);
/// assert_eq!(digit_value(b'f', 16), Some(15));
/// assert_eq!(digit_value(b'Z', 36), Some(35));
/// ```
pub fn digit_value(byte: u8, base: u32) -> Option<u32> {
    assert!(
        (MIN_BASE..=MAX_BASE).contains(&base),
        "digit base {base} outside {MIN_BASE}..={MAX_BASE}"
    );

    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return None,
    };
    let value = u32::from(value);
    (value < base).then_some(value)
}
