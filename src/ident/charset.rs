//! The MySQL filename-safe alphabet and escape sequence layout.
//!
//! Identifiers that contain only `[A-Za-z0-9_$]` can be used as file names
//! verbatim. Every other character is written as an escape sequence: the
//! marker `@` followed by four lowercase hex digits.

/// Character that introduces an escape sequence.
pub const ESCAPE_MARKER: char = '@';

/// Number of hex digits following [`ESCAPE_MARKER`].
pub const ESCAPE_HEX_DIGITS: usize = 4;

/// Total length of one escape sequence in characters (`@` + 4 hex digits).
pub const ESCAPE_LEN: usize = 1 + ESCAPE_HEX_DIGITS;

/// Returns true if `c` may appear unescaped in an encoded identifier.
///
/// The safe alphabet is ASCII word characters plus `$`. Non-ASCII letters
/// and digits are not safe.
pub fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Returns true if every character of `s` is in the safe alphabet.
pub fn is_safe_str(s: &str) -> bool {
    s.chars().all(is_safe_char)
}
