//! Code point formatting utilities.
//!
//! Helpers for rendering escape sequences, Unicode code points and
//! characters that would be invisible or misleading when printed raw.

use crate::ident::charset::ESCAPE_MARKER;

/// Format a UTF-16 code unit as an escape sequence (e.g., "@002e").
pub fn format_escape(unit: u16) -> String {
    format!("{}{:04x}", ESCAPE_MARKER, unit)
}

/// Format a code point in U+ notation (e.g., "U+002E", "U+1F600").
pub fn format_code_point(code: u32) -> String {
    format!("U+{:04X}", code)
}

/// Render a character for terminal output.
///
/// Control characters and whitespace other than a plain space are shown
/// with Rust escape syntax so that they stay visible.
pub fn display_char(c: char) -> String {
    if c.is_control() || (c.is_whitespace() && c != ' ') {
        c.escape_default().to_string()
    } else {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_escape() {
        assert_eq!(format_escape(0x2e), "@002e");
        assert_eq!(format_escape(0), "@0000");
        assert_eq!(format_escape(0xd83d), "@d83d");
    }

    #[test]
    fn test_format_code_point() {
        assert_eq!(format_code_point(0x2e), "U+002E");
        assert_eq!(format_code_point(0x1f600), "U+1F600");
    }

    #[test]
    fn test_display_char() {
        assert_eq!(display_char('.'), ".");
        assert_eq!(display_char(' '), " ");
        assert_eq!(display_char('\t'), "\\t");
        assert_eq!(display_char('\0'), "\\u{0}");
        assert_eq!(display_char('é'), "é");
    }
}
