//! Helper module with utilities for strings meant for terminals.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Determine whether the character is printable.
///
/// Printable characters are letters, marks, numbers, punctuation, symbols,
/// and the ASCII space. Control and format characters, other spaces, line and
/// paragraph separators, private use characters, surrogates, and unassigned
/// code points are not.
pub fn is_printable(c: char) -> bool {
    use self::GeneralCategory::*;

    if c == ' ' {
        return true;
    }

    !matches!(
        get_general_category(c),
        Control
            | Format
            | PrivateUse
            | Surrogate
            | Unassigned
            | SpaceSeparator
            | LineSeparator
            | ParagraphSeparator
    )
}

/// Remove all characters that are not printable.
///
/// This function removes the ESC character starting ANSI escape sequences but
/// not the rest of the sequence.
///
/// # Example
///
/// ```
/// # use prettyterm::util::strip_non_print;
/// assert_eq!(strip_non_print("\x1b[1mbold\x1b[0m"), "[1mbold[0m");
/// assert_eq!(strip_non_print("tab\tand\nnewline"), "tabandnewline");
/// ```
pub fn strip_non_print(s: &str) -> String {
    s.chars().filter(|c| is_printable(*c)).collect()
}

#[cfg(test)]
mod test {
    use super::{is_printable, strip_non_print};

    #[test]
    fn test_printable() {
        for c in ['a', 'Z', '0', '~', ' ', 'é', 'ß', '✶', '😜', '\u{0301}', '中'] {
            assert!(is_printable(c), "{:?} should be printable", c);
        }

        for c in [
            '\x00', '\x07', '\x1b', '\t', '\n', '\r', '\x7f', '\u{0085}', '\u{009b}', '\u{00a0}',
            '\u{00ad}', '\u{200b}', '\u{200e}', '\u{2028}', '\u{2029}', '\u{3000}', '\u{feff}',
            '\u{e000}', '\u{10fffd}',
        ] {
            assert!(!is_printable(c), "{:?} should not be printable", c);
        }
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip_non_print(""), "");
        assert_eq!(strip_non_print("not bold"), "not bold");
        assert_eq!(
            strip_non_print("\x1b[1mnot bold\x1b[0m"),
            "[1mnot bold[0m"
        );
        assert_eq!(strip_non_print("a\u{00a0}b\u{200b}c"), "abc");
        assert_eq!(strip_non_print("héllo wörld ✶"), "héllo wörld ✶");
        assert_eq!(strip_non_print("\r\n\t"), "");
    }

    #[test]
    fn test_unassigned() {
        assert!(!is_printable('\u{0378}'));
        assert!(!is_printable('\u{ffff}'));
        assert_eq!(strip_non_print("a\u{0378}b\u{ffff}c"), "abc");
    }
}
