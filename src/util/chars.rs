//! Character classification used by the cursor and the terminal
//! parser.

/// Return the value of an ASCII decimal digit, or `None` for any
/// other character (including non-ASCII digits).
pub fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        c.to_digit(10)
    } else {
        None
    }
}

/// Return true for characters that separate tokens but carry no
/// meaning: space, tab, carriage return, and line feed.
pub fn is_insignificant_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(digit_value(c), Some(i as u32));
        }
        assert_eq!(digit_value('a'), None);
        assert_eq!(digit_value('+'), None);
        // Arabic-Indic digit three
        assert_eq!(digit_value('\u{0663}'), None);
    }

    #[test]
    fn whitespace() {
        for c in [' ', '\t', '\r', '\n'] {
            assert!(is_insignificant_whitespace(c));
        }
        // Vertical tab and NBSP are *not* insignificant.
        assert!(!is_insignificant_whitespace('\u{0b}'));
        assert!(!is_insignificant_whitespace('\u{a0}'));
        assert!(!is_insignificant_whitespace('x'));
    }
}
