//! Predefined character-class tables.

/// Lowercase ASCII letters.
pub const ALPHABET_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const ALPHABET_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Mixed-case ASCII letters.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &[u8] = b"0123456789";

/// Printable symbols included in [`ALL`].
pub const SYMBOLS: &[u8] = b"!#$%&()*+-./:<=>?@[]^_|~";

/// Letters, digits and symbols. Used when a tag names no (or an unknown) keyword.
pub const ALL: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&()*+-./:<=>?@[]^_|~";

/// Low control bytes `0..=15`.
pub const NULL: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_union() {
        let expected: Vec<u8> = [ALPHABET, DIGITS, SYMBOLS].concat();
        assert_eq!(ALL, expected.as_slice());
    }

    #[test]
    fn test_all_excludes_tag_delimiters() {
        assert!(!ALL.contains(&b'{'));
        assert!(!ALL.contains(&b'}'));
        assert!(!ALL.contains(&b';'));
    }
}
