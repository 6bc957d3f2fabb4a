//! Letter membership test used by the directional comparator.
//!
//! The alphabet is fixed at compile time: ASCII letters plus the CP1251
//! single-byte Cyrillic blocks. It is deliberately not driven by the
//! process locale, so sorting the same file always produces the same order.

/// CP1251 upper-case Cyrillic block (А..Я).
const CYRILLIC_UPPER_FIRST: u8 = 0xC0;
const CYRILLIC_UPPER_LAST: u8 = 0xDF;

/// CP1251 lower-case Cyrillic block (а..я).
const CYRILLIC_LOWER_FIRST: u8 = 0xE0;
const CYRILLIC_LOWER_LAST: u8 = 0xFF;

/// Returns true if `byte` belongs to one of the four letter ranges.
#[inline]
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase()
        || byte.is_ascii_uppercase()
        || (CYRILLIC_UPPER_FIRST..=CYRILLIC_UPPER_LAST).contains(&byte)
        || (CYRILLIC_LOWER_FIRST..=CYRILLIC_LOWER_LAST).contains(&byte)
}

/// Position of the first letter byte in `bytes`, if any.
#[inline]
pub fn first_letter(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| is_letter(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_letters() {
        assert!(is_letter(b'a'));
        assert!(is_letter(b'z'));
        assert!(is_letter(b'A'));
        assert!(is_letter(b'Z'));
        assert!(is_letter(b'm'));
    }

    #[test]
    fn test_non_letters() {
        assert!(!is_letter(b'0'));
        assert!(!is_letter(b'9'));
        assert!(!is_letter(b' '));
        assert!(!is_letter(b'\t'));
        assert!(!is_letter(b'!'));
        assert!(!is_letter(b'?'));
        assert!(!is_letter(b'-'));
        assert!(!is_letter(0x00));
        assert!(!is_letter(b'@')); // just below 'A'
        assert!(!is_letter(b'[')); // just above 'Z'
        assert!(!is_letter(b'`')); // just below 'a'
        assert!(!is_letter(b'{')); // just above 'z'
    }

    #[test]
    fn test_cyrillic_range_boundaries() {
        assert!(!is_letter(0xBF)); // just below А
        assert!(is_letter(0xC0)); // А
        assert!(is_letter(0xDF)); // Я
        assert!(is_letter(0xE0)); // а
        assert!(is_letter(0xFF)); // я
    }

    #[test]
    fn test_first_letter() {
        assert_eq!(first_letter(b"hello"), Some(0));
        assert_eq!(first_letter(b"  \"quoted\""), Some(3));
        assert_eq!(first_letter(b"123abc"), Some(3));
        assert_eq!(first_letter(b"?!..."), None);
        assert_eq!(first_letter(b""), None);
    }
}
