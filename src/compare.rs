//! Directional letter-only line comparison.
//!
//! Lines are compared by their letter bytes alone, scanning either from the
//! start ([`Direction::Forward`]) or from the end ([`Direction::Backward`]).
//! Everything that is not a letter (per [`crate::alphabet::is_letter`]) is
//! skipped without consuming a comparison step. Letters compare by raw byte
//! value, so ASCII upper case sorts before lower case.

use crate::alphabet::is_letter;
use crate::text::Line;
use crate::tree_sort::RecordOrder;
use std::cmp::Ordering;

/// Scan direction for the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Compare left-to-right, starting at the first byte.
    Forward,
    /// Compare right-to-left, starting at the last byte.
    Backward,
}

/// One scan cursor over a line. `pos == len` (Forward) or `pos == -1`
/// (Backward) is the terminator position.
struct Scan<'a> {
    bytes: &'a [u8],
    pos: isize,
    step: isize,
}

impl<'a> Scan<'a> {
    fn new(bytes: &'a [u8], direction: Direction) -> Self {
        let (pos, step) = match direction {
            Direction::Forward => (0, 1),
            Direction::Backward => (bytes.len() as isize - 1, -1),
        };
        Self { bytes, pos, step }
    }

    fn current(&self) -> Option<u8> {
        if self.pos < 0 || self.pos >= self.bytes.len() as isize {
            None
        } else {
            Some(self.bytes[self.pos as usize])
        }
    }

    fn advance(&mut self) {
        self.pos += self.step;
    }

    /// Moves the cursor to the next letter in scan direction, or to the
    /// terminator if none remains.
    fn skip_to_letter(&mut self) {
        while let Some(b) = self.current() {
            if is_letter(b) {
                break;
            }
            self.advance();
        }
    }
}

/// Three-way letter-wise comparison of two byte lines.
///
/// Equal letters advance both cursors; the first differing pair of letters
/// decides by byte value. A cursor that runs off its end compares as the
/// terminator (byte 0), so a line whose letters are a strict prefix of the
/// other's sorts first.
///
/// Two lines with no letters at all compare equal — the comparator cannot
/// distinguish them. Callers relying on a strict order must break such
/// ties themselves (the line scanner in [`crate::text`] drops letterless
/// lines before they reach a sort pass).
pub fn compare_letters(a: &[u8], b: &[u8], direction: Direction) -> Ordering {
    let mut a = Scan::new(a, direction);
    let mut b = Scan::new(b, direction);

    loop {
        a.skip_to_letter();
        b.skip_to_letter();

        match (a.current(), b.current()) {
            (Some(x), Some(y)) if x == y => {
                a.advance();
                b.advance();
            }
            (Some(x), Some(y)) => return x.cmp(&y),
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Orders lines left-to-right by letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardLineOrder;

impl<'a> RecordOrder<Line<'a>> for ForwardLineOrder {
    fn compare(&self, a: &Line<'a>, b: &Line<'a>) -> Ordering {
        compare_letters(a.bytes(), b.bytes(), Direction::Forward)
    }
}

/// Orders lines right-to-left by letters, grouping shared endings together.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardLineOrder;

impl<'a> RecordOrder<Line<'a>> for BackwardLineOrder {
    fn compare(&self, a: &Line<'a>, b: &Line<'a>) -> Ordering {
        compare_letters(a.bytes(), b.bytes(), Direction::Backward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fwd(a: &[u8], b: &[u8]) -> Ordering {
        compare_letters(a, b, Direction::Forward)
    }

    fn bwd(a: &[u8], b: &[u8]) -> Ordering {
        compare_letters(a, b, Direction::Backward)
    }

    #[test]
    fn test_forward_basic() {
        assert_eq!(fwd(b"apple", b"banana"), Ordering::Less);
        assert_eq!(fwd(b"banana", b"apple"), Ordering::Greater);
        assert_eq!(fwd(b"same", b"same"), Ordering::Equal);
    }

    #[test]
    fn test_case_is_byte_order() {
        // ASCII upper case sorts before lower case.
        assert_eq!(fwd(b"Apple", b"apple"), Ordering::Less);
        assert_eq!(fwd(b"apple", b"Apple"), Ordering::Greater);
    }

    #[test]
    fn test_forward_first_differing_letter() {
        assert_eq!(fwd(b"car", b"cat"), Ordering::Less);
        assert_eq!(fwd(b"cat", b"car"), Ordering::Greater);
    }

    #[test]
    fn test_punctuation_skipped() {
        assert_eq!(fwd(b"d-o-g", b"dog"), Ordering::Equal);
        assert_eq!(fwd(b"dog!!", b"doe"), Ordering::Greater);
        assert_eq!(fwd(b"it's", b"its"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(fwd(b"do", b"dog"), Ordering::Less);
        assert_eq!(fwd(b"dog", b"do"), Ordering::Greater);
        // Trailing punctuation does not save the longer line.
        assert_eq!(fwd(b"do!!", b"doe"), Ordering::Less);
    }

    #[test]
    fn test_backward_shared_endings() {
        // Both end "at"; next-to-last letters decide: 'c' < 'm'.
        assert_eq!(bwd(b"cat", b"mat"), Ordering::Less);
        assert_eq!(bwd(b"mat", b"cat"), Ordering::Greater);
        // Same word differs only forward.
        assert_eq!(bwd(b"cat", b"cat"), Ordering::Equal);
    }

    #[test]
    fn test_backward_skips_trailing_punctuation() {
        assert_eq!(bwd(b"night,", b"light"), Ordering::Greater);
        assert_eq!(bwd(b"night...", b"night"), Ordering::Equal);
    }

    #[test]
    fn test_backward_suffix_sorts_first() {
        assert_eq!(bwd(b"at", b"cat"), Ordering::Less);
        assert_eq!(bwd(b"cat", b"at"), Ordering::Greater);
    }

    #[test]
    fn test_letterless_lines_compare_equal() {
        assert_eq!(fwd(b"???", b"!!"), Ordering::Equal);
        assert_eq!(bwd(b"???", b"!!"), Ordering::Equal);
        assert_eq!(fwd(b"", b"..."), Ordering::Equal);
        assert_eq!(bwd(b"", b""), Ordering::Equal);
    }

    #[test]
    fn test_letterless_vs_letters() {
        assert_eq!(fwd(b"???", b"abc"), Ordering::Less);
        assert_eq!(bwd(b"???", b"abc"), Ordering::Less);
    }

    #[test]
    fn test_cyrillic_bytes_compare() {
        // CP1251: б (0xE1) sorts after а (0xE0).
        assert_eq!(fwd(&[0xE0], &[0xE1]), Ordering::Less);
        // Upper-case block sorts before lower-case block, as in ASCII.
        assert_eq!(fwd(&[0xC0], &[0xE0]), Ordering::Less);
    }

    #[test]
    fn test_order_strategies() {
        let a = Line::new(b"cat");
        let b = Line::new(b"mat");
        assert_eq!(ForwardLineOrder.compare(&a, &b), Ordering::Less);
        assert_eq!(BackwardLineOrder.compare(&a, &b), Ordering::Less);

        let car = Line::new(b"car");
        assert_eq!(ForwardLineOrder.compare(&car, &a), Ordering::Less);
        assert_eq!(BackwardLineOrder.compare(&car, &a), Ordering::Greater);
    }

    #[test]
    fn test_antisymmetry() {
        let cases: &[(&[u8], &[u8])] = &[
            (b"alpha", b"omega"),
            (b"do", b"dog!!"),
            (b"night,", b"light"),
            (b"???", b"abc"),
        ];
        for &(a, b) in cases {
            for dir in [Direction::Forward, Direction::Backward] {
                assert_eq!(
                    compare_letters(a, b, dir),
                    compare_letters(b, a, dir).reverse()
                );
            }
        }
    }
}
