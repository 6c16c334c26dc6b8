//! Position-based scanning primitives.
//!
//! These are pure functions of `(input, position)`: they never look past the
//! end of the input and signal "no match" with `None` instead of a sentinel
//! offset.

use memchr::memchr;

#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
pub(crate) fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

#[inline]
pub(crate) fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Advance past a run of whitespace. Returns `pos` if there is none.
#[inline]
pub(crate) fn skip_whitespace(input: &[u8], mut pos: usize) -> usize {
    while pos < input.len() && is_whitespace(input[pos]) {
        pos += 1;
    }
    pos
}

/// Advance past a run of tag-name characters.
#[inline]
pub(crate) fn skip_name_chars(input: &[u8], mut pos: usize) -> usize {
    while pos < input.len() && is_name_char(input[pos]) {
        pos += 1;
    }
    pos
}

/// Advance past a single ASCII letter.
#[inline]
pub(crate) fn skip_alpha(input: &[u8], pos: usize) -> Option<usize> {
    match input.get(pos) {
        Some(&b) if is_alpha(b) => Some(pos + 1),
        _ => None,
    }
}

/// Scan a name: one letter followed by any number of name characters.
///
/// Returns the end offset of the name.
#[inline]
pub(crate) fn scan_name(input: &[u8], pos: usize) -> Option<usize> {
    skip_alpha(input, pos).map(|pos| skip_name_chars(input, pos))
}

/// Find the next occurrence of `needle` at or after `pos`.
#[inline]
pub(crate) fn find(input: &[u8], pos: usize, needle: u8) -> Option<usize> {
    let rest = input.get(pos..)?;
    memchr(needle, rest).map(|i| pos + i)
}

/// Does the input continue with `expected` at `pos`?
#[inline]
pub(crate) fn starts_with(input: &[u8], pos: usize, expected: &[u8]) -> bool {
    input
        .get(pos..)
        .map(|rest| rest.starts_with(expected))
        .unwrap_or(false)
}

#[inline]
pub(crate) fn byte_at(input: &[u8], pos: usize) -> Option<u8> {
    input.get(pos).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" \t\nabc", 0, 3)]
    #[case("abc", 0, 0)]
    #[case("a  ", 1, 3)]
    #[case("", 0, 0)]
    #[case("ab", 2, 2)]
    fn test_skip_whitespace(#[case] input: &str, #[case] pos: usize, #[case] expected: usize) {
        assert_eq!(skip_whitespace(input.as_bytes(), pos), expected);
    }

    #[rstest]
    #[case("abc1 x", 0, 4)]
    #[case("a:b", 0, 1)]
    #[case("9x", 0, 2)]
    #[case("-", 0, 0)]
    fn test_skip_name_chars(#[case] input: &str, #[case] pos: usize, #[case] expected: usize) {
        assert_eq!(skip_name_chars(input.as_bytes(), pos), expected);
    }

    #[test]
    fn test_skip_alpha() {
        assert_eq!(skip_alpha(b"ab", 0), Some(1));
        assert_eq!(skip_alpha(b"1b", 0), None);
        assert_eq!(skip_alpha(b"a", 1), None);
    }

    #[test]
    fn test_scan_name_requires_letter_first() {
        assert_eq!(scan_name(b"a12 ", 0), Some(3));
        assert_eq!(scan_name(b"1a", 0), None);
        assert_eq!(scan_name(b"", 0), None);
    }

    #[test]
    fn test_find_is_bounded() {
        assert_eq!(find(b"abc<d", 0, b'<'), Some(3));
        assert_eq!(find(b"abc<d", 4, b'<'), None);
        assert_eq!(find(b"abc", 10, b'<'), None);
    }

    #[test]
    fn test_starts_with_past_end() {
        assert!(starts_with(b"</a>", 0, b"</"));
        assert!(!starts_with(b"<", 0, b"</"));
        assert!(!starts_with(b"<", 5, b"<"));
    }
}
