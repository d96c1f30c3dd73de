//! Branch-minimal ASCII case mapping.
//!
//! These are bit-identical to the ASCII range of the full Unicode simple
//! case map, so callers may substitute them for a locale transform whenever
//! the writing system's ASCII casing has been proven equivalent to the
//! invariant one.

/// Returns `true` iff `c` is an ASCII code point (`< 0x80`).
#[inline]
pub const fn is_ascii(c: char) -> bool {
    (c as u32) < 0x80
}

/// Maps `'A'..='Z'` to `'a'..='z'` by setting bit `0x20`; every other
/// character is returned unchanged.
///
/// ```
/// # use text_casing::ascii;
/// assert_eq!(ascii::to_lower('A'), 'a');
/// assert_eq!(ascii::to_lower('a'), 'a');
/// assert_eq!(ascii::to_lower('1'), '1');
/// ```
#[inline]
pub const fn to_lower(c: char) -> char {
    if c.is_ascii_uppercase() {
        (c as u8 | 0x20) as char
    } else {
        c
    }
}

/// Maps `'a'..='z'` to `'A'..='Z'` by clearing bit `0x20`; every other
/// character is returned unchanged.
///
/// ```
/// # use text_casing::ascii;
/// assert_eq!(ascii::to_upper('a'), 'A');
/// assert_eq!(ascii::to_upper('Z'), 'Z');
/// assert_eq!(ascii::to_upper('#'), '#');
/// ```
#[inline]
pub const fn to_upper(c: char) -> char {
    if c.is_ascii_lowercase() {
        (c as u8 & !0x20) as char
    } else {
        c
    }
}

/// Byte-level fold of `a..=z` to `A..=Z`, used by the hasher's fast loop.
#[inline]
pub(crate) const fn fold_byte_to_upper(b: u8) -> u8 {
    if b.is_ascii_lowercase() {
        b & !0x20
    } else {
        b
    }
}
