//! Ordinal case-insensitive hashing.
//!
//! A DJB2-style rolling hash over the string's bytes, folded to upper case
//! with invariant rules so that any two strings equal under ordinal
//! case-insensitive comparison hash identically. Always bound to the
//! invariant [`TextInfo`], never to a caller's writing system.

use crate::ascii::fold_byte_to_upper;
use crate::{Casing, TextInfo};

const SEED: u32 = 5381;

/// One rolling step: `h * 33 XOR b`, with 32-bit wraparound expected and
/// relied upon.
#[inline]
fn step(hash: u32, b: u8) -> u32 {
    hash.wrapping_shl(5).wrapping_add(hash) ^ u32::from(b)
}

/// Hash of the upper-cased string: strings that differ only in the case of
/// ASCII letters collide by construction.
///
/// The fast loop folds ASCII bytes in place; the first non-ASCII byte
/// abandons it and the hash is recomputed from scratch over the invariant
/// upper-casing of the whole input, so no partial fast-path state ever
/// leaks into the slow path. Both paths produce the hash of the upper-cased
/// string.
///
/// ```
/// # use text_casing::case_insensitive_hash;
/// assert_eq!(case_insensitive_hash("Hello"), case_insensitive_hash("hELLo"));
/// assert_ne!(case_insensitive_hash("Hello"), case_insensitive_hash("World"));
/// ```
pub fn case_insensitive_hash(s: &str) -> u32 {
    let mut hash = SEED;
    for &b in s.as_bytes() {
        if b >= 0x80 {
            return slow_hash(s);
        }
        hash = step(hash, fold_byte_to_upper(b));
    }
    hash
}

/// Upper-cases the whole string through the invariant profile, then folds
/// every byte of the result with no per-character branching.
fn slow_hash(s: &str) -> u32 {
    let upper = TextInfo::invariant().to_upper_str(s);
    let mut hash = SEED;
    for &b in upper.as_bytes() {
        hash = step(hash, b);
    }
    hash
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_string_is_seed() {
        assert_eq!(case_insensitive_hash(""), SEED);
    }

    #[test]
    fn invariant_under_ascii_case_permutation() {
        let variants = ["Hello", "HELLO", "hello", "hELLo", "HeLlO"];
        let expected = case_insensitive_hash(variants[0]);
        for v in variants {
            assert_eq!(case_insensitive_hash(v), expected, "for {v:?}");
        }
    }

    #[test]
    fn distinct_strings_usually_differ() {
        assert_ne!(case_insensitive_hash("Hello"), case_insensitive_hash("Hella"));
        assert_ne!(case_insensitive_hash("a"), case_insensitive_hash("aa"));
    }

    #[test]
    fn fast_path_agrees_with_slow_path_on_ascii() {
        for s in ["", "Hello, World!", "mixed CASE 0123", "[]{}@`~"] {
            assert_eq!(case_insensitive_hash(s), slow_hash(s), "for {s:?}");
        }
    }

    #[test]
    fn non_ascii_input_hashes_the_uppercased_string() {
        for s in ["İstanbul", "grüße", "abcé", "Σίσυφος", "中文 text"] {
            let upper = TextInfo::invariant().to_upper_str(s);
            let mut expected = SEED;
            for &b in upper.as_bytes() {
                expected = step(expected, b);
            }
            assert_eq!(case_insensitive_hash(s), expected, "for {s:?}");
        }
    }

    #[test]
    fn non_ascii_case_permutations_collide() {
        // é/É fold to the same invariant upper case, so these must collide
        // even though both take the slow path.
        assert_eq!(
            case_insensitive_hash("café au lait"),
            case_insensitive_hash("CAFÉ AU LAIT")
        );
    }

    #[test]
    fn wraparound_is_silent() {
        // Long inputs overflow 32 bits many times over; the result is still
        // deterministic and permutation-invariant.
        let long_lower = "x".repeat(10_000);
        let long_upper = "X".repeat(10_000);
        assert_eq!(
            case_insensitive_hash(&long_lower),
            case_insensitive_hash(&long_upper)
        );
    }
}
