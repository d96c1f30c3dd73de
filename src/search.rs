//! Ordinal case-insensitive substring search.
//!
//! Thin helpers over invariant case folding. Window validation is a silent
//! safety net: out-of-range or misaligned windows are a common caller
//! pattern when probing near string boundaries, so they produce `None`
//! rather than an error.

use crate::{Casing, TextInfo};

#[inline]
fn fold(c: char) -> char {
    TextInfo::invariant().to_upper(c)
}

/// Whether `needle` matches a prefix of `haystack` under ordinal
/// case-insensitive comparison.
fn matches_at(haystack: &str, needle: &str) -> bool {
    let mut hay = haystack.chars();
    for n in needle.chars() {
        match hay.next() {
            Some(h) if fold(h) == fold(n) => {}
            _ => return false,
        }
    }
    true
}

/// Byte index of the first ordinal case-insensitive occurrence of `value`
/// inside `source[start_index..start_index + count]`, or `None`.
///
/// The match must lie entirely inside the window. An invalid window (out of
/// bounds, overflowing, or not on char boundaries) returns `None`; an empty
/// `value` matches at `start_index`.
///
/// ```
/// # use text_casing::index_of_ordinal_ignore_case;
/// assert_eq!(index_of_ordinal_ignore_case("ABCdef", "CDE", 0, 6), Some(2));
/// assert_eq!(index_of_ordinal_ignore_case("ABCdef", "CDE", 3, 3), None);
/// // Out-of-range windows are silently not found, never an error.
/// assert_eq!(index_of_ordinal_ignore_case("ABCdef", "CDE", 4, 6), None);
/// ```
pub fn index_of_ordinal_ignore_case(
    source: &str,
    value: &str,
    start_index: usize,
    count: usize,
) -> Option<usize> {
    let end = start_index.checked_add(count)?;
    if end > source.len()
        || !source.is_char_boundary(start_index)
        || !source.is_char_boundary(end)
    {
        return None;
    }
    if value.is_empty() {
        return Some(start_index);
    }
    let window = &source[start_index..end];
    for (pos, _) in window.char_indices() {
        if matches_at(&window[pos..], value) {
            return Some(start_index + pos);
        }
    }
    None
}

/// Byte index of the last ordinal case-insensitive occurrence of `value`
/// whose start lies in the backward window of `count` positions ending at
/// `start_index`, or `None`.
///
/// The match may extend past `start_index` toward the end of `source`.
/// Invalid windows return `None`, and a zero-length window never matches a
/// non-empty `value`; an empty `value` matches at `start_index`.
pub fn last_index_of_ordinal_ignore_case(
    source: &str,
    value: &str,
    start_index: usize,
    count: usize,
) -> Option<usize> {
    let window_start = start_index.checked_add(1)?.checked_sub(count)?;
    if start_index > source.len() || !source.is_char_boundary(start_index) {
        return None;
    }
    if value.is_empty() {
        return Some(start_index);
    }
    if window_start > start_index || !source.is_char_boundary(window_start) {
        // count == 0 leaves no candidate positions.
        return None;
    }
    let mut pos = start_index;
    loop {
        if source.is_char_boundary(pos) && matches_at(&source[pos..], value) {
            return Some(pos);
        }
        if pos == window_start {
            return None;
        }
        pos -= 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_match_across_case_boundary() {
        assert_eq!(index_of_ordinal_ignore_case("ABCdef", "CDE", 0, 6), Some(2));
        assert_eq!(index_of_ordinal_ignore_case("ABCdef", "abcDEF", 0, 6), Some(0));
        assert_eq!(index_of_ordinal_ignore_case("ABCdef", "x", 0, 6), None);
    }

    #[test]
    fn window_restricts_forward_search() {
        // The match exists in the string but not inside the window.
        assert_eq!(index_of_ordinal_ignore_case("ABCdef", "CDE", 3, 3), None);
        assert_eq!(index_of_ordinal_ignore_case("ABCdef", "def", 3, 3), Some(3));
        // Match must fit entirely inside the window.
        assert_eq!(index_of_ordinal_ignore_case("ABCdef", "DEF", 3, 2), None);
    }

    #[test]
    fn out_of_range_window_is_not_found() {
        assert_eq!(index_of_ordinal_ignore_case("ABCdef", "CDE", 4, 6), None);
        assert_eq!(index_of_ordinal_ignore_case("ABCdef", "CDE", 7, 0), None);
        assert_eq!(index_of_ordinal_ignore_case("abc", "a", usize::MAX, 2), None);
        assert_eq!(last_index_of_ordinal_ignore_case("ABCdef", "CDE", 9, 2), None);
        // Backward window reaching before index 0.
        assert_eq!(last_index_of_ordinal_ignore_case("ABCdef", "CDE", 2, 9), None);
    }

    #[test]
    fn zero_count_window_is_not_found() {
        // An empty window holds no candidate positions for a non-empty
        // value, forward or backward.
        assert_eq!(index_of_ordinal_ignore_case("abc", "a", 1, 0), None);
        assert_eq!(index_of_ordinal_ignore_case("abc", "x", 0, 0), None);
        // A match sitting just below the empty window must not be reported.
        assert_eq!(last_index_of_ordinal_ignore_case("abc", "a", 1, 0), None);
        assert_eq!(last_index_of_ordinal_ignore_case("abc", "x", 1, 0), None);
        assert_eq!(last_index_of_ordinal_ignore_case("abc", "b", 0, 0), None);
    }

    #[test]
    fn misaligned_window_is_not_found() {
        // 'é' is two bytes; offset 1 splits it.
        assert_eq!(index_of_ordinal_ignore_case("équipe", "QUI", 1, 4), None);
        assert_eq!(index_of_ordinal_ignore_case("équipe", "QUI", 2, 4), Some(2));
        assert_eq!(last_index_of_ordinal_ignore_case("équipe", "é", 1, 2), None);
    }

    #[test]
    fn empty_value_matches_at_start_index() {
        assert_eq!(index_of_ordinal_ignore_case("abc", "", 2, 1), Some(2));
        assert_eq!(index_of_ordinal_ignore_case("abc", "", 3, 0), Some(3));
        assert_eq!(last_index_of_ordinal_ignore_case("abc", "", 2, 1), Some(2));
        // Zero-count windows still admit the empty value, like the forward
        // helper.
        assert_eq!(last_index_of_ordinal_ignore_case("abc", "", 3, 0), Some(3));
    }

    #[test]
    fn backward_search_finds_last_occurrence() {
        assert_eq!(
            last_index_of_ordinal_ignore_case("ABCabc", "bc", 5, 6),
            Some(4)
        );
        // Window that stops short of the later occurrence.
        assert_eq!(
            last_index_of_ordinal_ignore_case("ABCabc", "bc", 2, 3),
            Some(1)
        );
        assert_eq!(last_index_of_ordinal_ignore_case("ABCabc", "zz", 5, 6), None);
    }

    #[test]
    fn backward_match_may_extend_past_start_index() {
        // Match starts at 4 (inside the window) and runs to the end.
        assert_eq!(
            last_index_of_ordinal_ignore_case("ABCabc", "BC", 4, 5),
            Some(4)
        );
    }

    #[test]
    fn folding_is_invariant_not_ascii_only() {
        // é and É fold together under invariant rules.
        assert_eq!(index_of_ordinal_ignore_case("cafÉ", "é", 0, 5), Some(3));
    }
}
