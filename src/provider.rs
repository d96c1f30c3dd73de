//! External collaborator contracts: the locale data provider and the
//! writing-system profiles it hands out.
//!
//! The casing core consults a profile, it never reimplements one. Anything
//! beyond the ASCII shortcut — title-casing, Turkish dotted/dotless i,
//! context-sensitive sigma — lives behind [`WritingSystem::change_case_str`]
//! and is the provider's problem.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::Arc;

/// One writing system's orthographic data: identity, separators,
/// directionality, and the locale-specific case transform.
///
/// Implementations must be deterministic for a fixed name.
pub trait WritingSystem: Send + Sync {
    /// Resolved writing-system name, e.g. `"en-US"`. The invariant system
    /// uses the empty string.
    fn name(&self) -> &str;

    /// Human-readable name used by `TextInfo`'s `Display` impl.
    fn display_name(&self) -> &str;

    /// Default list separator for this writing system.
    fn list_separator(&self) -> &str;

    /// Whether text in this writing system runs right-to-left.
    fn is_right_to_left(&self) -> bool;

    /// Locale-specific 1:1 case map for a single character.
    fn change_case_char(&self, c: char, to_upper: bool) -> char;

    /// Locale-specific case transform for a whole string. Unlike the char
    /// map this may be context-sensitive and length-changing. Returning
    /// `Cow::Borrowed` when nothing changes is encouraged; the borrowed and
    /// owned results must be byte-identical.
    fn change_case_str<'s>(&self, s: &'s str, to_upper: bool) -> Cow<'s, str>;

    /// Case-insensitive comparison under this writing system's rules.
    ///
    /// The default folds both sides through the upper-case char map, which
    /// is exact for any context-free profile.
    fn compare_ignore_case(&self, a: &str, b: &str) -> Ordering {
        let fold = |c: char| self.change_case_char(c, true);
        a.chars().map(fold).cmp(b.chars().map(fold))
    }
}

/// Resolves writing-system names to profiles. Consulted when re-linking a
/// persisted `TextInfo`; must be deterministic for a fixed name.
pub trait LocaleProvider {
    fn writing_system(&self, name: &str) -> Option<Arc<dyn WritingSystem>>;
}

/// Unicode simple (1:1) upper-case map; multi-char expansions (ß → SS)
/// leave the character unchanged.
#[inline]
fn simple_to_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Unicode simple (1:1) lower-case map.
#[inline]
fn simple_to_lower(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// The culture-independent baseline writing system.
///
/// Its casing is the Unicode simple map (bit-twiddling in the ASCII range),
/// applied character by character even for strings, so the string transform
/// is exactly "the char map at every position" — the property the ordinal
/// hasher's slow path relies on.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvariantWritingSystem;

impl WritingSystem for InvariantWritingSystem {
    fn name(&self) -> &str {
        ""
    }

    fn display_name(&self) -> &str {
        "Invariant Language (Invariant Country)"
    }

    fn list_separator(&self) -> &str {
        ","
    }

    fn is_right_to_left(&self) -> bool {
        false
    }

    fn change_case_char(&self, c: char, to_upper: bool) -> char {
        if c.is_ascii() {
            if to_upper {
                crate::ascii::to_upper(c)
            } else {
                crate::ascii::to_lower(c)
            }
        } else if to_upper {
            simple_to_upper(c)
        } else {
            simple_to_lower(c)
        }
    }

    fn change_case_str<'s>(&self, s: &'s str, to_upper: bool) -> Cow<'s, str> {
        let map = |c| self.change_case_char(c, to_upper);
        match s.char_indices().find(|&(_, c)| map(c) != c) {
            Some((pos, _)) => {
                let mut out = String::with_capacity(s.len());
                // The part before the first changed char is copied verbatim,
                // no need to rescan it.
                out.push_str(&s[..pos]);
                out.extend(s[pos..].chars().map(map));
                Cow::Owned(out)
            }
            None => Cow::Borrowed(s),
        }
    }
}

/// A configurable context-free profile backed by the Unicode case maps:
/// simple (1:1) for single characters, full (possibly length-changing) for
/// strings.
///
/// Suitable for writing systems without casing exceptions; systems that need
/// them supply their own [`WritingSystem`] impl.
///
/// ```
/// # use text_casing::{SimpleWritingSystem, WritingSystem};
/// # use assert_matches::assert_matches;
/// # use std::borrow::Cow;
/// let de = SimpleWritingSystem::new("de-DE", "German (Germany)", ";", false);
/// assert_matches!(de.change_case_str("STRASSE", true), Cow::Borrowed("STRASSE"));
/// assert_matches!(de.change_case_str("straße", true), Cow::Owned(s) if s == "STRASSE");
/// ```
#[derive(Debug, Clone)]
pub struct SimpleWritingSystem {
    name: String,
    display_name: String,
    list_separator: String,
    right_to_left: bool,
}

impl SimpleWritingSystem {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        list_separator: impl Into<String>,
        right_to_left: bool,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            list_separator: list_separator.into(),
            right_to_left,
        }
    }
}

impl WritingSystem for SimpleWritingSystem {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn list_separator(&self) -> &str {
        &self.list_separator
    }

    fn is_right_to_left(&self) -> bool {
        self.right_to_left
    }

    fn change_case_char(&self, c: char, to_upper: bool) -> char {
        if to_upper {
            simple_to_upper(c)
        } else {
            simple_to_lower(c)
        }
    }

    fn change_case_str<'s>(&self, s: &'s str, to_upper: bool) -> Cow<'s, str> {
        if to_upper {
            let changes = |c: char| !core::iter::once(c).eq(c.to_uppercase());
            match s.char_indices().find(|&(_, c)| changes(c)) {
                Some((pos, _)) => {
                    let mut out = String::with_capacity(s.len());
                    out.push_str(&s[..pos]);
                    out.extend(s[pos..].chars().flat_map(char::to_uppercase));
                    Cow::Owned(out)
                }
                None => Cow::Borrowed(s),
            }
        } else {
            // Lower-casing has the final-sigma edge case, which only
            // `str::to_lowercase` handles; hand it the whole string instead
            // of mapping char by char.
            let changes = |c: char| !core::iter::once(c).eq(c.to_lowercase());
            if s.chars().any(changes) {
                Cow::Owned(s.to_lowercase())
            } else {
                Cow::Borrowed(s)
            }
        }
    }
}
