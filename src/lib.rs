//! Locale-sensitive text casing.
//!
//! A [`TextInfo`] binds a writing-system profile (the external locale data
//! provider, see [`WritingSystem`]) to the casing operations of the
//! [`Casing`] trait. Single-character casing takes a branch-free ASCII
//! shortcut once the writing system's ASCII casing is proven identical to
//! the invariant one — a decision computed lazily, once per instance.
//!
//! On top of the invariant instance sit two ordinal (culture-independent)
//! facilities: [`case_insensitive_hash`], a DJB2-style hash that collides
//! exactly for strings equal under ordinal case-insensitive comparison, and
//! the [`index_of_ordinal_ignore_case`] /
//! [`last_index_of_ordinal_ignore_case`] search helpers.
//!
//! ```
//! use std::sync::Arc;
//! use text_casing::{Casing, SimpleWritingSystem, TextInfo};
//!
//! let en = TextInfo::new(Arc::new(SimpleWritingSystem::new(
//!     "en-US", "English (United States)", ",", false,
//! )));
//! assert_eq!(en.to_upper('q'), 'Q');
//! assert_eq!(en.to_lower_str("ΑΒΓ Abc"), "αβγ abc");
//! assert_eq!(en.list_separator(), ",");
//! ```

use std::borrow::Cow;

pub mod ascii;
mod error;
mod hash;
mod info;
mod provider;
mod search;

pub use error::TextError;
pub use hash::case_insensitive_hash;
pub use info::{PersistedTextInfo, TextInfo};
pub use provider::{InvariantWritingSystem, LocaleProvider, SimpleWritingSystem, WritingSystem};
pub use search::{index_of_ordinal_ignore_case, last_index_of_ordinal_ignore_case};

/// Casing capability of one writing system.
///
/// Implemented by [`TextInfo`]; kept as a trait so higher layers can accept
/// any casing strategy without committing to a concrete type.
pub trait Casing {
    /// Lower-cases a single character under this writing system's rules.
    fn to_lower(&self, c: char) -> char;

    /// Upper-cases a single character under this writing system's rules.
    fn to_upper(&self, c: char) -> char;

    /// Lower-cases a whole string. Always delegated to the writing system's
    /// string transform, which may apply context-sensitive rules; the result
    /// borrows the input when nothing changes.
    ///
    /// ```
    /// # use text_casing::{Casing, TextInfo};
    /// # use assert_matches::assert_matches;
    /// # use std::borrow::Cow;
    /// let inv = TextInfo::invariant();
    /// assert_matches!(inv.to_lower_str("abcd123"), Cow::Borrowed("abcd123"));
    /// assert_matches!(inv.to_lower_str("AbCd"), Cow::Owned(s) if s == "abcd");
    /// ```
    fn to_lower_str<'s>(&self, s: &'s str) -> Cow<'s, str>;

    /// Upper-cases a whole string; same delegation rules as
    /// [`to_lower_str`](Self::to_lower_str).
    fn to_upper_str<'s>(&self, s: &'s str) -> Cow<'s, str>;

    /// The list separator: the instance override when one was set, else the
    /// writing system's default.
    fn list_separator(&self) -> &str;

    /// Whether text in this writing system runs right-to-left.
    fn is_right_to_left(&self) -> bool;
}
