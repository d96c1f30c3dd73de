//! The casing core: [`TextInfo`] couples one writing-system profile to the
//! casing operations, the lazily computed ASCII-mode cache, and the
//! read-only/clone discipline that makes shared instances safe.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::TextError;
use crate::provider::{InvariantWritingSystem, LocaleProvider, WritingSystem};
use crate::{ascii, Casing};

// Tri-state casing-mode cache. Every legal write for a given instance
// carries the same value, so racing relaxed stores are benign.
const CACHE_UNKNOWN: u8 = 0;
const CACHE_SAME: u8 = 1;
const CACHE_DIFFERENT: u8 = 2;

const LOWER_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

static INVARIANT: Lazy<TextInfo> =
    Lazy::new(|| TextInfo::new(Arc::new(InvariantWritingSystem)).into_read_only());

/// Casing operations for one writing system.
///
/// Single characters take an ASCII shortcut once the writing system's ASCII
/// casing is proven identical to the invariant one; whole strings always go
/// through the profile, which may apply context-sensitive rules a
/// per-character map cannot express.
pub struct TextInfo {
    profile: Arc<dyn WritingSystem>,
    name: String,
    list_separator: Option<String>,
    default_separator: OnceCell<String>,
    is_read_only: bool,
    ascii_same_as_invariant: AtomicU8,
}

impl TextInfo {
    /// Creates a mutable `TextInfo` bound to `profile` for its lifetime.
    pub fn new(profile: Arc<dyn WritingSystem>) -> Self {
        let name = profile.name().to_owned();
        Self {
            profile,
            name,
            list_separator: None,
            default_separator: OnceCell::new(),
            is_read_only: false,
            ascii_same_as_invariant: AtomicU8::new(CACHE_UNKNOWN),
        }
    }

    /// The process-wide culture-independent instance. Created once on first
    /// use, read-only, and shared by the ordinal hashing and search helpers.
    pub fn invariant() -> &'static TextInfo {
        &INVARIANT
    }

    /// Resolved writing-system name this instance is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    /// Replaces the list-separator override.
    ///
    /// Validation happens before any mutation: an absent `value` fails with
    /// [`TextError::NullArgument`], a read-only instance fails with
    /// [`TextError::ReadOnly`], and in either case the instance is left
    /// untouched.
    pub fn set_list_separator(&mut self, value: Option<String>) -> Result<(), TextError> {
        let value = value.ok_or(TextError::NullArgument("value"))?;
        if self.is_read_only {
            return Err(TextError::ReadOnly);
        }
        self.list_separator = Some(value);
        Ok(())
    }

    /// Consumes this instance and returns it with the read-only flag set.
    /// No copy is made.
    pub fn into_read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    /// Returns a read-only instance with the same observable behavior as
    /// `this`. When `this` is already read-only the same allocation is
    /// returned; no defensive copy is made.
    ///
    /// ```
    /// # use text_casing::{SimpleWritingSystem, TextInfo};
    /// # use std::sync::Arc;
    /// let en = Arc::new(TextInfo::new(Arc::new(SimpleWritingSystem::new(
    ///     "en-US", "English (United States)", ",", false,
    /// ))));
    /// let frozen = TextInfo::read_only(&en);
    /// assert!(frozen.is_read_only());
    /// assert!(Arc::ptr_eq(&frozen, &TextInfo::read_only(&frozen)));
    /// ```
    pub fn read_only(this: &Arc<Self>) -> Arc<Self> {
        if this.is_read_only {
            Arc::clone(this)
        } else {
            Arc::new(this.as_ref().clone().into_read_only())
        }
    }

    /// Extracts the state worth persisting: the name (authoritative), the
    /// separator override, and the read-only flag. Everything else is
    /// re-derived by [`PersistedTextInfo::resolve`].
    pub fn persist(&self) -> PersistedTextInfo {
        PersistedTextInfo {
            name: self.name.clone(),
            list_separator: self.list_separator.clone(),
            is_read_only: self.is_read_only,
        }
    }

    /// Whether this writing system's ASCII casing is indistinguishable from
    /// invariant ASCII casing. Computed at most once per instance by asking
    /// the profile to compare the Latin alphabets case-insensitively.
    ///
    /// This only gates the single-character shortcut; non-ASCII characters
    /// go through the profile regardless.
    fn ascii_casing_same_as_invariant(&self) -> bool {
        match self.ascii_same_as_invariant.load(AtomicOrdering::Relaxed) {
            CACHE_SAME => true,
            CACHE_DIFFERENT => false,
            _ => {
                let same = self
                    .profile
                    .compare_ignore_case(LOWER_ALPHABET, UPPER_ALPHABET)
                    == std::cmp::Ordering::Equal;
                trace!(name = %self.name, same, "computed ascii casing mode");
                self.ascii_same_as_invariant.store(
                    if same { CACHE_SAME } else { CACHE_DIFFERENT },
                    AtomicOrdering::Relaxed,
                );
                same
            }
        }
    }
}

impl Casing for TextInfo {
    fn to_lower(&self, c: char) -> char {
        if ascii::is_ascii(c) && self.ascii_casing_same_as_invariant() {
            ascii::to_lower(c)
        } else {
            self.profile.change_case_char(c, false)
        }
    }

    fn to_upper(&self, c: char) -> char {
        if ascii::is_ascii(c) && self.ascii_casing_same_as_invariant() {
            ascii::to_upper(c)
        } else {
            self.profile.change_case_char(c, true)
        }
    }

    fn to_lower_str<'s>(&self, s: &'s str) -> Cow<'s, str> {
        self.profile.change_case_str(s, false)
    }

    fn to_upper_str<'s>(&self, s: &'s str) -> Cow<'s, str> {
        self.profile.change_case_str(s, true)
    }

    fn list_separator(&self) -> &str {
        match &self.list_separator {
            Some(separator) => separator,
            // The profile default is pulled once on first read and cached
            // for the instance's lifetime.
            None => self
                .default_separator
                .get_or_init(|| self.profile.list_separator().to_owned()),
        }
    }

    fn is_right_to_left(&self) -> bool {
        self.profile.is_right_to_left()
    }
}

impl Clone for TextInfo {
    /// A clone is always mutable regardless of the source's read-only
    /// state, shares the profile, and starts with an uninitialized casing
    /// mode cache so it recomputes rather than inheriting cached material.
    fn clone(&self) -> Self {
        Self {
            profile: Arc::clone(&self.profile),
            name: self.name.clone(),
            list_separator: self.list_separator.clone(),
            default_separator: OnceCell::new(),
            is_read_only: false,
            ascii_same_as_invariant: AtomicU8::new(CACHE_UNKNOWN),
        }
    }
}

/// Two instances are equal iff their resolved writing-system names are.
impl PartialEq for TextInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TextInfo {}

impl Hash for TextInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for TextInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInfo")
            .field("name", &self.name)
            .field("list_separator", &self.list_separator)
            .field("is_read_only", &self.is_read_only)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TextInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextInfo - {}", self.profile.display_name())
    }
}

/// The round-trippable shape of a [`TextInfo`]: name, separator override,
/// read-only flag. Derived state (profile, casing-mode cache) is rebuilt by
/// [`resolve`](Self::resolve), never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTextInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_separator: Option<String>,
    #[serde(default)]
    pub is_read_only: bool,
}

impl PersistedTextInfo {
    /// Re-links the persisted name to a live profile and rebuilds the
    /// instance. Idempotent: each call yields a fresh, fully resolved
    /// `TextInfo`; there is no half-resolved state to observe.
    pub fn resolve(&self, provider: &dyn LocaleProvider) -> Result<TextInfo, TextError> {
        let profile = provider
            .writing_system(&self.name)
            .ok_or_else(|| TextError::UnknownWritingSystem(self.name.clone()))?;
        trace!(name = %self.name, "re-linked writing-system profile");
        let mut info = TextInfo::new(profile);
        info.list_separator = self.list_separator.clone();
        info.is_read_only = self.is_read_only;
        Ok(info)
    }
}
