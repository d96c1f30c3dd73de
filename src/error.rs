use thiserror::Error;

/// Errors surfaced by mutating or resolving operations.
///
/// Both `NullArgument` and `ReadOnly` are programming errors: they are raised
/// synchronously before any state changes and are never caught or retried
/// inside the crate. Out-of-range windows in the ordinal search helpers are
/// deliberately *not* errors; those degrade to a not-found result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// A required value was absent.
    #[error("required argument `{0}` was not provided")]
    NullArgument(&'static str),

    /// A mutating operation was invoked on a read-only instance.
    #[error("instance is read-only and cannot be modified")]
    ReadOnly,

    /// Persisted-state resolution failed because the locale provider does
    /// not know the writing-system name.
    #[error("unknown writing system `{0}`")]
    UnknownWritingSystem(String),
}
