//! Error types for attribute coercion.

use mason_path::PathParseError;

use crate::raw::RawValue;

/// Errors produced when a raw value cannot be converted to its attribute
/// type.
///
/// The offending raw value is rendered into the message, and nested
/// coercers wrap element failures with their position, so the error names
/// both the faulty literal and where inside the attribute it sits.
#[derive(Debug, thiserror::Error)]
pub enum CoerceError {
    /// The raw value has the wrong shape for the attribute type.
    #[error("expected {expected}, got {value}")]
    TypeMismatch {
        /// What the coercer accepts, e.g. "a string".
        expected: &'static str,
        /// The rendered offending raw value.
        value: String,
    },

    /// A string could not be parsed as a normalized relative path.
    #[error("invalid path `{value}`: {source}")]
    InvalidPath {
        /// The offending path literal.
        value: String,
        /// The violated path invariant.
        #[source]
        source: PathParseError,
    },

    /// A nested coercion failed inside a collection element.
    #[error("at index {index}: {source}")]
    Element {
        /// The position of the failing element.
        index: usize,
        /// The element's own failure.
        #[source]
        source: Box<CoerceError>,
    },
}

impl CoerceError {
    /// Builds a [`CoerceError::TypeMismatch`] for `raw`, rendering it into
    /// the message.
    pub fn mismatch(expected: &'static str, raw: &RawValue) -> Self {
        CoerceError::TypeMismatch {
            expected,
            value: raw.to_string(),
        }
    }
}

/// A defect in the coercer composition itself, detected when the schema is
/// constructed and before any build file is parsed.
///
/// This indicates a bug in a rule schema, not a user error; it is fatal.
#[derive(Debug, thiserror::Error)]
#[error("invalid coercer composition: {reason}")]
pub struct InvalidCoercerComposition {
    /// What makes the composition invalid.
    pub reason: String,
}

impl InvalidCoercerComposition {
    /// Creates a composition error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
