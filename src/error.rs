//! Error type for the knitout value encoders and parsers.

use thiserror::Error;

/// Errors produced while encoding or parsing knitout values.
///
/// Formatting, loop expansion and header rendering never fail; only the
/// extension directives with a restricted domain and the string parsers
/// for the closed enumerations can reject input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnitoutError {
    /// A numeric value fell outside its allowed inclusive range.
    #[error("{field} (val: {value}) must be in range {min}-{max}")]
    OutOfRange {
        /// Name of the rejected value (e.g. "speed number")
        field: &'static str,
        /// The value that was given
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },

    /// A string did not match any of the accepted values.
    #[error("invalid {field} '{value}', expected one of: {expected}")]
    InvalidValue {
        /// Name of the rejected value (e.g. "presser mode")
        field: &'static str,
        /// The string that was given
        value: String,
        /// Comma-separated list of accepted values
        expected: String,
    },
}

impl KnitoutError {
    pub(crate) fn invalid_value(
        field: &'static str,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}

/// Result alias for knitout encoding operations.
pub type Result<T> = std::result::Result<T, KnitoutError>;
