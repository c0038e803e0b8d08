//! Conversion failure reporting.

use std::fmt;

use tabula_value::Value;

/// Result alias used throughout the conversion engine.
pub type ConvertResult<T = Value> = Result<T, ConvertError>;

/// A failed conversion.
///
/// Every failure carries one uniform message naming the offending value,
/// its runtime kind and the requested target, optionally followed by the
/// underlying cause:
///
/// ```text
/// Failed to convert "abc" (text) to i64, invalid number literal "abc"
/// ```
///
/// The value renders through [`Value::display_quoted`], so text keeps its
/// double quotes and characters their single quotes even inside a sentence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConvertError {
    message: String,
}

impl ConvertError {
    /// Failure without an underlying cause.
    #[must_use]
    pub fn new(value: &Value, target: impl fmt::Display) -> Self {
        Self {
            message: format!(
                "Failed to convert {} ({}) to {target}",
                value.display_quoted(),
                value.kind()
            ),
        }
    }

    /// Failure carrying the message of the error that produced it.
    #[must_use]
    pub fn with_cause(value: &Value, target: impl fmt::Display, cause: impl fmt::Display) -> Self {
        Self {
            message: format!(
                "Failed to convert {} ({}) to {target}, {cause}",
                value.display_quoted(),
                value.kind()
            ),
        }
    }

    /// The full failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
