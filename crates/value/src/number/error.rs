//! Numeric conversion refusals.

use core::fmt;

use thiserror::Error;

use super::NumberKind;

/// Why an exact numeric conversion was refused.
///
/// The rendered message is designed to sit after a `, ` in a larger
/// conversion failure, so it starts with the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The value lies outside the target kind's range.
    #[error("{value} is out of range for {target}")]
    OutOfRange {
        /// Rendering of the refused value.
        value: String,
        /// Requested kind.
        target: NumberKind,
    },

    /// The value has no exact representation in the target kind.
    #[error("{value} cannot be exactly represented as {target}")]
    Inexact {
        /// Rendering of the refused value.
        value: String,
        /// Requested kind.
        target: NumberKind,
    },
}

impl NumberError {
    /// Range refusal for `value` against `target`.
    pub fn out_of_range(value: impl fmt::Display, target: NumberKind) -> Self {
        Self::OutOfRange { value: value.to_string(), target }
    }

    /// Exactness refusal for `value` against `target`.
    pub fn inexact(value: impl fmt::Display, target: NumberKind) -> Self {
        Self::Inexact { value: value.to_string(), target }
    }

    /// The kind the conversion was aimed at.
    #[must_use]
    pub fn target(&self) -> NumberKind {
        match self {
            Self::OutOfRange { target, .. } | Self::Inexact { target, .. } => *target,
        }
    }
}
