//! Runtime kind descriptors for values and conversion targets.

use core::fmt;

use crate::number::NumberKind;

/// The runtime kind of a [`Value`], and the vocabulary of conversion targets.
///
/// Every value classifies as exactly one kind via [`Value::kind`]. Conversion
/// targets may additionally name [`ValueKind::Number`], the numeric *family*:
/// a request for "any numeric representation" that keeps the source's natural
/// one. Values themselves never classify as the family kind.
///
/// [`Value`]: crate::Value
/// [`Value::kind`]: crate::Value::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Absent value.
    Null,
    /// `true` / `false`.
    Boolean,
    /// Any numeric representation (family target, see type docs).
    Number,
    /// Fixed-point decimal.
    Decimal,
    /// Wide integer.
    I128,
    /// 64-bit integer.
    I64,
    /// 32-bit integer.
    I32,
    /// 16-bit integer.
    I16,
    /// 8-bit integer (unsigned range).
    U8,
    /// Double-precision float.
    F64,
    /// Single-precision float.
    F32,
    /// Single character.
    Char,
    /// Immutable text.
    Text,
    /// Language tag such as `en-US`.
    Locale,
    /// Calendar date, no timezone.
    Date,
    /// Time of day, no timezone.
    Time,
    /// Date with time of day, no timezone.
    DateTime,
    /// Ordered collection of values.
    List,
}

impl ValueKind {
    /// Human-readable kind name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Decimal => "decimal",
            Self::I128 => "i128",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::U8 => "u8",
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::Char => "char",
            Self::Text => "text",
            Self::Locale => "locale",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::List => "list",
        }
    }

    /// True for the numeric family and every concrete numeric kind.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Number
                | Self::Decimal
                | Self::I128
                | Self::I64
                | Self::I32
                | Self::I16
                | Self::U8
                | Self::F64
                | Self::F32
        )
    }

    /// True for date, time and datetime.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }

    /// The concrete numeric kind, if this is one.
    ///
    /// `None` for the family kind [`ValueKind::Number`], where callers keep
    /// the source's natural representation, and for non-numeric kinds.
    #[must_use]
    pub const fn number_kind(&self) -> Option<NumberKind> {
        match self {
            Self::Decimal => Some(NumberKind::Decimal),
            Self::I128 => Some(NumberKind::I128),
            Self::I64 => Some(NumberKind::I64),
            Self::I32 => Some(NumberKind::I32),
            Self::I16 => Some(NumberKind::I16),
            Self::U8 => Some(NumberKind::U8),
            Self::F64 => Some(NumberKind::F64),
            Self::F32 => Some(NumberKind::F32),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<NumberKind> for ValueKind {
    fn from(kind: NumberKind) -> Self {
        kind.value_kind()
    }
}
