//! Numeric values over a closed set of eight representation kinds.
//!
//! [`Number`] tags a numeric value with its representation. Cross-kind
//! conversion lives in [`Number::to_kind`] and is exact-or-fail: no arm of
//! the dispatch ever truncates or rounds silently.

mod convert;
mod error;

pub use error::NumberError;

use core::fmt;

use rust_decimal::Decimal;

/// Identifies one of the eight numeric representation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberKind {
    /// Fixed-point decimal ([`rust_decimal::Decimal`]).
    Decimal,
    /// Wide integer.
    I128,
    /// 64-bit integer.
    I64,
    /// 32-bit integer.
    I32,
    /// 16-bit integer.
    I16,
    /// 8-bit integer, unsigned range.
    U8,
    /// Double-precision float.
    F64,
    /// Single-precision float.
    F32,
}

impl NumberKind {
    /// All kinds, in narrowing-resistant order (decimal and wide first).
    pub const ALL: [NumberKind; 8] = [
        Self::Decimal,
        Self::I128,
        Self::I64,
        Self::I32,
        Self::I16,
        Self::U8,
        Self::F64,
        Self::F32,
    ];

    /// Kind name used in diagnostics; matches the [`ValueKind`] name.
    ///
    /// [`ValueKind`]: crate::ValueKind
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.value_kind().name()
    }

    /// The corresponding concrete [`ValueKind`].
    ///
    /// [`ValueKind`]: crate::ValueKind
    #[must_use]
    pub const fn value_kind(&self) -> crate::ValueKind {
        match self {
            Self::Decimal => crate::ValueKind::Decimal,
            Self::I128 => crate::ValueKind::I128,
            Self::I64 => crate::ValueKind::I64,
            Self::I32 => crate::ValueKind::I32,
            Self::I16 => crate::ValueKind::I16,
            Self::U8 => crate::ValueKind::U8,
            Self::F64 => crate::ValueKind::F64,
            Self::F32 => crate::ValueKind::F32,
        }
    }

    /// True for the five integer kinds.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::I128 | Self::I64 | Self::I32 | Self::I16 | Self::U8)
    }

    /// True for the two float kinds.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric value tagged with its representation kind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// Fixed-point decimal.
    Decimal(Decimal),
    /// Wide integer.
    I128(i128),
    /// 64-bit integer.
    I64(i64),
    /// 32-bit integer.
    I32(i32),
    /// 16-bit integer.
    I16(i16),
    /// 8-bit integer, unsigned range.
    U8(u8),
    /// Double-precision float.
    F64(f64),
    /// Single-precision float.
    F32(f32),
}

impl Number {
    /// The representation kind of this number.
    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        match self {
            Self::Decimal(_) => NumberKind::Decimal,
            Self::I128(_) => NumberKind::I128,
            Self::I64(_) => NumberKind::I64,
            Self::I32(_) => NumberKind::I32,
            Self::I16(_) => NumberKind::I16,
            Self::U8(_) => NumberKind::U8,
            Self::F64(_) => NumberKind::F64,
            Self::F32(_) => NumberKind::F32,
        }
    }

    /// True when the value equals zero in its own representation.
    ///
    /// NaN is not zero; negative zero is.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Decimal(d) => *d == Decimal::ZERO,
            Self::I128(n) => *n == 0,
            Self::I64(n) => *n == 0,
            Self::I32(n) => *n == 0,
            Self::I16(n) => *n == 0,
            Self::U8(n) => *n == 0,
            Self::F64(v) => *v == 0.0,
            Self::F32(v) => *v == 0.0,
        }
    }

    /// True when the value is negative. NaN is not negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Decimal(d) => *d < Decimal::ZERO,
            Self::I128(n) => *n < 0,
            Self::I64(n) => *n < 0,
            Self::I32(n) => *n < 0,
            Self::I16(n) => *n < 0,
            Self::U8(_) => false,
            Self::F64(v) => *v < 0.0,
            Self::F32(v) => *v < 0.0,
        }
    }
}

impl fmt::Display for Number {
    /// Plain rendering. Floats render `NaN`, `Infinity` and `-Infinity` for
    /// the non-finite values; everything else uses the shortest form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(d) => write!(f, "{d}"),
            Self::I128(n) => write!(f, "{n}"),
            Self::I64(n) => write!(f, "{n}"),
            Self::I32(n) => write!(f, "{n}"),
            Self::I16(n) => write!(f, "{n}"),
            Self::U8(n) => write!(f, "{n}"),
            Self::F64(v) => fmt_f64(*v, f),
            Self::F32(v) => fmt_f32(*v, f),
        }
    }
}

fn fmt_f64(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        f.write_str("NaN")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{v}")
    }
}

fn fmt_f32(v: f32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        f.write_str("NaN")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{v}")
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<i128> for Number {
    fn from(n: i128) -> Self {
        Self::I128(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::I64(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::I32(n)
    }
}

impl From<i16> for Number {
    fn from(n: i16) -> Self {
        Self::I16(n)
    }
}

impl From<u8> for Number {
    fn from(n: u8) -> Self {
        Self::U8(n)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}
