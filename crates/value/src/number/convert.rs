//! Exact cross-kind numeric conversion.
//!
//! Every conversion either produces a value that compares equal to the
//! source in the target representation or refuses with a [`NumberError`].
//! Integer narrowing range-checks, integer to float demands a lossless
//! round-trip, float to integer demands a finite fractionless in-range
//! value, and decimal exactness follows the shortest-representation
//! round-trip of the float formats. Boundary values (target MIN and MAX)
//! convert successfully.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use super::{Number, NumberError, NumberKind};

impl Number {
    /// Converts to `target`, exactly or not at all.
    ///
    /// Same-kind conversion is a copy.
    pub fn to_kind(self, target: NumberKind) -> Result<Number, NumberError> {
        if self.kind() == target {
            return Ok(self);
        }
        match target {
            NumberKind::Decimal => self.to_decimal_exact().map(Number::Decimal),
            NumberKind::I128 => self.to_i128_exact().map(Number::I128),
            NumberKind::I64 => self.to_i64_exact().map(Number::I64),
            NumberKind::I32 => self.to_i32_exact().map(Number::I32),
            NumberKind::I16 => self.to_i16_exact().map(Number::I16),
            NumberKind::U8 => self.to_u8_exact().map(Number::U8),
            NumberKind::F64 => self.to_f64_exact().map(Number::F64),
            NumberKind::F32 => self.to_f32_exact().map(Number::F32),
        }
    }

    /// Exact value as `i128`.
    pub fn to_i128_exact(self) -> Result<i128, NumberError> {
        self.integral_value(NumberKind::I128)
    }

    /// Exact value as `i64`.
    pub fn to_i64_exact(self) -> Result<i64, NumberError> {
        let wide = self.integral_value(NumberKind::I64)?;
        i64::try_from(wide).map_err(|_| NumberError::out_of_range(self, NumberKind::I64))
    }

    /// Exact value as `i32`.
    pub fn to_i32_exact(self) -> Result<i32, NumberError> {
        let wide = self.integral_value(NumberKind::I32)?;
        i32::try_from(wide).map_err(|_| NumberError::out_of_range(self, NumberKind::I32))
    }

    /// Exact value as `i16`.
    pub fn to_i16_exact(self) -> Result<i16, NumberError> {
        let wide = self.integral_value(NumberKind::I16)?;
        i16::try_from(wide).map_err(|_| NumberError::out_of_range(self, NumberKind::I16))
    }

    /// Exact value as `u8`.
    pub fn to_u8_exact(self) -> Result<u8, NumberError> {
        let wide = self.integral_value(NumberKind::U8)?;
        u8::try_from(wide).map_err(|_| NumberError::out_of_range(self, NumberKind::U8))
    }

    /// Exact value as `f64`.
    pub fn to_f64_exact(self) -> Result<f64, NumberError> {
        const TARGET: NumberKind = NumberKind::F64;
        match self {
            Self::Decimal(d) => {
                let v = d.to_f64().ok_or_else(|| NumberError::inexact(d, TARGET))?;
                match Decimal::from_f64(v) {
                    Some(back) if back == d => Ok(v),
                    _ => Err(NumberError::inexact(d, TARGET)),
                }
            }
            Self::I128(n) => int_to_f64(n, self),
            Self::I64(n) => int_to_f64(i128::from(n), self),
            // 32 bits and below always fit the 53-bit significand.
            Self::I32(n) => Ok(f64::from(n)),
            Self::I16(n) => Ok(f64::from(n)),
            Self::U8(n) => Ok(f64::from(n)),
            Self::F64(v) => Ok(v),
            Self::F32(v) => Ok(f64::from(v)),
        }
    }

    /// Exact value as `f32`. NaN and the infinities never narrow.
    pub fn to_f32_exact(self) -> Result<f32, NumberError> {
        const TARGET: NumberKind = NumberKind::F32;
        match self {
            Self::Decimal(d) => {
                let v = d.to_f32().ok_or_else(|| NumberError::inexact(d, TARGET))?;
                match Decimal::from_f32(v) {
                    Some(back) if back == d => Ok(v),
                    _ => Err(NumberError::inexact(d, TARGET)),
                }
            }
            Self::I128(n) => int_to_f32(n, self),
            Self::I64(n) => int_to_f32(i128::from(n), self),
            // The 24-bit significand does not cover i32.
            Self::I32(n) => int_to_f32(i128::from(n), self),
            Self::I16(n) => Ok(f32::from(n)),
            Self::U8(n) => Ok(f32::from(n)),
            Self::F64(v) => {
                if !v.is_finite() {
                    return Err(NumberError::inexact(self, TARGET));
                }
                let narrowed = v as f32;
                if f64::from(narrowed) == v {
                    Ok(narrowed)
                } else {
                    Err(NumberError::inexact(self, TARGET))
                }
            }
            Self::F32(v) => Ok(v),
        }
    }

    /// Exact value as a decimal.
    ///
    /// Floats convert through their shortest decimal representation, the
    /// canonical way of reading a float back as a decimal. Integers beyond
    /// the decimal significand are out of range, not rounded.
    pub fn to_decimal_exact(self) -> Result<Decimal, NumberError> {
        const TARGET: NumberKind = NumberKind::Decimal;
        match self {
            Self::Decimal(d) => Ok(d),
            Self::I128(n) => {
                Decimal::from_i128(n).ok_or_else(|| NumberError::out_of_range(self, TARGET))
            }
            Self::I64(n) => Ok(Decimal::from(n)),
            Self::I32(n) => Ok(Decimal::from(n)),
            Self::I16(n) => Ok(Decimal::from(n)),
            Self::U8(n) => Ok(Decimal::from(n)),
            Self::F64(v) => {
                if !v.is_finite() {
                    return Err(NumberError::inexact(self, TARGET));
                }
                Decimal::from_f64(v).ok_or_else(|| NumberError::out_of_range(self, TARGET))
            }
            Self::F32(v) => {
                if !v.is_finite() {
                    return Err(NumberError::inexact(self, TARGET));
                }
                Decimal::from_f32(v).ok_or_else(|| NumberError::out_of_range(self, TARGET))
            }
        }
    }

    /// The value as a wide integer, when it is integral; errors name
    /// `target` so the narrowing wrappers report the requested kind.
    fn integral_value(self, target: NumberKind) -> Result<i128, NumberError> {
        match self {
            Self::Decimal(d) => {
                if !d.is_integer() {
                    return Err(NumberError::inexact(d, target));
                }
                d.to_i128().ok_or_else(|| NumberError::out_of_range(d, target))
            }
            Self::I128(n) => Ok(n),
            Self::I64(n) => Ok(i128::from(n)),
            Self::I32(n) => Ok(i128::from(n)),
            Self::I16(n) => Ok(i128::from(n)),
            Self::U8(n) => Ok(i128::from(n)),
            Self::F64(v) => float_integral(v, self, target),
            Self::F32(v) => float_integral(f64::from(v), self, target),
        }
    }
}

fn float_integral(v: f64, source: Number, target: NumberKind) -> Result<i128, NumberError> {
    if !v.is_finite() || v.fract() != 0.0 {
        return Err(NumberError::inexact(source, target));
    }
    v.to_i128().ok_or_else(|| NumberError::out_of_range(source, target))
}

fn int_to_f64(n: i128, source: Number) -> Result<f64, NumberError> {
    let v = n as f64;
    if v.to_i128() == Some(n) {
        Ok(v)
    } else {
        Err(NumberError::inexact(source, NumberKind::F64))
    }
}

fn int_to_f32(n: i128, source: Number) -> Result<f32, NumberError> {
    let v = n as f32;
    if v.to_i128() == Some(n) {
        Ok(v)
    } else {
        Err(NumberError::inexact(source, NumberKind::F32))
    }
}
