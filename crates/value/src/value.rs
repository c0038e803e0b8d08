//! The core value type.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::{List, LocaleTag, Number, Text, ValueKind};

/// A dynamically-kinded value.
///
/// The kind set is closed: conversion targets are named by [`ValueKind`] and
/// every variant classifies as exactly one kind. Temporal variants are naive
/// (no timezone); serial-number conversions interpret them against a
/// context-supplied epoch offset.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// `true` / `false`.
    Boolean(bool),
    /// Any of the eight numeric kinds.
    Number(Number),
    /// Single character.
    Char(char),
    /// Immutable text.
    Text(Text),
    /// Language tag.
    Locale(LocaleTag),
    /// Calendar date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Date with time of day.
    DateTime(NaiveDateTime),
    /// Ordered collection.
    List(List),
}

impl Value {
    /// Boolean value.
    #[must_use]
    pub const fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    /// Numeric value of any kind.
    pub fn number(n: impl Into<Number>) -> Self {
        Self::Number(n.into())
    }

    /// Decimal value.
    #[must_use]
    pub const fn decimal(d: Decimal) -> Self {
        Self::Number(Number::Decimal(d))
    }

    /// Wide integer value.
    #[must_use]
    pub const fn i128(n: i128) -> Self {
        Self::Number(Number::I128(n))
    }

    /// 64-bit integer value.
    #[must_use]
    pub const fn i64(n: i64) -> Self {
        Self::Number(Number::I64(n))
    }

    /// 32-bit integer value.
    #[must_use]
    pub const fn i32(n: i32) -> Self {
        Self::Number(Number::I32(n))
    }

    /// 16-bit integer value.
    #[must_use]
    pub const fn i16(n: i16) -> Self {
        Self::Number(Number::I16(n))
    }

    /// 8-bit integer value.
    #[must_use]
    pub const fn u8(n: u8) -> Self {
        Self::Number(Number::U8(n))
    }

    /// Double-precision float value.
    #[must_use]
    pub const fn f64(v: f64) -> Self {
        Self::Number(Number::F64(v))
    }

    /// Single-precision float value.
    #[must_use]
    pub const fn f32(v: f32) -> Self {
        Self::Number(Number::F32(v))
    }

    /// Character value.
    #[must_use]
    pub const fn character(c: char) -> Self {
        Self::Char(c)
    }

    /// Text value.
    pub fn text(s: impl Into<Text>) -> Self {
        Self::Text(s.into())
    }

    /// Locale value.
    #[must_use]
    pub fn locale(tag: LocaleTag) -> Self {
        Self::Locale(tag)
    }

    /// Date value.
    #[must_use]
    pub const fn date(d: NaiveDate) -> Self {
        Self::Date(d)
    }

    /// Time value.
    #[must_use]
    pub const fn time(t: NaiveTime) -> Self {
        Self::Time(t)
    }

    /// Date-time value.
    #[must_use]
    pub const fn date_time(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }

    /// List value.
    pub fn list(items: impl Into<List>) -> Self {
        Self::List(items.into())
    }

    /// The runtime kind of this value.
    ///
    /// Never the family kind [`ValueKind::Number`]; numbers classify as
    /// their concrete kind.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(n) => n.kind().value_kind(),
            Self::Char(_) => ValueKind::Char,
            Self::Text(_) => ValueKind::Text,
            Self::Locale(_) => ValueKind::Locale,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::List(_) => ValueKind::List,
        }
    }

    /// True for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The boolean, if this is one.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The character, if this is one.
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// The text, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// The locale tag, if this is one.
    #[must_use]
    pub fn as_locale(&self) -> Option<&LocaleTag> {
        match self {
            Self::Locale(l) => Some(l),
            _ => None,
        }
    }

    /// The date, if this is one.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// The time, if this is one.
    #[must_use]
    pub const fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// The date-time, if this is one.
    #[must_use]
    pub const fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// The list, if this is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Self::decimal(d)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::i64(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::i32(n)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::f64(v)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl From<Text> for Value {
    fn from(t: Text) -> Self {
        Self::Text(t)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Self::Time(t)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Self::List(l)
    }
}

impl From<LocaleTag> for Value {
    fn from(tag: LocaleTag) -> Self {
        Self::Locale(tag)
    }
}
