//! Dynamically-kinded values for the tabula conversion engine.
//!
//! The crate defines [`Value`], a closed tagged union over booleans, eight
//! numeric kinds, characters, text, locale tags, naive temporals and lists,
//! plus the exact numeric kind-change arithmetic ([`Number::to_kind`]) that
//! the conversion engine builds on. Conversions between kinds live in the
//! `tabula-convert` crate; this crate only knows how to represent values,
//! classify them ([`ValueKind`]) and move numbers between numeric kinds
//! without silently losing information.

#![warn(missing_docs)]

mod display;
mod kind;
mod list;
mod locale;
mod number;
mod text;
mod value;

pub use kind::ValueKind;
pub use list::List;
pub use locale::{LocaleTag, LocaleTagError};
pub use number::{Number, NumberError, NumberKind};
pub use text::Text;
pub use value::Value;

// Re-export the foreign types embedded in `Value` so downstream crates can
// name them without depending on chrono or rust_decimal directly.
pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
pub use rust_decimal::Decimal;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Decimal, List, LocaleTag, NaiveDate, NaiveDateTime, NaiveTime, Number, NumberError,
        NumberKind, Text, Value, ValueKind,
    };
}
