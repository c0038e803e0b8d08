//! Conversion between [`tabula_value`] kinds.
//!
//! Everything here implements [`Converter`]: a cheap [`can_convert`] probe
//! paired with a fallible [`convert`]. Stock converters cover the numeric
//! matrix, serial-number temporal conversions, locale-aware text formatting
//! and list literals; combinators compose them into chains and alternations.
//! [`standard`] bundles the whole set, and a [`ConverterContext`] carries the
//! settings (epoch offset, decimal symbols, temporal patterns) plus the hook
//! nested conversions recurse through.
//!
//! ```
//! use tabula_convert::{BasicContext, ConverterContext};
//! use tabula_value::{Value, ValueKind};
//!
//! let ctx = BasicContext::default();
//! assert_eq!(ctx.convert(&Value::text("5"), ValueKind::I64)?, Value::i64(5));
//! assert_eq!(ctx.convert(&Value::i64(0), ValueKind::Boolean)?, Value::boolean(false));
//! # Ok::<(), tabula_convert::ConvertError>(())
//! ```
//!
//! [`can_convert`]: Converter::can_convert
//! [`convert`]: Converter::convert

#![warn(missing_docs)]

mod collection;
mod combinators;
mod context;
mod converter;
mod defaults;
mod error;
mod format;
mod numeric;
mod simple;
mod temporal;
mod text;

#[cfg(test)]
mod test_support;

pub use collection::{list_of, list_to_text, text_to_list};
pub use combinators::{accept_char_as_text, alternation, chain, relabel, return_text_as_char};
pub use context::{
    BasicContext, ConverterContext, DecimalSymbols, TemporalPatterns, EXCEL_1900_EPOCH_OFFSET,
    EXCEL_1904_EPOCH_OFFSET, UNIX_EPOCH_OFFSET,
};
pub use converter::{mapping, Converter, GuardedConverter};
pub use defaults::standard;
pub use error::{ConvertError, ConvertResult};
pub use format::{
    date_time_to_text, date_to_text, number_to_text, text_to_date, text_to_date_time,
    text_to_number, text_to_time, time_to_text, ParseNumberError, ParseTemporalError,
};
pub use numeric::{boolean_to_number, number_to_boolean, number_to_number};
pub use simple::{identity, never};
pub use temporal::{
    date_time_to_date, date_time_to_number, date_time_to_time, date_to_date_time, date_to_number,
    number_to_date, number_to_date_time, number_to_time, time_to_date_time, time_to_number,
};
pub use text::{
    char_to_text, locale_to_text, text_to_boolean, text_to_char, text_to_locale, to_text,
};

/// The traits and types most call sites want in scope.
pub mod prelude {
    pub use crate::context::{BasicContext, ConverterContext};
    pub use crate::converter::{Converter, GuardedConverter};
    pub use crate::defaults::standard;
    pub use crate::error::{ConvertError, ConvertResult};
}
