//! Locale-sensitive parsing and formatting.
//!
//! Format converters derive a formatter from context parameters and cache it
//! in a single replace-on-miss slot keyed by those parameters, so repeated
//! conversions under one context pay for the derivation once.

mod cache;
mod decimal;
mod temporal;

pub use decimal::{number_to_text, text_to_number, ParseNumberError};
pub use temporal::{
    date_time_to_text, date_to_text, text_to_date, text_to_date_time, text_to_time, time_to_text,
    ParseTemporalError,
};
