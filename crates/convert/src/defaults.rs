//! The standard converter catalog.
//!
//! [`standard`] wires every stock converter into one alternation. Order
//! matters: identity sits first so same-kind requests never touch a parser,
//! the structured text producers sit before [`to_text`] so locale symbols and
//! temporal patterns win over plain display, and [`to_text`] closes the list
//! as the universal fallback.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::collection::{list_to_text, text_to_list};
use crate::combinators::{accept_char_as_text, alternation, return_text_as_char};
use crate::converter::Converter;
use crate::format::{
    date_time_to_text, date_to_text, number_to_text, text_to_date, text_to_date_time,
    text_to_number, text_to_time, time_to_text,
};
use crate::numeric::{boolean_to_number, number_to_boolean, number_to_number};
use crate::simple::identity;
use crate::temporal::{
    date_time_to_date, date_time_to_number, date_time_to_time, date_to_date_time, date_to_number,
    number_to_date, number_to_date_time, number_to_time, time_to_date_time, time_to_number,
};
use crate::text::{
    char_to_text, locale_to_text, text_to_boolean, text_to_char, text_to_locale, to_text,
};

static STANDARD: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    alternation(vec![
        identity(),
        number_to_number(),
        number_to_boolean(),
        boolean_to_number(),
        text_to_boolean(),
        date_to_number(),
        number_to_date(),
        time_to_number(),
        number_to_time(),
        date_time_to_number(),
        number_to_date_time(),
        date_to_date_time(),
        date_time_to_date(),
        date_time_to_time(),
        time_to_date_time(),
        text_to_number(),
        accept_char_as_text(text_to_number()),
        text_to_date(),
        text_to_time(),
        text_to_date_time(),
        text_to_char(),
        text_to_locale(),
        text_to_list(),
        list_to_text(),
        char_to_text(),
        locale_to_text(),
        number_to_text(),
        date_to_text(),
        time_to_text(),
        date_time_to_text(),
        return_text_as_char(to_text()),
        to_text(),
    ])
});

/// The shared standard catalog.
///
/// This is the converter a [`BasicContext`](crate::BasicContext) built with
/// [`Default`] recurses through. Custom catalogs compose the same stock
/// converters through [`alternation`] in whatever order suits them.
pub fn standard() -> Arc<dyn Converter> {
    Arc::clone(&STANDARD)
}
