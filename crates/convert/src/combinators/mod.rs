//! Converter combinators.
//!
//! Combinators compose shared converters into new ones: sequencing through
//! an intermediate kind ([`chain`]), ordered fallback ([`alternation`]),
//! diagnostic renaming ([`relabel`]) and char/text promotion
//! ([`accept_char_as_text`], [`return_text_as_char`]).

mod alternation;
mod chain;
mod promote;
mod relabel;

pub use alternation::alternation;
pub use chain::chain;
pub use promote::{accept_char_as_text, return_text_as_char};
pub use relabel::relabel;
