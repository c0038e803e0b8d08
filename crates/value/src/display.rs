//! Human-readable rendering.
//!
//! [`Value`] displays without any quoting; diagnostics that embed a value in
//! a sentence use [`Value::display_quoted`] so text and characters stay
//! visually delimited.

use std::fmt;

use crate::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Text(t) => f.write_str(t.as_str()),
            Self::Locale(tag) => write!(f, "{tag}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Value {
    /// Renders the value for embedding in diagnostics.
    ///
    /// Text renders with double quotes and escaped contents, characters with
    /// single quotes. Everything else renders as [`Display`](fmt::Display).
    #[must_use]
    pub fn display_quoted(&self) -> String {
        match self {
            Self::Text(t) => format!("{:?}", t.as_str()),
            Self::Char(c) => format!("'{c}'"),
            other => other.to_string(),
        }
    }
}
