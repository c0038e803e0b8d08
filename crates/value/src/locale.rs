//! Language tags.

use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

/// A validated language tag such as `en`, `en-US` or `pt-BR`.
///
/// Validation covers basic well-formedness: ASCII alphanumeric subtags of
/// 1 to 8 characters separated by `-`, with an alphabetic primary subtag.
/// Case is normalized the conventional way (primary lowercase, two-letter
/// region uppercase). Registry validation is out of scope; the tag is an
/// identifier, not a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct LocaleTag {
    tag: Arc<str>,
}

impl LocaleTag {
    /// Parses and normalizes a tag.
    pub fn new(tag: impl AsRef<str>) -> Result<Self, LocaleTagError> {
        let raw = tag.as_ref();
        if raw.is_empty() {
            return Err(LocaleTagError::new(raw, "empty tag"));
        }
        let mut normalized = String::with_capacity(raw.len());
        for (i, part) in raw.split('-').enumerate() {
            if part.is_empty() || part.len() > 8 {
                return Err(LocaleTagError::new(raw, "subtags must be 1 to 8 characters"));
            }
            if !part.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(LocaleTagError::new(raw, "subtags must be ASCII alphanumeric"));
            }
            if i == 0 {
                if !part.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(LocaleTagError::new(raw, "primary subtag must be alphabetic"));
                }
                normalized.extend(part.chars().map(|c| c.to_ascii_lowercase()));
            } else {
                normalized.push('-');
                if part.len() == 2 && part.bytes().all(|b| b.is_ascii_alphabetic()) {
                    normalized.extend(part.chars().map(|c| c.to_ascii_uppercase()));
                } else {
                    normalized.extend(part.chars().map(|c| c.to_ascii_lowercase()));
                }
            }
        }
        Ok(Self { tag: Arc::from(normalized.as_str()) })
    }

    /// The undetermined-language tag, `und`.
    #[must_use]
    pub fn und() -> Self {
        Self { tag: Arc::from("und") }
    }

    /// The normalized tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tag
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::und()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.tag
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = LocaleTagError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LocaleTag> for String {
    fn from(tag: LocaleTag) -> Self {
        tag.tag.to_string()
    }
}

/// Rejection of a malformed language tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid locale tag {tag:?}: {reason}")]
pub struct LocaleTagError {
    tag: String,
    reason: &'static str,
}

impl LocaleTagError {
    fn new(tag: &str, reason: &'static str) -> Self {
        Self { tag: tag.to_owned(), reason }
    }
}
