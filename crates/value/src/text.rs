//! Cheap-clone immutable text.

use core::fmt;
use std::borrow::Borrow;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable UTF-8 text with O(1) clone.
///
/// Wraps `Arc<str>`, so values copied between conversion stages never copy
/// the underlying bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Text {
    inner: Arc<str>,
}

impl Text {
    /// Builds text from anything string-like.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self { inner: Arc::from(s.as_ref()) }
    }

    /// Borrows the contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of characters, not bytes.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<str> for Text {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<char> for Text {
    fn from(c: char) -> Self {
        Self::new(c.encode_utf8(&mut [0; 4]))
    }
}

impl From<Arc<str>> for Text {
    fn from(inner: Arc<str>) -> Self {
        Self { inner }
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
