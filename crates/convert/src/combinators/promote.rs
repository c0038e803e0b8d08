//! Char/text promotion wrappers.
//!
//! Characters are one-element text in all but kind. These wrappers let
//! text-oriented converters serve char values and char targets without each
//! converter handling the promotion itself.

use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

use tabula_value::{Value, ValueKind};

use crate::context::ConverterContext;
use crate::converter::Converter;
use crate::error::{ConvertError, ConvertResult};

/// Widens a text-accepting converter to also accept chars.
#[derive(Debug)]
struct CharAsText {
    inner: Arc<dyn Converter>,
}

impl Converter for CharAsText {
    fn can_convert(&self, value: &Value, target: ValueKind, ctx: &dyn ConverterContext) -> bool {
        match value {
            Value::Char(c) => self.inner.can_convert(&Value::text(*c), target, ctx),
            other => self.inner.can_convert(other, target, ctx),
        }
    }

    fn convert(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Char(c) => self.inner.convert(&Value::text(*c), target, ctx),
            other => self.inner.convert(other, target, ctx),
        }
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("char-as-text({})", self.inner.label()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Serves char targets through a text-producing converter.
///
/// The inner converter is asked for text; a one-character result becomes the
/// char, anything longer (or shorter) fails descriptively. Null input stays
/// null when the inner converter accepts it, since chars are not a textual
/// kind and never render as `"null"`.
#[derive(Debug)]
struct TextAsChar {
    inner: Arc<dyn Converter>,
}

impl Converter for TextAsChar {
    fn can_convert(&self, value: &Value, target: ValueKind, ctx: &dyn ConverterContext) -> bool {
        target == ValueKind::Char && self.inner.can_convert(value, ValueKind::Text, ctx)
    }

    fn convert(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        if !self.can_convert(value, target, ctx) {
            return Err(ConvertError::new(value, target));
        }
        if value.is_null() {
            return Ok(Value::Null);
        }
        let produced = self.inner.convert(value, ValueKind::Text, ctx)?;
        match &produced {
            Value::Text(text) => {
                let mut chars = text.as_str().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err(ConvertError::with_cause(
                        value,
                        target,
                        format!("expected exactly 1 character but got {}", text.char_count()),
                    )),
                }
            }
            other => Err(ConvertError::with_cause(
                value,
                target,
                format!("inner converter produced {}", other.kind()),
            )),
        }
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("text-as-char({})", self.inner.label()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Widens `inner` to accept char values as one-character text.
pub fn accept_char_as_text(inner: Arc<dyn Converter>) -> Arc<dyn Converter> {
    Arc::new(CharAsText { inner })
}

/// Serves char targets by validating `inner`'s text output has length 1.
pub fn return_text_as_char(inner: Arc<dyn Converter>) -> Arc<dyn Converter> {
    Arc::new(TextAsChar { inner })
}
