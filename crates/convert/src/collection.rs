//! List converters.
//!
//! List literals are separator-joined elements. An element starting with a
//! double quote runs to the matching close quote and may contain the
//! separator verbatim; `""` inside a quoted element is an escaped quote.
//! Formatting mirrors the same grammar so lists round-trip through text.

use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tabula_value::{List, Value, ValueKind};

use crate::context::ConverterContext;
use crate::converter::{Converter, GuardedConverter};
use crate::error::{ConvertError, ConvertResult};

/// Splits a list literal into element strings.
fn split_literal(input: &str, separator: char) -> Result<Vec<String>, String> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let mut elements = Vec::new();
    let mut chars = input.chars().peekable();
    loop {
        let element = if chars.peek() == Some(&'"') {
            chars.next();
            let mut content = String::new();
            loop {
                match chars.next() {
                    Some('"') => {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            content.push('"');
                        } else {
                            break;
                        }
                    }
                    Some(c) => content.push(c),
                    None => return Err("missing closing quote".to_owned()),
                }
            }
            match chars.peek() {
                Some(&c) if c != separator => {
                    return Err(format!("unexpected {c:?} after closing quote"));
                }
                _ => {}
            }
            content
        } else {
            let mut content = String::new();
            while let Some(&c) = chars.peek() {
                if c == separator {
                    break;
                }
                content.push(c);
                chars.next();
            }
            content
        };
        elements.push(element);
        match chars.next() {
            None => return Ok(elements),
            Some(_) => {
                if chars.peek().is_none() {
                    return Err("missing element after separator".to_owned());
                }
            }
        }
    }
}

/// Quotes an element whose rendering would not survive the round trip.
fn quote_element(element: &str, separator: char) -> String {
    if element.contains(separator) || element.starts_with('"') {
        let mut quoted = String::with_capacity(element.len() + 2);
        quoted.push('"');
        for c in element.chars() {
            if c == '"' {
                quoted.push('"');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    } else {
        element.to_owned()
    }
}

/// Parses a list literal into a list of text elements.
#[derive(Debug)]
struct TextToList;

impl GuardedConverter for TextToList {
    fn guarded_label(&self) -> &'static str {
        "text to list"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Text(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target == ValueKind::List
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Text(t) => {
                let elements = split_literal(t.as_str(), ctx.value_separator())
                    .map_err(|cause| ConvertError::with_cause(value, target, cause))?;
                Ok(Value::List(elements.into_iter().map(Value::text).collect()))
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

/// Converts every element of a list to one kind through the context.
#[derive(Debug)]
struct ListOf {
    element: ValueKind,
    label: String,
}

impl Converter for ListOf {
    fn can_convert(&self, value: &Value, target: ValueKind, _ctx: &dyn ConverterContext) -> bool {
        target == ValueKind::List && matches!(value, Value::List(_) | Value::Null)
    }

    fn convert(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Null if target == ValueKind::List => Ok(Value::Null),
            Value::List(items) if target == ValueKind::List => {
                let mut converted = List::new();
                for item in items {
                    let element = ctx
                        .convert(item, self.element)
                        .map_err(|cause| ConvertError::with_cause(value, target, cause))?;
                    converted.push(element);
                }
                Ok(Value::List(converted))
            }
            other => Err(ConvertError::new(other, target)),
        }
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Renders a list as a separator-joined literal.
#[derive(Debug)]
struct ListToText;

impl GuardedConverter for ListToText {
    fn guarded_label(&self) -> &'static str {
        "list to text"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::List(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target == ValueKind::Text
    }

    fn null_substitute(&self) -> Value {
        Value::text("null")
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::List(items) => {
                let separator = ctx.value_separator();
                let mut out = String::new();
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push(separator);
                    }
                    let piece = ctx
                        .convert(item, ValueKind::Text)
                        .map_err(|cause| ConvertError::with_cause(value, target, cause))?;
                    out.push_str(&quote_element(&piece.to_string(), separator));
                }
                Ok(Value::text(out))
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

static TEXT_TO_LIST: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(TextToList));
static LIST_TO_TEXT: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(ListToText));

/// The shared list literal parser.
pub fn text_to_list() -> Arc<dyn Converter> {
    Arc::clone(&TEXT_TO_LIST)
}

/// The shared list literal formatter.
pub fn list_to_text() -> Arc<dyn Converter> {
    Arc::clone(&LIST_TO_TEXT)
}

/// A converter taking every list element to `element` through the context.
pub fn list_of(element: ValueKind) -> Arc<dyn Converter> {
    Arc::new(ListOf { element, label: format!("list of {element}") })
}
