//! Trivial converters.

use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tabula_value::{Value, ValueKind};

use crate::context::ConverterContext;
use crate::converter::Converter;
use crate::error::{ConvertError, ConvertResult};

/// Clones values already of the requested kind.
///
/// Numeric values also satisfy the [`ValueKind::Number`] family target, so
/// the identity sits first in the standard catalog and short-circuits
/// requests that need no work.
#[derive(Debug)]
struct Identity;

impl Identity {
    fn applies(value: &Value, target: ValueKind) -> bool {
        value.kind() == target || (target == ValueKind::Number && value.kind().is_numeric())
    }
}

impl Converter for Identity {
    fn can_convert(&self, value: &Value, target: ValueKind, _ctx: &dyn ConverterContext) -> bool {
        Self::applies(value, target)
    }

    fn convert(
        &self,
        value: &Value,
        target: ValueKind,
        _ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        if Self::applies(value, target) {
            Ok(value.clone())
        } else {
            Err(ConvertError::new(value, target))
        }
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("identity")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Refuses everything.
#[derive(Debug)]
struct Never;

impl Converter for Never {
    fn can_convert(&self, _value: &Value, _target: ValueKind, _ctx: &dyn ConverterContext) -> bool {
        false
    }

    fn convert(
        &self,
        value: &Value,
        target: ValueKind,
        _ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        Err(ConvertError::new(value, target))
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed("never")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

static IDENTITY: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(Identity));
static NEVER: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(Never));

/// The shared identity converter.
pub fn identity() -> Arc<dyn Converter> {
    Arc::clone(&IDENTITY)
}

/// The shared converter that refuses every request.
pub fn never() -> Arc<dyn Converter> {
    Arc::clone(&NEVER)
}
