//! Diagnostic renaming.

use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

use tabula_value::{Value, ValueKind};

use crate::context::ConverterContext;
use crate::converter::Converter;
use crate::error::ConvertResult;

/// A converter whose label was replaced.
#[derive(Debug)]
struct Relabeled {
    inner: Arc<dyn Converter>,
    label: &'static str,
}

impl Converter for Relabeled {
    fn can_convert(&self, value: &Value, target: ValueKind, ctx: &dyn ConverterContext) -> bool {
        self.inner.can_convert(value, target, ctx)
    }

    fn convert(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        self.inner.convert(value, target, ctx)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.label)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Gives `converter` a new diagnostic label.
///
/// Relabelling is idempotent: when the converter already carries `label` the
/// same `Arc` comes straight back, and relabelling an already relabelled
/// converter re-targets the original instead of nesting wrappers.
pub fn relabel(converter: Arc<dyn Converter>, label: &'static str) -> Arc<dyn Converter> {
    if converter.label() == label {
        return converter;
    }
    let inner = match converter.as_any().downcast_ref::<Relabeled>() {
        Some(relabeled) => Arc::clone(&relabeled.inner),
        None => converter,
    };
    Arc::new(Relabeled { inner, label })
}
