//! Numeric and boolean converters.
//!
//! Kind changes inside the numeric family delegate to
//! [`Number::to_kind`], which is exact or fails; the converters here only
//! translate its errors into the uniform failure message. Boolean bridges
//! follow the zero test: every zero is false, everything else (NaN and the
//! infinities included) is true.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tabula_value::{Number, Value, ValueKind};

use crate::context::ConverterContext;
use crate::converter::{Converter, GuardedConverter};
use crate::error::{ConvertError, ConvertResult};

/// Takes `number` to the kind `target` requests.
///
/// The family target [`ValueKind::Number`] keeps the number's own kind;
/// concrete targets go through the exact conversion matrix.
pub(crate) fn to_requested_kind(
    number: Number,
    source: &Value,
    target: ValueKind,
) -> ConvertResult {
    match target.number_kind() {
        Some(kind) => number
            .to_kind(kind)
            .map(Value::Number)
            .map_err(|cause| ConvertError::with_cause(source, target, cause)),
        None => Ok(Value::Number(number)),
    }
}

#[derive(Debug)]
struct NumberToNumber;

impl GuardedConverter for NumberToNumber {
    fn guarded_label(&self) -> &'static str {
        "number to number"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target.is_numeric()
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        _ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Number(n) => to_requested_kind(*n, value, target),
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct NumberToBoolean;

impl GuardedConverter for NumberToBoolean {
    fn guarded_label(&self) -> &'static str {
        "number to boolean"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target == ValueKind::Boolean
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        _ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Number(n) => Ok(Value::boolean(!n.is_zero())),
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct BooleanToNumber;

impl GuardedConverter for BooleanToNumber {
    fn guarded_label(&self) -> &'static str {
        "boolean to number"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Boolean(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target.is_numeric()
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        _ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Boolean(b) => to_requested_kind(Number::I64(i64::from(*b)), value, target),
            other => Err(ConvertError::new(other, target)),
        }
    }
}

static NUMBER_TO_NUMBER: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(NumberToNumber));
static NUMBER_TO_BOOLEAN: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(NumberToBoolean));
static BOOLEAN_TO_NUMBER: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(BooleanToNumber));

/// The shared numeric kind-change converter.
pub fn number_to_number() -> Arc<dyn Converter> {
    Arc::clone(&NUMBER_TO_NUMBER)
}

/// The shared number-to-boolean converter.
pub fn number_to_boolean() -> Arc<dyn Converter> {
    Arc::clone(&NUMBER_TO_BOOLEAN)
}

/// The shared boolean-to-number converter.
pub fn boolean_to_number() -> Arc<dyn Converter> {
    Arc::clone(&BOOLEAN_TO_NUMBER)
}
