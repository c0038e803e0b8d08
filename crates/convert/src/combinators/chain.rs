//! Two-stage conversion through an intermediate kind.

use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

use tabula_value::{Value, ValueKind};
use tracing::trace;

use crate::context::ConverterContext;
use crate::converter::Converter;
use crate::error::ConvertResult;

/// Pipes the first converter's output into the second.
///
/// The predicate delegates to the first stage; whether the second stage can
/// pick up the intermediate value only shows once it exists, so `convert`
/// may still fail after a `true` probe, like any other converter.
#[derive(Debug)]
struct Chain {
    first: Arc<dyn Converter>,
    intermediate: ValueKind,
    second: Arc<dyn Converter>,
}

impl Converter for Chain {
    fn can_convert(&self, value: &Value, _target: ValueKind, ctx: &dyn ConverterContext) -> bool {
        self.first.can_convert(value, self.intermediate, ctx)
    }

    fn convert(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        let intermediate = match self.first.convert(value, self.intermediate, ctx) {
            Ok(converted) => converted,
            Err(failure) => {
                trace!(
                    converter = %self.first.label(),
                    intermediate = %self.intermediate,
                    %failure,
                    "first chain stage failed"
                );
                return Err(failure);
            }
        };
        self.second.convert(&intermediate, target, ctx)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} -> {} -> {}",
            self.first.label(),
            self.intermediate,
            self.second.label()
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Chains `first` into `second` through the `intermediate` kind.
pub fn chain(
    first: Arc<dyn Converter>,
    intermediate: ValueKind,
    second: Arc<dyn Converter>,
) -> Arc<dyn Converter> {
    Arc::new(Chain { first, intermediate, second })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::format::text_to_number;
    use crate::numeric::number_to_boolean;
    use crate::test_support::leaf_context;

    fn text_to_boolean_via_number() -> Arc<dyn Converter> {
        chain(text_to_number(), ValueKind::I64, number_to_boolean())
    }

    #[test]
    fn pipes_through_the_intermediate_kind() {
        let ctx = leaf_context();
        let conv = text_to_boolean_via_number();

        assert!(conv.can_convert(&Value::text("0"), ValueKind::Boolean, &ctx));
        assert_eq!(
            conv.convert(&Value::text("0"), ValueKind::Boolean, &ctx),
            Ok(Value::boolean(false))
        );
        assert_eq!(
            conv.convert(&Value::text("17"), ValueKind::Boolean, &ctx),
            Ok(Value::boolean(true))
        );
    }

    #[test]
    fn first_stage_failure_propagates() {
        let ctx = leaf_context();
        let conv = text_to_boolean_via_number();

        let err = conv.convert(&Value::text("abc"), ValueKind::Boolean, &ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to convert \"abc\" (text) to i64, invalid number literal \"abc\""
        );
    }

    #[test]
    fn second_stage_failure_propagates() {
        let ctx = leaf_context();
        let conv = chain(text_to_number(), ValueKind::Decimal, number_to_boolean());

        let err = conv.convert(&Value::text("1.5"), ValueKind::Date, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Failed to convert 1.5 (decimal) to date");
    }

    #[test]
    fn label_names_all_three_parts() {
        let conv = text_to_boolean_via_number();
        assert_eq!(conv.label(), "text to number -> i64 -> number to boolean");
    }
}
