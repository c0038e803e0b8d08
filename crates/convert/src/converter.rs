//! The conversion contract and the guarded template.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tabula_value::{Value, ValueKind};

use crate::context::ConverterContext;
use crate::error::{ConvertError, ConvertResult};

/// A conversion between value kinds.
///
/// Implementations are stateless and shared behind `Arc`; the context carries
/// everything environment-dependent (locale, epoch offset, separators).
/// Expected failures come back as `Err`; `convert` never panics for values
/// the converter merely cannot handle.
pub trait Converter: fmt::Debug + Send + Sync {
    /// Whether `value` can be taken to `target` under `ctx`.
    ///
    /// A `true` here is a claim, not a promise: predicates are kind checks,
    /// so a textual value may still fail to parse in [`convert`].
    ///
    /// [`convert`]: Converter::convert
    fn can_convert(&self, value: &Value, target: ValueKind, ctx: &dyn ConverterContext) -> bool;

    /// Converts `value` to `target`, or reports why it could not.
    fn convert(&self, value: &Value, target: ValueKind, ctx: &dyn ConverterContext)
    -> ConvertResult;

    /// Short diagnostic label, also used to build composite labels.
    fn label(&self) -> Cow<'_, str>;

    /// Runtime self-reference for combinator introspection.
    fn as_any(&self) -> &dyn Any;

    /// Converts, panicking on failure.
    ///
    /// For call sites that have already probed [`can_convert`] and treat a
    /// failure as a programming error.
    ///
    /// # Panics
    ///
    /// Panics with the failure message when the conversion fails.
    ///
    /// [`can_convert`]: Converter::can_convert
    fn convert_or_fail(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> Value {
        match self.convert(value, target, ctx) {
            Ok(converted) => converted,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Template for converters guarded by value and target predicates.
///
/// The blanket [`Converter`] impl re-checks the predicates inside `convert`,
/// so calling `convert` without probing first still fails cleanly instead of
/// reaching [`transform`] with a value it was never meant to see. Null gets a
/// fast path: accepted nulls never reach `transform` and come back as
/// [`null_substitute`], which converters producing text override to return
/// `"null"`.
///
/// [`transform`]: GuardedConverter::transform
/// [`null_substitute`]: GuardedConverter::null_substitute
pub trait GuardedConverter: fmt::Debug + Send + Sync + 'static {
    /// The converter's diagnostic label.
    fn guarded_label(&self) -> &'static str;

    /// Whether null input is accepted. Defaults to true.
    fn accepts_null(&self) -> bool {
        true
    }

    /// Whether a non-null `value` is accepted.
    fn accepts_value(&self, value: &Value) -> bool;

    /// Whether `target` is a kind this converter produces.
    fn accepts_target(&self, target: ValueKind) -> bool;

    /// The result for accepted null input.
    fn null_substitute(&self) -> Value {
        Value::Null
    }

    /// The actual conversion. Only reached with an accepted non-null value
    /// and an accepted target.
    fn transform(&self, value: &Value, target: ValueKind, ctx: &dyn ConverterContext)
    -> ConvertResult;
}

impl<G: GuardedConverter> Converter for G {
    fn can_convert(&self, value: &Value, target: ValueKind, _ctx: &dyn ConverterContext) -> bool {
        if !self.accepts_target(target) {
            return false;
        }
        if value.is_null() {
            return self.accepts_null();
        }
        self.accepts_value(value)
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
            return Ok(self.null_substitute());
        }
        self.transform(value, target, ctx)
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.guarded_label())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Closure-backed converter for simple one-step mappings.
///
/// Mapping leaves refuse null so the catalog's null handling stays with the
/// struct converters and the text fallback.
struct Mapping<A, B, T> {
    label: &'static str,
    accepts_value: A,
    accepts_target: B,
    transform: T,
}

impl<A, B, T> fmt::Debug for Mapping<A, B, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping").field("label", &self.label).finish_non_exhaustive()
    }
}

impl<A, B, T> GuardedConverter for Mapping<A, B, T>
where
    A: Fn(&Value) -> bool + Send + Sync + 'static,
    B: Fn(ValueKind) -> bool + Send + Sync + 'static,
    T: Fn(&Value, ValueKind, &dyn ConverterContext) -> ConvertResult + Send + Sync + 'static,
{
    fn guarded_label(&self) -> &'static str {
        self.label
    }

    fn accepts_null(&self) -> bool {
        false
    }

    fn accepts_value(&self, value: &Value) -> bool {
        (self.accepts_value)(value)
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        (self.accepts_target)(target)
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        (self.transform)(value, target, ctx)
    }
}

/// Builds a converter from a label and three closures.
pub fn mapping<A, B, T>(
    label: &'static str,
    accepts_value: A,
    accepts_target: B,
    transform: T,
) -> Arc<dyn Converter>
where
    A: Fn(&Value) -> bool + Send + Sync + 'static,
    B: Fn(ValueKind) -> bool + Send + Sync + 'static,
    T: Fn(&Value, ValueKind, &dyn ConverterContext) -> ConvertResult + Send + Sync + 'static,
{
    Arc::new(Mapping { label, accepts_value, accepts_target, transform })
}
