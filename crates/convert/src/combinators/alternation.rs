//! Ordered fallback across candidate converters.

use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

use tabula_value::{Value, ValueKind};
use tracing::trace;

use crate::context::ConverterContext;
use crate::converter::Converter;
use crate::error::{ConvertError, ConvertResult};

/// Tries candidates in order; the first success wins.
///
/// A candidate whose predicate accepted the request but whose conversion
/// failed is skipped and the remaining candidates are still probed. Probes
/// are cheap kind checks, so a value like `"3x"` may pass a text-accepting
/// candidate's probe and only fail in its parser; a later candidate may
/// still serve the request.
#[derive(Debug)]
struct Alternation {
    candidates: Vec<Arc<dyn Converter>>,
}

impl Converter for Alternation {
    fn can_convert(&self, value: &Value, target: ValueKind, ctx: &dyn ConverterContext) -> bool {
        self.candidates.iter().any(|candidate| candidate.can_convert(value, target, ctx))
    }

    fn convert(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        for candidate in &self.candidates {
            if !candidate.can_convert(value, target, ctx) {
                continue;
            }
            match candidate.convert(value, target, ctx) {
                Ok(converted) => return Ok(converted),
                Err(failure) => {
                    trace!(
                        converter = %candidate.label(),
                        %failure,
                        "candidate failed, trying the next"
                    );
                }
            }
        }
        Err(ConvertError::new(value, target))
    }

    fn label(&self) -> Cow<'_, str> {
        let labels: Vec<_> = self.candidates.iter().map(|candidate| candidate.label()).collect();
        Cow::Owned(labels.join(" | "))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Combines `candidates` into an ordered alternation.
///
/// A single candidate is returned as-is.
///
/// # Panics
///
/// Panics when `candidates` is empty; an alternation with nothing to try is
/// a construction error, not a runtime condition.
pub fn alternation(mut candidates: Vec<Arc<dyn Converter>>) -> Arc<dyn Converter> {
    assert!(!candidates.is_empty(), "alternation requires at least one candidate");
    if candidates.len() == 1 {
        return candidates.remove(0);
    }
    Arc::new(Alternation { candidates })
}
