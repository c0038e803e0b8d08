//! Contexts shared by the unit tests.

use crate::context::BasicContext;
use crate::{defaults, simple};

/// A context whose recursive conversions run through the standard catalog.
pub(crate) fn catalog_context() -> BasicContext {
    BasicContext::new(defaults::standard())
}

/// A context for exercising converters in isolation. Recursive conversions
/// refuse everything, so a test fails loudly if a leaf unexpectedly recurses.
pub(crate) fn leaf_context() -> BasicContext {
    BasicContext::new(simple::never())
}
