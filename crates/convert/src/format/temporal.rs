//! Pattern-based temporal text.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tabula_value::{LocaleTag, NaiveDate, NaiveDateTime, NaiveTime, Value, ValueKind};

use crate::context::ConverterContext;
use crate::converter::{Converter, GuardedConverter};
use crate::error::{ConvertError, ConvertResult};
use crate::format::cache::ReplaceCache;

/// Temporal text that did not match its pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{input:?} does not match the {kind} pattern: {details}")]
pub struct ParseTemporalError {
    kind: ValueKind,
    input: String,
    details: String,
}

/// Parses and formats one temporal kind with one strftime pattern.
#[derive(Debug, Clone)]
struct TemporalFormatter {
    kind: ValueKind,
    pattern: String,
}

impl TemporalFormatter {
    fn new(kind: ValueKind, pattern: &str, two_digit_years: bool) -> Self {
        let pattern =
            if two_digit_years { pattern.replace("%Y", "%y") } else { pattern.to_owned() };
        Self { kind, pattern }
    }

    fn parse(&self, input: &str) -> Result<Value, ParseTemporalError> {
        let trimmed = input.trim();
        let parsed = match self.kind {
            ValueKind::Date => NaiveDate::parse_from_str(trimmed, &self.pattern).map(Value::date),
            ValueKind::Time => NaiveTime::parse_from_str(trimmed, &self.pattern).map(Value::time),
            _ => NaiveDateTime::parse_from_str(trimmed, &self.pattern).map(Value::date_time),
        };
        parsed.map_err(|err| ParseTemporalError {
            kind: self.kind,
            input: input.to_owned(),
            details: err.to_string(),
        })
    }

    /// Formats a temporal value, `None` for any other variant.
    fn format(&self, value: &Value) -> Option<String> {
        match value {
            Value::Date(d) => Some(d.format(&self.pattern).to_string()),
            Value::Time(t) => Some(t.format(&self.pattern).to_string()),
            Value::DateTime(dt) => Some(dt.format(&self.pattern).to_string()),
            _ => None,
        }
    }
}

type FormatterCache = ReplaceCache<(LocaleTag, String, bool), TemporalFormatter>;

fn pattern_for<'a>(ctx: &'a dyn ConverterContext, kind: ValueKind) -> &'a str {
    let patterns = ctx.temporal_patterns();
    match kind {
        ValueKind::Date => &patterns.date,
        ValueKind::Time => &patterns.time,
        _ => &patterns.date_time,
    }
}

fn cached_formatter(
    cache: &FormatterCache,
    ctx: &dyn ConverterContext,
    kind: ValueKind,
) -> Arc<((LocaleTag, String, bool), TemporalFormatter)> {
    let key = (ctx.locale().clone(), pattern_for(ctx, kind).to_owned(), ctx.two_digit_years());
    cache.get_or_build(key, |key| TemporalFormatter::new(kind, &key.1, key.2))
}

#[derive(Debug)]
struct TextToTemporal {
    label: &'static str,
    target: ValueKind,
    cache: FormatterCache,
}

impl GuardedConverter for TextToTemporal {
    fn guarded_label(&self) -> &'static str {
        self.label
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Text(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target == self.target
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Text(t) => cached_formatter(&self.cache, ctx, self.target)
                .1
                .parse(t.as_str())
                .map_err(|cause| ConvertError::with_cause(value, target, cause)),
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct TemporalToText {
    label: &'static str,
    source: ValueKind,
    cache: FormatterCache,
}

impl GuardedConverter for TemporalToText {
    fn guarded_label(&self) -> &'static str {
        self.label
    }

    fn accepts_value(&self, value: &Value) -> bool {
        value.kind() == self.source
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
        cached_formatter(&self.cache, ctx, self.source)
            .1
            .format(value)
            .map(Value::text)
            .ok_or_else(|| ConvertError::new(value, target))
    }
}

static TEXT_TO_DATE: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    Arc::new(TextToTemporal {
        label: "text to date",
        target: ValueKind::Date,
        cache: ReplaceCache::new(),
    })
});
static TEXT_TO_TIME: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    Arc::new(TextToTemporal {
        label: "text to time",
        target: ValueKind::Time,
        cache: ReplaceCache::new(),
    })
});
static TEXT_TO_DATE_TIME: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    Arc::new(TextToTemporal {
        label: "text to datetime",
        target: ValueKind::DateTime,
        cache: ReplaceCache::new(),
    })
});
static DATE_TO_TEXT: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    Arc::new(TemporalToText {
        label: "date to text",
        source: ValueKind::Date,
        cache: ReplaceCache::new(),
    })
});
static TIME_TO_TEXT: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    Arc::new(TemporalToText {
        label: "time to text",
        source: ValueKind::Time,
        cache: ReplaceCache::new(),
    })
});
static DATE_TIME_TO_TEXT: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    Arc::new(TemporalToText {
        label: "datetime to text",
        source: ValueKind::DateTime,
        cache: ReplaceCache::new(),
    })
});

/// The shared date parser.
pub fn text_to_date() -> Arc<dyn Converter> {
    Arc::clone(&TEXT_TO_DATE)
}

/// The shared time parser.
pub fn text_to_time() -> Arc<dyn Converter> {
    Arc::clone(&TEXT_TO_TIME)
}

/// The shared date-time parser.
pub fn text_to_date_time() -> Arc<dyn Converter> {
    Arc::clone(&TEXT_TO_DATE_TIME)
}

/// The shared date formatter.
pub fn date_to_text() -> Arc<dyn Converter> {
    Arc::clone(&DATE_TO_TEXT)
}

/// The shared time formatter.
pub fn time_to_text() -> Arc<dyn Converter> {
    Arc::clone(&TIME_TO_TEXT)
}

/// The shared date-time formatter.
pub fn date_time_to_text() -> Arc<dyn Converter> {
    Arc::clone(&DATE_TIME_TO_TEXT)
}
