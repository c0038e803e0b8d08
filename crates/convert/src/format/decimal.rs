//! Locale-sensitive numeric text.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tabula_value::{Decimal, LocaleTag, Number, Value, ValueKind};

use crate::context::{ConverterContext, DecimalSymbols};
use crate::converter::{Converter, GuardedConverter};
use crate::error::{ConvertError, ConvertResult};
use crate::format::cache::ReplaceCache;
use crate::numeric::to_requested_kind;

/// Numeric text that did not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid number literal {input:?}")]
pub struct ParseNumberError {
    input: String,
}

impl ParseNumberError {
    fn new(input: &str) -> Self {
        Self { input: input.to_owned() }
    }
}

/// Parses and formats decimal numerals for one symbol set.
///
/// The grammar is deliberately small: optional sign, group separators in the
/// integral digits, one decimal separator, optionally a scientific exponent.
/// Everything else is left to the caller's own parsing.
#[derive(Debug, Clone)]
struct DecimalFormatter {
    symbols: DecimalSymbols,
}

impl DecimalFormatter {
    fn new(symbols: DecimalSymbols) -> Self {
        Self { symbols }
    }

    fn parse(&self, input: &str) -> Result<Decimal, ParseNumberError> {
        let trimmed = input.trim();
        let (negative, digits) = if let Some(rest) =
            trimmed.strip_prefix(self.symbols.negative_sign)
        {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix(self.symbols.positive_sign) {
            (false, rest)
        } else {
            (false, trimmed)
        };

        let mut normalized = String::with_capacity(digits.len() + 1);
        if negative {
            normalized.push('-');
        }
        for c in digits.chars() {
            if Some(c) == self.symbols.group_separator {
                continue;
            }
            if c == self.symbols.decimal_separator {
                normalized.push('.');
            } else {
                normalized.push(c);
            }
        }

        let parsed = if normalized.contains(['e', 'E']) {
            Decimal::from_scientific(&normalized).ok()
        } else {
            normalized.parse::<Decimal>().ok()
        };
        parsed.ok_or_else(|| ParseNumberError::new(input))
    }

    fn format(&self, n: Number) -> String {
        let canonical = match n {
            Number::Decimal(d) => {
                d.round_sf(self.symbols.precision).unwrap_or(d).normalize().to_string()
            }
            other => other.to_string(),
        };
        self.localize(&canonical)
    }

    /// Rewrites a canonical rendering (ASCII digits, `-`, `.`) into the
    /// symbol set. Non-numeric renderings like `NaN` pass through untouched.
    fn localize(&self, canonical: &str) -> String {
        let (negative, body) = match canonical.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, canonical),
        };
        let (integral, fraction) = match body.split_once('.') {
            Some((integral, fraction)) => (integral, Some(fraction)),
            None => (body, None),
        };

        let mut out = String::with_capacity(canonical.len() + integral.len() / 3 + 1);
        if negative {
            out.push(self.symbols.negative_sign);
        }
        match self.symbols.group_separator {
            Some(sep) if integral.len() > 3 && integral.bytes().all(|b| b.is_ascii_digit()) => {
                for (index, digit) in integral.bytes().enumerate() {
                    if index > 0 && (integral.len() - index) % 3 == 0 {
                        out.push(sep);
                    }
                    out.push(char::from(digit));
                }
            }
            _ => out.push_str(integral),
        }
        if let Some(fraction) = fraction {
            out.push(self.symbols.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

type FormatterCache = ReplaceCache<(LocaleTag, DecimalSymbols), DecimalFormatter>;

fn cached_formatter(
    cache: &FormatterCache,
    ctx: &dyn ConverterContext,
) -> Arc<((LocaleTag, DecimalSymbols), DecimalFormatter)> {
    let key = (ctx.locale().clone(), ctx.decimal_symbols().clone());
    cache.get_or_build(key, |key| DecimalFormatter::new(key.1.clone()))
}

#[derive(Debug)]
struct TextToNumber {
    cache: FormatterCache,
}

impl GuardedConverter for TextToNumber {
    fn guarded_label(&self) -> &'static str {
        "text to number"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Text(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target.is_numeric()
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Text(t) => {
                let entry = cached_formatter(&self.cache, ctx);
                let parsed = entry
                    .1
                    .parse(t.as_str())
                    .map_err(|cause| ConvertError::with_cause(value, target, cause))?;
                to_requested_kind(Number::Decimal(parsed), value, target)
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct NumberToText {
    cache: FormatterCache,
}

impl GuardedConverter for NumberToText {
    fn guarded_label(&self) -> &'static str {
        "number to text"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Number(_))
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
            Value::Number(n) => {
                let entry = cached_formatter(&self.cache, ctx);
                Ok(Value::text(entry.1.format(*n)))
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

static TEXT_TO_NUMBER: Lazy<Arc<dyn Converter>> =
    Lazy::new(|| Arc::new(TextToNumber { cache: ReplaceCache::new() }));
static NUMBER_TO_TEXT: Lazy<Arc<dyn Converter>> =
    Lazy::new(|| Arc::new(NumberToText { cache: ReplaceCache::new() }));

/// The shared numeric-text parser.
pub fn text_to_number() -> Arc<dyn Converter> {
    Arc::clone(&TEXT_TO_NUMBER)
}

/// The shared numeric-text formatter.
pub fn number_to_text() -> Arc<dyn Converter> {
    Arc::clone(&NUMBER_TO_TEXT)
}
