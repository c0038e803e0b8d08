//! Conversion environment.
//!
//! Converters are stateless; everything environment-dependent comes from a
//! [`ConverterContext`]: the locale, the serial-number epoch, separator and
//! sign characters, temporal patterns, and the recursive entry point through
//! which composite converters (lists, chains) convert their parts.

use std::fmt;
use std::sync::Arc;

use tabula_value::{LocaleTag, Value, ValueKind};

use crate::converter::Converter;
use crate::defaults;
use crate::error::ConvertResult;

/// Serial day 0 is 1970-01-01.
pub const UNIX_EPOCH_OFFSET: i64 = 0;

/// Serial day 0 is 1899-12-30, the 1900 date system of spreadsheet files.
pub const EXCEL_1900_EPOCH_OFFSET: i64 = -25_569;

/// Serial day 0 is 1904-01-01, the 1904 date system of spreadsheet files.
pub const EXCEL_1904_EPOCH_OFFSET: i64 = -24_107;

/// Characters used when parsing and formatting decimal numerals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalSymbols {
    /// Separator between the integral and fractional parts.
    pub decimal_separator: char,
    /// Grouping separator accepted on input and inserted every three integral
    /// digits on output. `None` disables grouping entirely.
    pub group_separator: Option<char>,
    /// Sign accepted and never printed for positive numbers.
    pub positive_sign: char,
    /// Sign accepted and printed for negative numbers.
    pub negative_sign: char,
    /// Significant digits kept when formatting.
    pub precision: u32,
}

impl Default for DecimalSymbols {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: None,
            positive_sign: '+',
            negative_sign: '-',
            precision: 28,
        }
    }
}

/// strftime patterns for the three temporal kinds.
///
/// The patterns must only use specifiers valid for the kind they format; a
/// date pattern asking for hours is a configuration error and panics inside
/// chrono when first used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemporalPatterns {
    /// Pattern for [`ValueKind::Date`].
    pub date: String,
    /// Pattern for [`ValueKind::Time`].
    pub time: String,
    /// Pattern for [`ValueKind::DateTime`].
    pub date_time: String,
}

impl Default for TemporalPatterns {
    fn default() -> Self {
        Self {
            date: "%Y-%m-%d".to_owned(),
            time: "%H:%M:%S%.f".to_owned(),
            date_time: "%Y-%m-%d %H:%M:%S%.f".to_owned(),
        }
    }
}

/// The environment a conversion runs in.
pub trait ConverterContext: fmt::Debug {
    /// Locale for format converters.
    fn locale(&self) -> &LocaleTag;

    /// Day offset between serial 0 and the Unix epoch. See
    /// [`UNIX_EPOCH_OFFSET`], [`EXCEL_1900_EPOCH_OFFSET`] and
    /// [`EXCEL_1904_EPOCH_OFFSET`].
    fn date_offset(&self) -> i64;

    /// Symbols for numeric text.
    fn decimal_symbols(&self) -> &DecimalSymbols;

    /// Patterns for temporal text.
    fn temporal_patterns(&self) -> &TemporalPatterns;

    /// Whether temporal formatters render and parse two-digit years.
    fn two_digit_years(&self) -> bool;

    /// Separator between elements of a list literal.
    fn value_separator(&self) -> char;

    /// Probes the context's converter. Composite converters recurse through
    /// here so element conversions see the full catalog.
    fn can_convert(&self, value: &Value, target: ValueKind) -> bool;

    /// Converts through the context's converter.
    fn convert(&self, value: &Value, target: ValueKind) -> ConvertResult;
}

/// Stock [`ConverterContext`] over a converter and plain fields.
#[derive(Debug, Clone)]
pub struct BasicContext {
    converter: Arc<dyn Converter>,
    locale: LocaleTag,
    date_offset: i64,
    decimal_symbols: DecimalSymbols,
    temporal_patterns: TemporalPatterns,
    two_digit_years: bool,
    value_separator: char,
}

impl BasicContext {
    /// Context around `converter` with neutral defaults: the undetermined
    /// locale, Unix epoch serials, ISO temporal patterns, `.` decimals and
    /// `,` as the list separator.
    #[must_use]
    pub fn new(converter: Arc<dyn Converter>) -> Self {
        Self {
            converter,
            locale: LocaleTag::und(),
            date_offset: UNIX_EPOCH_OFFSET,
            decimal_symbols: DecimalSymbols::default(),
            temporal_patterns: TemporalPatterns::default(),
            two_digit_years: false,
            value_separator: ',',
        }
    }

    /// Replaces the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: LocaleTag) -> Self {
        self.locale = locale;
        self
    }

    /// Replaces the serial-number day offset.
    #[must_use]
    pub fn with_date_offset(mut self, offset: i64) -> Self {
        self.date_offset = offset;
        self
    }

    /// Replaces the decimal symbols.
    #[must_use]
    pub fn with_decimal_symbols(mut self, symbols: DecimalSymbols) -> Self {
        self.decimal_symbols = symbols;
        self
    }

    /// Replaces the temporal patterns.
    #[must_use]
    pub fn with_temporal_patterns(mut self, patterns: TemporalPatterns) -> Self {
        self.temporal_patterns = patterns;
        self
    }

    /// Enables or disables two-digit years.
    #[must_use]
    pub fn with_two_digit_years(mut self, enabled: bool) -> Self {
        self.two_digit_years = enabled;
        self
    }

    /// Replaces the list separator.
    #[must_use]
    pub fn with_value_separator(mut self, separator: char) -> Self {
        self.value_separator = separator;
        self
    }
}

impl Default for BasicContext {
    /// Context over the standard catalog.
    fn default() -> Self {
        Self::new(defaults::standard())
    }
}

impl ConverterContext for BasicContext {
    fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    fn date_offset(&self) -> i64 {
        self.date_offset
    }

    fn decimal_symbols(&self) -> &DecimalSymbols {
        &self.decimal_symbols
    }

    fn temporal_patterns(&self) -> &TemporalPatterns {
        &self.temporal_patterns
    }

    fn two_digit_years(&self) -> bool {
        self.two_digit_years
    }

    fn value_separator(&self) -> char {
        self.value_separator
    }

    fn can_convert(&self, value: &Value, target: ValueKind) -> bool {
        self.converter.can_convert(value, target, self)
    }

    fn convert(&self, value: &Value, target: ValueKind) -> ConvertResult {
        self.converter.convert(value, target, self)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use tabula_value::NaiveDate;

    use super::*;

    #[test]
    fn builder_replaces_each_parameter() {
        let symbols = DecimalSymbols { decimal_separator: ',', ..DecimalSymbols::default() };
        let ctx = BasicContext::default()
            .with_locale(LocaleTag::new("de-DE").unwrap())
            .with_date_offset(EXCEL_1900_EPOCH_OFFSET)
            .with_decimal_symbols(symbols.clone())
            .with_two_digit_years(true)
            .with_value_separator(';');

        assert_eq!(ctx.locale().as_str(), "de-DE");
        assert_eq!(ctx.date_offset(), EXCEL_1900_EPOCH_OFFSET);
        assert_eq!(ctx.decimal_symbols(), &symbols);
        assert!(ctx.two_digit_years());
        assert_eq!(ctx.value_separator(), ';');
    }

    #[test]
    fn defaults_are_unix_iso_und() {
        let ctx = BasicContext::default();
        assert_eq!(ctx.locale(), &LocaleTag::und());
        assert_eq!(ctx.date_offset(), UNIX_EPOCH_OFFSET);
        assert_eq!(ctx.value_separator(), ',');
        assert!(!ctx.two_digit_years());
        assert_eq!(ctx.temporal_patterns().date, "%Y-%m-%d");
    }

    #[test]
    fn context_delegates_to_its_converter() {
        let ctx = BasicContext::default();
        assert!(ctx.can_convert(&Value::text("5"), ValueKind::I64));
        assert_eq!(ctx.convert(&Value::text("5"), ValueKind::I64), Ok(Value::i64(5)));
    }

    #[test]
    fn epoch_offsets_name_the_documented_serial_zero_dates() {
        let unix = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let excel_1900 = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
        let excel_1904 = NaiveDate::from_ymd_opt(1904, 1, 1).unwrap();

        let days_from_unix =
            |date: NaiveDate| i64::from(date.num_days_from_ce() - unix.num_days_from_ce());
        assert_eq!(days_from_unix(excel_1900), EXCEL_1900_EPOCH_OFFSET);
        assert_eq!(days_from_unix(excel_1904), EXCEL_1904_EPOCH_OFFSET);
    }
}
