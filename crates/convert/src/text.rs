//! Text leaves: the universal fallback plus char, boolean and locale bridges.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tabula_value::{LocaleTag, Value, ValueKind};

use crate::context::ConverterContext;
use crate::converter::{mapping, Converter, GuardedConverter};
use crate::error::{ConvertError, ConvertResult};

/// Renders any value as its display text.
///
/// The catch-all tail of the standard catalog; format-aware converters get
/// their chance first, this one never refuses. Null becomes the text
/// `"null"`.
#[derive(Debug)]
struct ToText;

impl GuardedConverter for ToText {
    fn guarded_label(&self) -> &'static str {
        "to text"
    }

    fn accepts_value(&self, _value: &Value) -> bool {
        true
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
        _target: ValueKind,
        _ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        Ok(Value::text(value.to_string()))
    }
}

static TO_TEXT: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(ToText));

static CHAR_TO_TEXT: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    mapping(
        "char to text",
        |value| matches!(value, Value::Char(_)),
        |target| target == ValueKind::Text,
        |value, target, _ctx| match value {
            Value::Char(c) => Ok(Value::text(*c)),
            other => Err(ConvertError::new(other, target)),
        },
    )
});

static TEXT_TO_CHAR: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    mapping(
        "text to char",
        |value| matches!(value, Value::Text(_)),
        |target| target == ValueKind::Char,
        |value, target, _ctx| match value {
            Value::Text(t) => {
                let mut chars = t.as_str().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err(ConvertError::with_cause(
                        value,
                        target,
                        format!("expected exactly 1 character but got {}", t.char_count()),
                    )),
                }
            }
            other => Err(ConvertError::new(other, target)),
        },
    )
});

static TEXT_TO_BOOLEAN: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    mapping(
        "text to boolean",
        |value| matches!(value, Value::Text(_)),
        |target| target == ValueKind::Boolean,
        |value, target, _ctx| match value {
            Value::Text(t) if t.as_str().eq_ignore_ascii_case("true") => Ok(Value::boolean(true)),
            Value::Text(t) if t.as_str().eq_ignore_ascii_case("false") => {
                Ok(Value::boolean(false))
            }
            other => Err(ConvertError::with_cause(
                other,
                target,
                "expected \"true\" or \"false\"",
            )),
        },
    )
});

/// Parses locale tags. A guarded struct rather than a mapping leaf so null
/// has a path to the locale kind, as it does to every other parsed kind.
#[derive(Debug)]
struct TextToLocale;

impl GuardedConverter for TextToLocale {
    fn guarded_label(&self) -> &'static str {
        "text to locale"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Text(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target == ValueKind::Locale
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        _ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Text(t) => LocaleTag::new(t.as_str())
                .map(Value::locale)
                .map_err(|cause| ConvertError::with_cause(value, target, cause)),
            other => Err(ConvertError::new(other, target)),
        }
    }
}

static TEXT_TO_LOCALE: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(TextToLocale));

static LOCALE_TO_TEXT: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    mapping(
        "locale to text",
        |value| matches!(value, Value::Locale(_)),
        |target| target == ValueKind::Text,
        |value, target, _ctx| match value {
            Value::Locale(tag) => Ok(Value::text(tag.as_str())),
            other => Err(ConvertError::new(other, target)),
        },
    )
});

/// The shared display-based text fallback.
pub fn to_text() -> Arc<dyn Converter> {
    Arc::clone(&TO_TEXT)
}

/// The shared char-to-text converter.
pub fn char_to_text() -> Arc<dyn Converter> {
    Arc::clone(&CHAR_TO_TEXT)
}

/// The shared text-to-char converter; only one-character text converts.
pub fn text_to_char() -> Arc<dyn Converter> {
    Arc::clone(&TEXT_TO_CHAR)
}

/// The shared literal `true`/`false` parser.
pub fn text_to_boolean() -> Arc<dyn Converter> {
    Arc::clone(&TEXT_TO_BOOLEAN)
}

/// The shared locale tag parser.
pub fn text_to_locale() -> Arc<dyn Converter> {
    Arc::clone(&TEXT_TO_LOCALE)
}

/// The shared locale-to-text converter.
pub fn locale_to_text() -> Arc<dyn Converter> {
    Arc::clone(&LOCALE_TO_TEXT)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tabula_value::{Decimal, NaiveDate};

    use super::*;
    use crate::test_support::leaf_context;

    #[rstest]
    #[case(Value::boolean(true), "true")]
    #[case(Value::i64(42), "42")]
    #[case(Value::decimal(Decimal::new(125, 2)), "1.25")]
    #[case(Value::f64(f64::NAN), "NaN")]
    #[case(Value::character('x'), "x")]
    #[case(Value::date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()), "2024-03-09")]
    fn to_text_renders_display(#[case] value: Value, #[case] expected: &str) {
        let ctx = leaf_context();
        assert_eq!(to_text().convert(&value, ValueKind::Text, &ctx), Ok(Value::text(expected)));
    }

    #[test]
    fn to_text_maps_null_to_the_null_literal() {
        let ctx = leaf_context();
        assert_eq!(
            to_text().convert(&Value::Null, ValueKind::Text, &ctx),
            Ok(Value::text("null"))
        );
    }

    #[test]
    fn chars_and_one_character_text_round_trip() {
        let ctx = leaf_context();
        assert_eq!(
            char_to_text().convert(&Value::character('日'), ValueKind::Text, &ctx),
            Ok(Value::text("日"))
        );
        assert_eq!(
            text_to_char().convert(&Value::text("日"), ValueKind::Char, &ctx),
            Ok(Value::character('日'))
        );
    }

    #[test]
    fn longer_text_refuses_to_become_a_char() {
        let ctx = leaf_context();
        let err = text_to_char().convert(&Value::text("abc"), ValueKind::Char, &ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to convert \"abc\" (text) to char, expected exactly 1 character but got 3"
        );

        let err = text_to_char().convert(&Value::text(""), ValueKind::Char, &ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to convert \"\" (text) to char, expected exactly 1 character but got 0"
        );
    }

    #[rstest]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("False", false)]
    fn boolean_literals_parse_case_insensitively(#[case] input: &str, #[case] expected: bool) {
        let ctx = leaf_context();
        assert_eq!(
            text_to_boolean().convert(&Value::text(input), ValueKind::Boolean, &ctx),
            Ok(Value::boolean(expected))
        );
    }

    #[test]
    fn non_literals_do_not_parse_as_booleans() {
        let ctx = leaf_context();
        let err = text_to_boolean()
            .convert(&Value::text("yes"), ValueKind::Boolean, &ctx)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to convert \"yes\" (text) to boolean, expected \"true\" or \"false\""
        );
    }

    #[test]
    fn locale_tags_parse_and_normalize() {
        let ctx = leaf_context();
        assert_eq!(
            text_to_locale().convert(&Value::text("EN-us"), ValueKind::Locale, &ctx),
            Ok(Value::locale(LocaleTag::new("en-US").unwrap()))
        );
        assert_eq!(
            locale_to_text()
                .convert(&Value::locale(LocaleTag::new("en-US").unwrap()), ValueKind::Text, &ctx),
            Ok(Value::text("en-US"))
        );

        let err =
            text_to_locale().convert(&Value::text("no!"), ValueKind::Locale, &ctx).unwrap_err();
        assert!(err.to_string().contains("invalid locale tag"), "{err}");

        assert_eq!(
            text_to_locale().convert(&Value::Null, ValueKind::Locale, &ctx),
            Ok(Value::Null)
        );
    }

    #[test]
    fn mapping_leaves_refuse_null_but_to_text_does_not() {
        let ctx = leaf_context();
        assert!(!char_to_text().can_convert(&Value::Null, ValueKind::Text, &ctx));
        assert!(!text_to_boolean().can_convert(&Value::Null, ValueKind::Boolean, &ctx));
        assert!(to_text().can_convert(&Value::Null, ValueKind::Text, &ctx));
    }
}
