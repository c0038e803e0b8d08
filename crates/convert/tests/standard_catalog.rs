//! End-to-end tests for the standard catalog behind a [`BasicContext`].
//!
//! Everything here goes through the public API the way embedding code would:
//! a context built over [`standard`], plus direct converter calls where a
//! failure cause is part of the contract. The alternation reports a plain
//! message once every candidate is exhausted, so cause texts are asserted on
//! the individual converters that produce them.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tabula_convert::{
    alternation, chain, date_time_to_number, list_of, mapping, number_to_boolean,
    number_to_number, number_to_time, relabel, standard, text_to_list, text_to_number,
    BasicContext, ConvertError, Converter, ConverterContext, DecimalSymbols, TemporalPatterns,
    EXCEL_1900_EPOCH_OFFSET, EXCEL_1904_EPOCH_OFFSET,
};
use tabula_value::{Decimal, LocaleTag, NaiveDate, NaiveDateTime, NaiveTime, Value, ValueKind};

fn catalog() -> BasicContext {
    BasicContext::default()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    date(y, mo, d).and_hms_opt(h, mi, s).unwrap()
}

#[test]
fn matching_kinds_pass_through_untouched() {
    let ctx = catalog();

    assert_eq!(ctx.convert(&Value::text("as is"), ValueKind::Text), Ok(Value::text("as is")));
    assert_eq!(
        ctx.convert(&Value::date(date(2024, 1, 15)), ValueKind::Date),
        Ok(Value::date(date(2024, 1, 15)))
    );
    // Any concrete numeric kind already satisfies the family target.
    assert_eq!(ctx.convert(&Value::i64(7), ValueKind::Number), Ok(Value::i64(7)));
    assert_eq!(ctx.convert(&Value::Null, ValueKind::Null), Ok(Value::Null));
}

#[test]
fn numbers_change_kind_only_when_the_value_fits() {
    let ctx = catalog();

    assert_eq!(ctx.convert(&Value::u8(255), ValueKind::I16), Ok(Value::i16(255)));
    assert_eq!(ctx.convert(&Value::i64(42), ValueKind::Decimal), Ok(Value::decimal(42.into())));
    assert_eq!(ctx.convert(&Value::f64(3.0), ValueKind::I64), Ok(Value::i64(3)));
    assert!(ctx.convert(&Value::i64(300), ValueKind::U8).is_err());
    assert!(ctx.convert(&Value::f64(3.5), ValueKind::I64).is_err());

    // The converter itself names the reason.
    assert_eq!(
        number_to_number()
            .convert(&Value::i64(300), ValueKind::U8, &ctx)
            .unwrap_err()
            .to_string(),
        "Failed to convert 300 (i64) to u8, 300 is out of range for u8"
    );
    assert_eq!(
        number_to_number()
            .convert(&Value::f64(3.5), ValueKind::I64, &ctx)
            .unwrap_err()
            .to_string(),
        "Failed to convert 3.5 (f64) to i64, 3.5 cannot be exactly represented as i64"
    );
}

#[test]
fn booleans_and_numbers_convert_both_ways() {
    let ctx = catalog();

    assert_eq!(ctx.convert(&Value::boolean(true), ValueKind::I64), Ok(Value::i64(1)));
    assert_eq!(
        ctx.convert(&Value::boolean(false), ValueKind::Decimal),
        Ok(Value::decimal(Decimal::ZERO))
    );
    assert_eq!(ctx.convert(&Value::boolean(true), ValueKind::F64), Ok(Value::f64(1.0)));

    assert_eq!(ctx.convert(&Value::i64(0), ValueKind::Boolean), Ok(Value::boolean(false)));
    assert_eq!(ctx.convert(&Value::f64(-0.0), ValueKind::Boolean), Ok(Value::boolean(false)));
    assert_eq!(ctx.convert(&Value::i64(12), ValueKind::Boolean), Ok(Value::boolean(true)));
    assert_eq!(ctx.convert(&Value::f64(0.5), ValueKind::Boolean), Ok(Value::boolean(true)));
    assert_eq!(ctx.convert(&Value::f64(f64::NAN), ValueKind::Boolean), Ok(Value::boolean(true)));
    assert_eq!(
        ctx.convert(&Value::f64(f64::INFINITY), ValueKind::Boolean),
        Ok(Value::boolean(true))
    );
}

#[test]
fn text_parses_into_every_scalar_kind() {
    let ctx = catalog();

    assert_eq!(ctx.convert(&Value::text("5"), ValueKind::I64), Ok(Value::i64(5)));
    assert_eq!(ctx.convert(&Value::text(" 2.5 "), ValueKind::F64), Ok(Value::f64(2.5)));
    assert_eq!(ctx.convert(&Value::text("TRUE"), ValueKind::Boolean), Ok(Value::boolean(true)));
    assert_eq!(ctx.convert(&Value::text("x"), ValueKind::Char), Ok(Value::character('x')));
    assert_eq!(
        ctx.convert(&Value::text("EN-us"), ValueKind::Locale),
        Ok(Value::locale(LocaleTag::new("en-US").unwrap()))
    );
    assert_eq!(
        ctx.convert(&Value::text("2024-01-15"), ValueKind::Date),
        Ok(Value::date(date(2024, 1, 15)))
    );
    assert_eq!(
        ctx.convert(&Value::text("12:30:45"), ValueKind::Time),
        Ok(Value::time(hms(12, 30, 45)))
    );
    assert_eq!(
        ctx.convert(&Value::text("2024-01-15 12:30:45"), ValueKind::DateTime),
        Ok(Value::date_time(dt(2024, 1, 15, 12, 30, 45)))
    );
    // A char holding a digit parses like one-character text.
    assert_eq!(ctx.convert(&Value::character('7'), ValueKind::I64), Ok(Value::i64(7)));
}

#[test]
fn scalars_render_back_to_text() {
    let ctx = catalog();

    assert_eq!(ctx.convert(&Value::i64(5), ValueKind::Text), Ok(Value::text("5")));
    assert_eq!(
        ctx.convert(&Value::decimal(Decimal::new(125, 2)), ValueKind::Text),
        Ok(Value::text("1.25"))
    );
    assert_eq!(ctx.convert(&Value::boolean(true), ValueKind::Text), Ok(Value::text("true")));
    assert_eq!(ctx.convert(&Value::character('x'), ValueKind::Text), Ok(Value::text("x")));
    assert_eq!(
        ctx.convert(&Value::locale(LocaleTag::new("en-US").unwrap()), ValueKind::Text),
        Ok(Value::text("en-US"))
    );
    assert_eq!(
        ctx.convert(&Value::date(date(2024, 1, 15)), ValueKind::Text),
        Ok(Value::text("2024-01-15"))
    );
    assert_eq!(
        ctx.convert(&Value::time(hms(12, 30, 45)), ValueKind::Text),
        Ok(Value::text("12:30:45"))
    );
    assert_eq!(
        ctx.convert(
            &Value::time(NaiveTime::from_hms_milli_opt(12, 30, 45, 500).unwrap()),
            ValueKind::Text
        ),
        Ok(Value::text("12:30:45.500"))
    );
    assert_eq!(
        ctx.convert(&Value::date_time(dt(2024, 1, 15, 12, 30, 45)), ValueKind::Text),
        Ok(Value::text("2024-01-15 12:30:45"))
    );
}

#[test]
fn date_serials_follow_the_context_epoch() {
    let unix = catalog();
    assert_eq!(unix.convert(&Value::date(date(1970, 1, 1)), ValueKind::I64), Ok(Value::i64(0)));
    assert_eq!(
        unix.convert(&Value::date(date(2024, 1, 1)), ValueKind::I64),
        Ok(Value::i64(19_723))
    );
    assert_eq!(
        unix.convert(&Value::i64(19_723), ValueKind::Date),
        Ok(Value::date(date(2024, 1, 1)))
    );

    let excel = catalog().with_date_offset(EXCEL_1900_EPOCH_OFFSET);
    assert_eq!(
        excel.convert(&Value::date(date(2024, 1, 1)), ValueKind::I64),
        Ok(Value::i64(45_292))
    );
    assert_eq!(
        excel.convert(&Value::i64(0), ValueKind::Date),
        Ok(Value::date(date(1899, 12, 30)))
    );

    let mac = catalog().with_date_offset(EXCEL_1904_EPOCH_OFFSET);
    assert_eq!(mac.convert(&Value::i64(0), ValueKind::Date), Ok(Value::date(date(1904, 1, 1))));
    assert_eq!(mac.convert(&Value::date(date(1904, 1, 2)), ValueKind::I64), Ok(Value::i64(1)));
}

#[test]
fn times_enter_as_day_fractions_and_leave_as_seconds() {
    let ctx = catalog();

    assert_eq!(ctx.convert(&Value::f64(0.5), ValueKind::Time), Ok(Value::time(hms(12, 0, 0))));
    assert_eq!(
        ctx.convert(&Value::decimal(Decimal::new(25, 2)), ValueKind::Time),
        Ok(Value::time(hms(6, 0, 0)))
    );

    // Going back out produces seconds of day, not the fraction that came in.
    let seconds = ctx.convert(&Value::time(hms(12, 0, 0)), ValueKind::Number).unwrap();
    assert_eq!(seconds, Value::decimal(Decimal::from(43_200)));
    assert!(ctx.convert(&seconds, ValueKind::Time).is_err());

    assert_eq!(
        number_to_time().convert(&Value::f64(1.0), ValueKind::Time, &ctx).unwrap_err().to_string(),
        "Failed to convert 1 (f64) to time, time fraction must lie in [0, 1)"
    );
    assert_eq!(
        number_to_time()
            .convert(&Value::f64(-0.01), ValueKind::Time, &ctx)
            .unwrap_err()
            .to_string(),
        "Failed to convert -0.01 (f64) to time, time fraction must lie in [0, 1)"
    );
}

#[test]
fn datetimes_round_trip_through_fractional_serials() {
    let ctx = catalog();

    assert_eq!(
        ctx.convert(&Value::decimal(Decimal::new(125, 2)), ValueKind::DateTime),
        Ok(Value::date_time(dt(1970, 1, 2, 6, 0, 0)))
    );
    assert_eq!(
        ctx.convert(&Value::date_time(dt(1970, 1, 2, 6, 0, 0)), ValueKind::Number),
        Ok(Value::decimal(Decimal::new(125, 2)))
    );

    // Negative serials reach back before the epoch.
    assert_eq!(
        ctx.convert(&Value::decimal(Decimal::new(-25, 2)), ValueKind::DateTime),
        Ok(Value::date_time(dt(1969, 12, 31, 18, 0, 0)))
    );
    assert_eq!(
        ctx.convert(&Value::date_time(dt(1969, 12, 31, 18, 0, 0)), ValueKind::Number),
        Ok(Value::decimal(Decimal::new(-25, 2)))
    );

    // Midnight stays an integer, no fraction appended.
    assert_eq!(
        ctx.convert(&Value::date_time(dt(1970, 1, 2, 0, 0, 0)), ValueKind::Number),
        Ok(Value::decimal(Decimal::from(1)))
    );
}

#[test]
fn subsecond_datetimes_need_an_exact_day_fraction() {
    let ctx = catalog();

    // 864 ms is exactly one hundred-thousandth of a day.
    let exact = date(1970, 1, 1).and_hms_milli_opt(0, 0, 0, 864).unwrap();
    assert_eq!(
        date_time_to_number().convert(&Value::date_time(exact), ValueKind::Number, &ctx),
        Ok(Value::decimal(Decimal::new(1, 5)))
    );

    // Half a second is 1/172800 of a day, which never terminates.
    let half = date(1970, 1, 1).and_hms_milli_opt(0, 0, 0, 500).unwrap();
    assert!(date_time_to_number()
        .convert(&Value::date_time(half), ValueKind::Number, &ctx)
        .is_err());

    let nano = date(1970, 1, 1).and_hms_nano_opt(0, 0, 0, 1).unwrap();
    assert_eq!(
        date_time_to_number()
            .convert(&Value::date_time(nano), ValueKind::Number, &ctx)
            .unwrap_err()
            .to_string(),
        "Failed to convert 1970-01-01 00:00:00.000000001 (datetime) to number, \
         time of day has no exact day-fraction representation"
    );
}

#[test]
fn datetime_projections_split_date_and_time() {
    let ctx = catalog();
    let stamp = Value::date_time(dt(2024, 1, 15, 12, 30, 45));

    assert_eq!(ctx.convert(&stamp, ValueKind::Date), Ok(Value::date(date(2024, 1, 15))));
    assert_eq!(ctx.convert(&stamp, ValueKind::Time), Ok(Value::time(hms(12, 30, 45))));
    assert_eq!(
        ctx.convert(&Value::date(date(2024, 1, 15)), ValueKind::DateTime),
        Ok(Value::date_time(dt(2024, 1, 15, 0, 0, 0)))
    );

    // A bare time lands on the context's serial day zero.
    assert_eq!(
        ctx.convert(&Value::time(hms(9, 30, 0)), ValueKind::DateTime),
        Ok(Value::date_time(dt(1970, 1, 1, 9, 30, 0)))
    );
    let mac = catalog().with_date_offset(EXCEL_1904_EPOCH_OFFSET);
    assert_eq!(
        mac.convert(&Value::time(hms(9, 30, 0)), ValueKind::DateTime),
        Ok(Value::date_time(dt(1904, 1, 1, 9, 30, 0)))
    );
}

#[test]
fn chains_pass_values_through_an_intermediate_kind() {
    let ctx = catalog();
    let parse_then_test = chain(text_to_number(), ValueKind::I64, number_to_boolean());

    assert_eq!(parse_then_test.label(), "text to number -> i64 -> number to boolean");
    assert_eq!(
        parse_then_test.convert(&Value::text("0"), ValueKind::Boolean, &ctx),
        Ok(Value::boolean(false))
    );
    assert_eq!(
        parse_then_test.convert(&Value::text("7"), ValueKind::Boolean, &ctx),
        Ok(Value::boolean(true))
    );

    // The probe only consults the first stage, so claims are cheap.
    assert!(parse_then_test.can_convert(&Value::text("anything"), ValueKind::Boolean, &ctx));

    // A first-stage failure keeps its own message, naming the intermediate.
    assert_eq!(
        parse_then_test
            .convert(&Value::text("abc"), ValueKind::Boolean, &ctx)
            .unwrap_err()
            .to_string(),
        "Failed to convert \"abc\" (text) to i64, invalid number literal \"abc\""
    );
}

#[test]
fn alternation_retries_the_next_claimant_after_a_failure() {
    let ctx = catalog();
    let word = mapping(
        "the word zero",
        |value| matches!(value, Value::Text(_)),
        |target| target == ValueKind::I64,
        |value, target, _ctx| match value {
            Value::Text(t) if t.as_str() == "zero" => Ok(Value::i64(0)),
            other => Err(ConvertError::with_cause(other, target, "only the word \"zero\"")),
        },
    );
    let either = alternation(vec![word, text_to_number()]);
    assert_eq!(either.label(), "the word zero | text to number");

    assert_eq!(either.convert(&Value::text("zero"), ValueKind::I64, &ctx), Ok(Value::i64(0)));
    // The first candidate claims "7" and fails; the parser picks it up.
    assert_eq!(either.convert(&Value::text("7"), ValueKind::I64, &ctx), Ok(Value::i64(7)));

    // Exhaustion reports plainly, without any candidate's cause.
    assert_eq!(
        either.convert(&Value::text("x"), ValueKind::I64, &ctx).unwrap_err().to_string(),
        "Failed to convert \"x\" (text) to i64"
    );
}

#[test]
fn relabel_reuses_matching_labels_and_never_stacks() {
    let parser = text_to_number();
    let same = relabel(Arc::clone(&parser), "text to number");
    assert!(Arc::ptr_eq(&parser, &same));

    let once = relabel(parser, "number literal");
    assert_eq!(once.label(), "number literal");
    let twice = relabel(once, "lenient number literal");
    assert_eq!(twice.label(), "lenient number literal");

    let ctx = catalog();
    assert_eq!(twice.convert(&Value::text("5"), ValueKind::I64, &ctx), Ok(Value::i64(5)));
}

#[test]
fn list_literals_parse_and_render_with_quoting() {
    let ctx = catalog();

    assert_eq!(
        ctx.convert(&Value::text("a,b,c"), ValueKind::List),
        Ok(Value::list(vec![Value::text("a"), Value::text("b"), Value::text("c")]))
    );
    assert_eq!(
        ctx.convert(&Value::text("\"say \"\"hi\"\"\",x"), ValueKind::List),
        Ok(Value::list(vec![Value::text("say \"hi\""), Value::text("x")]))
    );

    // Rendering converts each element to text through the context.
    assert_eq!(
        ctx.convert(
            &Value::list(vec![Value::i64(1), Value::boolean(true), Value::Null]),
            ValueKind::Text
        ),
        Ok(Value::text("1,true,null"))
    );
    assert_eq!(
        ctx.convert(&Value::list(vec![Value::text("a,b"), Value::text("c")]), ValueKind::Text),
        Ok(Value::text("\"a,b\",c"))
    );

    let semicolons = catalog().with_value_separator(';');
    assert_eq!(
        semicolons.convert(&Value::text("a;b"), ValueKind::List),
        Ok(Value::list(vec![Value::text("a"), Value::text("b")]))
    );

    assert!(ctx.convert(&Value::text("a,"), ValueKind::List).is_err());
    assert_eq!(
        text_to_list().convert(&Value::text("a,"), ValueKind::List, &ctx).unwrap_err().to_string(),
        "Failed to convert \"a,\" (text) to list, missing element after separator"
    );
}

#[test]
fn list_elements_convert_through_the_context() {
    let ctx = catalog();
    let integers = list_of(ValueKind::I64);

    assert_eq!(
        integers.convert(
            &Value::list(vec![Value::text("1"), Value::text("2")]),
            ValueKind::List,
            &ctx
        ),
        Ok(Value::list(vec![Value::i64(1), Value::i64(2)]))
    );
    assert_eq!(integers.convert(&Value::Null, ValueKind::List, &ctx), Ok(Value::Null));

    // An element failure names the list and carries the element's message.
    assert_eq!(
        integers
            .convert(&Value::list(vec![Value::i64(1), Value::text("x")]), ValueKind::List, &ctx)
            .unwrap_err()
            .to_string(),
        "Failed to convert [1, x] (list) to list, Failed to convert \"x\" (text) to i64"
    );
}

#[test]
fn decimal_symbols_localize_number_text() {
    let german = catalog().with_decimal_symbols(DecimalSymbols {
        decimal_separator: ',',
        group_separator: Some('.'),
        ..DecimalSymbols::default()
    });

    assert_eq!(
        german.convert(&Value::text("1.234,5"), ValueKind::Decimal),
        Ok(Value::decimal(Decimal::new(12_345, 1)))
    );
    assert_eq!(
        german.convert(&Value::decimal(Decimal::new(12_345, 1)), ValueKind::Text),
        Ok(Value::text("1.234,5"))
    );
    assert_eq!(
        german.convert(&Value::i64(-1_000_000), ValueKind::Text),
        Ok(Value::text("-1.000.000"))
    );
}

#[test]
fn temporal_patterns_and_two_digit_years_follow_the_context() {
    let dotted = catalog().with_temporal_patterns(TemporalPatterns {
        date: "%d.%m.%Y".to_owned(),
        ..TemporalPatterns::default()
    });
    assert_eq!(
        dotted.convert(&Value::text("15.01.2024"), ValueKind::Date),
        Ok(Value::date(date(2024, 1, 15)))
    );
    assert_eq!(
        dotted.convert(&Value::date(date(2024, 1, 15)), ValueKind::Text),
        Ok(Value::text("15.01.2024"))
    );

    let short = catalog().with_two_digit_years(true);
    assert_eq!(
        short.convert(&Value::text("24-01-15"), ValueKind::Date),
        Ok(Value::date(date(2024, 1, 15)))
    );
    assert_eq!(
        short.convert(&Value::date(date(2024, 1, 15)), ValueKind::Text),
        Ok(Value::text("24-01-15"))
    );
}

#[test]
fn null_policy_depends_on_the_target_kind() {
    let ctx = catalog();

    // Only text output substitutes a rendering; every other kind passes null.
    assert_eq!(ctx.convert(&Value::Null, ValueKind::Text), Ok(Value::text("null")));
    for target in [
        ValueKind::Boolean,
        ValueKind::Number,
        ValueKind::I64,
        ValueKind::U8,
        ValueKind::Char,
        ValueKind::Locale,
        ValueKind::Date,
        ValueKind::Time,
        ValueKind::DateTime,
        ValueKind::List,
    ] {
        assert_eq!(ctx.convert(&Value::Null, target), Ok(Value::Null), "target {target}");
    }
}

#[test]
fn failures_quote_the_value_and_name_both_kinds() {
    let ctx = catalog();

    assert_eq!(
        ctx.convert(&Value::text("ab"), ValueKind::Char).unwrap_err().to_string(),
        "Failed to convert \"ab\" (text) to char"
    );
    assert_eq!(
        ctx.convert(&Value::character('q'), ValueKind::I64).unwrap_err().to_string(),
        "Failed to convert 'q' (char) to i64"
    );
    assert_eq!(
        ctx.convert(&Value::boolean(true), ValueKind::Date).unwrap_err().to_string(),
        "Failed to convert true (boolean) to date"
    );

    // Direct converter calls keep their cause.
    let input = Value::text("abc");
    assert_eq!(
        text_to_number().convert(&input, ValueKind::I64, &ctx).unwrap_err(),
        ConvertError::with_cause(&input, ValueKind::I64, "invalid number literal \"abc\"")
    );
}

#[test]
#[should_panic(expected = "Failed to convert true (boolean) to date")]
fn convert_or_fail_panics_with_the_failure_message() {
    let ctx = catalog();
    standard().convert_or_fail(&Value::boolean(true), ValueKind::Date, &ctx);
}
