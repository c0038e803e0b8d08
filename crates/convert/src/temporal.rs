//! Serial-number conversions for dates and times.
//!
//! Dates travel as whole day counts relative to the context's serial epoch,
//! times as day fractions in `[0, 1)`, date-times as days plus fraction.
//! The one asymmetry is deliberate: a lone time converts to a number as
//! seconds of day (`43200` for noon), not as a day fraction, matching how
//! durations are usually consumed downstream.

use std::sync::Arc;

use chrono::{Datelike, Timelike};
use once_cell::sync::Lazy;
use rust_decimal::prelude::ToPrimitive;
use tabula_value::{Decimal, NaiveDate, NaiveTime, Number, Value, ValueKind};

use crate::context::ConverterContext;
use crate::converter::{mapping, Converter, GuardedConverter};
use crate::error::{ConvertError, ConvertResult};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;

/// CE day number of 1970-01-01; chrono counts days from 0001-01-01 = day 1.
const UNIX_EPOCH_FROM_CE: i64 = 719_163;

/// Days since 1970-01-01.
pub(crate) fn epoch_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_FROM_CE
}

/// The date `days` after 1970-01-01, when chrono can represent it.
pub(crate) fn date_at_epoch_day(days: i64) -> Option<NaiveDate> {
    let ce = days.checked_add(UNIX_EPOCH_FROM_CE)?;
    NaiveDate::from_num_days_from_ce_opt(i32::try_from(ce).ok()?)
}

fn nanos_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + i64::from(time.nanosecond())
}

fn time_from_nanos_of_day(nanos: i64) -> Option<NaiveTime> {
    let seconds = u32::try_from(nanos / NANOS_PER_SECOND).ok()?;
    let remainder = u32::try_from(nanos % NANOS_PER_SECOND).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, remainder)
}

/// Nanoseconds in a float day fraction known to lie in `[0, 1)`.
///
/// The scaled product can round up to a whole day right below the top of the
/// range, so the result is clamped to the last representable nanosecond.
fn float_fraction_nanos(fraction: f64) -> i64 {
    #[allow(clippy::cast_precision_loss)]
    let scaled = (fraction * NANOS_PER_DAY as f64).trunc();
    scaled.to_i64().map_or(NANOS_PER_DAY - 1, |nanos| nanos.min(NANOS_PER_DAY - 1))
}

fn checked_float_fraction_nanos(fraction: f64) -> Option<i64> {
    if fraction.is_nan() || fraction < 0.0 || fraction >= 1.0 {
        return None;
    }
    Some(float_fraction_nanos(fraction))
}

/// Nanoseconds in a decimal day fraction known to lie in `[0, 1)`.
fn decimal_fraction_nanos(fraction: Decimal) -> Option<i64> {
    let scaled = fraction.checked_mul(Decimal::from(NANOS_PER_DAY))?.trunc();
    scaled.to_i64().map(|nanos| nanos.min(NANOS_PER_DAY - 1))
}

/// Day-fraction nanoseconds of a number, `None` outside `[0, 1)`.
fn fraction_nanos(n: Number) -> Option<i64> {
    match n {
        Number::Decimal(d) => {
            if d < Decimal::ZERO || d >= Decimal::ONE {
                return None;
            }
            decimal_fraction_nanos(d)
        }
        Number::I128(v) => (v == 0).then_some(0),
        Number::I64(v) => (v == 0).then_some(0),
        Number::I32(v) => (v == 0).then_some(0),
        Number::I16(v) => (v == 0).then_some(0),
        Number::U8(v) => (v == 0).then_some(0),
        Number::F64(v) => checked_float_fraction_nanos(v),
        Number::F32(v) => checked_float_fraction_nanos(f64::from(v)),
    }
}

/// Whole days under a number, `None` for NaN, infinities and day counts no
/// `i64` can hold.
fn floor_days(n: Number) -> Option<i64> {
    match n {
        Number::Decimal(d) => d.floor().to_i64(),
        Number::I128(v) => i64::try_from(v).ok(),
        Number::I64(v) => Some(v),
        Number::I32(v) => Some(i64::from(v)),
        Number::I16(v) => Some(i64::from(v)),
        Number::U8(v) => Some(i64::from(v)),
        Number::F64(v) => float_floor_days(v),
        Number::F32(v) => float_floor_days(f64::from(v)),
    }
}

fn float_floor_days(v: f64) -> Option<i64> {
    if v.is_finite() { v.floor().to_i64() } else { None }
}

/// Splits a number into whole days and day-fraction nanoseconds.
fn split_days(n: Number) -> Option<(i64, i64)> {
    match n {
        Number::Decimal(d) => {
            let floor = d.floor();
            let days = floor.to_i64()?;
            let nanos = decimal_fraction_nanos(d - floor)?;
            Some((days, nanos))
        }
        Number::F64(v) => float_split_days(v),
        Number::F32(v) => float_split_days(f64::from(v)),
        integral => floor_days(integral).map(|days| (days, 0)),
    }
}

fn float_split_days(v: f64) -> Option<(i64, i64)> {
    if !v.is_finite() {
        return None;
    }
    let floor = v.floor();
    let days = floor.to_i64()?;
    Some((days, float_fraction_nanos(v - floor)))
}

const OUT_OF_RANGE_DAY: &str = "serial day out of range";
const NOT_A_DAY_COUNT: &str = "day count must be a finite in-range number";
const NOT_A_DAY_FRACTION: &str = "time fraction must lie in [0, 1)";
const INEXACT_DAY_FRACTION: &str = "time of day has no exact day-fraction representation";

#[derive(Debug)]
struct DateToNumber;

impl GuardedConverter for DateToNumber {
    fn guarded_label(&self) -> &'static str {
        "date to number"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Date(_))
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
            Value::Date(d) => {
                let serial = epoch_day(*d)
                    .checked_sub(ctx.date_offset())
                    .ok_or_else(|| ConvertError::with_cause(value, target, OUT_OF_RANGE_DAY))?;
                crate::numeric::to_requested_kind(Number::I64(serial), value, target)
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct NumberToDate;

impl GuardedConverter for NumberToDate {
    fn guarded_label(&self) -> &'static str {
        "number to date"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target == ValueKind::Date
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Number(n) => {
                let days = floor_days(*n)
                    .ok_or_else(|| ConvertError::with_cause(value, target, NOT_A_DAY_COUNT))?;
                let date = ctx
                    .date_offset()
                    .checked_add(days)
                    .and_then(date_at_epoch_day)
                    .ok_or_else(|| ConvertError::with_cause(value, target, OUT_OF_RANGE_DAY))?;
                Ok(Value::date(date))
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct TimeToNumber;

impl GuardedConverter for TimeToNumber {
    fn guarded_label(&self) -> &'static str {
        "time to number"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Time(_))
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
            Value::Time(t) => {
                let seconds = Decimal::from(t.num_seconds_from_midnight());
                let nanos = Decimal::new(i64::from(t.nanosecond()), 9);
                crate::numeric::to_requested_kind(Number::Decimal(seconds + nanos), value, target)
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct NumberToTime;

impl GuardedConverter for NumberToTime {
    fn guarded_label(&self) -> &'static str {
        "number to time"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target == ValueKind::Time
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        _ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Number(n) => {
                let time = fraction_nanos(*n)
                    .and_then(time_from_nanos_of_day)
                    .ok_or_else(|| ConvertError::with_cause(value, target, NOT_A_DAY_FRACTION))?;
                Ok(Value::time(time))
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct DateTimeToNumber;

impl GuardedConverter for DateTimeToNumber {
    fn guarded_label(&self) -> &'static str {
        "datetime to number"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::DateTime(_))
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
            Value::DateTime(dt) => {
                let days = epoch_day(dt.date())
                    .checked_sub(ctx.date_offset())
                    .ok_or_else(|| ConvertError::with_cause(value, target, OUT_OF_RANGE_DAY))?;
                let nanos = nanos_of_day(dt.time());
                let mut serial = Decimal::from(days);
                if nanos != 0 {
                    // Day fractions terminate in decimal only for some
                    // nanosecond counts; everything else must fail rather
                    // than round silently.
                    let fraction = Decimal::from(nanos)
                        .checked_div(Decimal::from(NANOS_PER_DAY))
                        .filter(|f| f * Decimal::from(NANOS_PER_DAY) == Decimal::from(nanos))
                        .ok_or_else(|| {
                            ConvertError::with_cause(value, target, INEXACT_DAY_FRACTION)
                        })?;
                    serial += fraction;
                }
                crate::numeric::to_requested_kind(Number::Decimal(serial), value, target)
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

#[derive(Debug)]
struct NumberToDateTime;

impl GuardedConverter for NumberToDateTime {
    fn guarded_label(&self) -> &'static str {
        "number to datetime"
    }

    fn accepts_value(&self, value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }

    fn accepts_target(&self, target: ValueKind) -> bool {
        target == ValueKind::DateTime
    }

    fn transform(
        &self,
        value: &Value,
        target: ValueKind,
        ctx: &dyn ConverterContext,
    ) -> ConvertResult {
        match value {
            Value::Number(n) => {
                let (days, nanos) = split_days(*n)
                    .ok_or_else(|| ConvertError::with_cause(value, target, NOT_A_DAY_COUNT))?;
                let date = ctx
                    .date_offset()
                    .checked_add(days)
                    .and_then(date_at_epoch_day)
                    .ok_or_else(|| ConvertError::with_cause(value, target, OUT_OF_RANGE_DAY))?;
                let time = time_from_nanos_of_day(nanos)
                    .ok_or_else(|| ConvertError::with_cause(value, target, NOT_A_DAY_FRACTION))?;
                Ok(Value::date_time(date.and_time(time)))
            }
            other => Err(ConvertError::new(other, target)),
        }
    }
}

static DATE_TO_NUMBER: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(DateToNumber));
static NUMBER_TO_DATE: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(NumberToDate));
static TIME_TO_NUMBER: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(TimeToNumber));
static NUMBER_TO_TIME: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(NumberToTime));
static DATE_TIME_TO_NUMBER: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(DateTimeToNumber));
static NUMBER_TO_DATE_TIME: Lazy<Arc<dyn Converter>> = Lazy::new(|| Arc::new(NumberToDateTime));

static DATE_TO_DATE_TIME: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    mapping(
        "date to datetime",
        |value| matches!(value, Value::Date(_)),
        |target| target == ValueKind::DateTime,
        |value, target, _ctx| match value {
            Value::Date(d) => Ok(Value::date_time(d.and_time(NaiveTime::MIN))),
            other => Err(ConvertError::new(other, target)),
        },
    )
});

static DATE_TIME_TO_DATE: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    mapping(
        "datetime to date",
        |value| matches!(value, Value::DateTime(_)),
        |target| target == ValueKind::Date,
        |value, target, _ctx| match value {
            Value::DateTime(dt) => Ok(Value::date(dt.date())),
            other => Err(ConvertError::new(other, target)),
        },
    )
});

static DATE_TIME_TO_TIME: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    mapping(
        "datetime to time",
        |value| matches!(value, Value::DateTime(_)),
        |target| target == ValueKind::Time,
        |value, target, _ctx| match value {
            Value::DateTime(dt) => Ok(Value::time(dt.time())),
            other => Err(ConvertError::new(other, target)),
        },
    )
});

static TIME_TO_DATE_TIME: Lazy<Arc<dyn Converter>> = Lazy::new(|| {
    mapping(
        "time to datetime",
        |value| matches!(value, Value::Time(_)),
        |target| target == ValueKind::DateTime,
        |value, target, ctx| match value {
            Value::Time(t) => {
                let anchor = date_at_epoch_day(ctx.date_offset())
                    .ok_or_else(|| ConvertError::with_cause(value, target, OUT_OF_RANGE_DAY))?;
                Ok(Value::date_time(anchor.and_time(*t)))
            }
            other => Err(ConvertError::new(other, target)),
        },
    )
});

/// The shared date-to-serial converter.
pub fn date_to_number() -> Arc<dyn Converter> {
    Arc::clone(&DATE_TO_NUMBER)
}

/// The shared serial-to-date converter.
pub fn number_to_date() -> Arc<dyn Converter> {
    Arc::clone(&NUMBER_TO_DATE)
}

/// The shared time-to-seconds converter.
pub fn time_to_number() -> Arc<dyn Converter> {
    Arc::clone(&TIME_TO_NUMBER)
}

/// The shared day-fraction-to-time converter.
pub fn number_to_time() -> Arc<dyn Converter> {
    Arc::clone(&NUMBER_TO_TIME)
}

/// The shared date-time-to-serial converter.
pub fn date_time_to_number() -> Arc<dyn Converter> {
    Arc::clone(&DATE_TIME_TO_NUMBER)
}

/// The shared serial-to-date-time converter.
pub fn number_to_date_time() -> Arc<dyn Converter> {
    Arc::clone(&NUMBER_TO_DATE_TIME)
}

/// The shared date-to-midnight projection.
pub fn date_to_date_time() -> Arc<dyn Converter> {
    Arc::clone(&DATE_TO_DATE_TIME)
}

/// The shared date part projection.
pub fn date_time_to_date() -> Arc<dyn Converter> {
    Arc::clone(&DATE_TIME_TO_DATE)
}

/// The shared time part projection.
pub fn date_time_to_time() -> Arc<dyn Converter> {
    Arc::clone(&DATE_TIME_TO_TIME)
}

/// The shared time-to-date-time projection, anchored on the context's
/// serial-0 date.
pub fn time_to_date_time() -> Arc<dyn Converter> {
    Arc::clone(&TIME_TO_DATE_TIME)
}
