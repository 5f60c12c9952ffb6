//! Thin adapter over `jiff` for the date arithmetic the display routines
//! need: parsing and formatting with caller-supplied patterns, day and year
//! boundaries, day stepping, and millisecond interval math.
//!
//! Everything here is internal. The display modules speak in terms of these
//! helpers so the quirks of the underlying library stay in one place.

use jiff::{
    civil::{Time, Weekday},
    fmt::strtime,
    tz::TimeZone,
    Span, ToSpan, Zoned,
};

use crate::error::{DateDisplayError, Result};

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Parses `value` with the given `strftime` pattern into a `Zoned` in the
/// system time zone. Missing time fields default to midnight, so date-only
/// patterns parse to the start of the day.
pub(crate) fn parse(value: &str, pattern: &str, field: &'static str) -> Result<Zoned> {
    let parsed = strtime::parse(pattern, value)
        .map_err(|e| DateDisplayError::invalid(field, e.to_string()))?;
    let date = parsed
        .to_date()
        .map_err(|e| DateDisplayError::invalid(field, e.to_string()))?;
    let time = parsed.to_time().unwrap_or(Time::midnight());
    date.to_datetime(time)
        .to_zoned(TimeZone::system())
        .map_err(|e| DateDisplayError::invalid(field, e.to_string()))
}

/// Formats `date` with the given `strftime` pattern, in the date's own zone.
pub(crate) fn format(date: &Zoned, pattern: &str) -> Result<String> {
    strtime::format(pattern, date).map_err(|e| DateDisplayError::invalid("pattern", e.to_string()))
}

/// First millisecond (00:00:00.000) of the calendar day containing `date`.
pub(crate) fn day_start(date: &Zoned) -> Result<Zoned> {
    date.start_of_day()
        .map_err(|e| DateDisplayError::invalid("date", e.to_string()))
}

/// Last millisecond (23:59:59.999) of the calendar day containing `date`.
pub(crate) fn day_end(date: &Zoned) -> Result<Zoned> {
    let next_day_start = day_start(date)?
        .checked_add(1.days())
        .map_err(|e| DateDisplayError::invalid("date", e.to_string()))?;
    next_day_start
        .checked_sub(1.milliseconds())
        .map_err(|e| DateDisplayError::invalid("date", e.to_string()))
}

/// Last millisecond (Dec 31 23:59:59.999) of the year containing `date`.
pub(crate) fn year_end(date: &Zoned) -> Result<Zoned> {
    date.date()
        .last_of_year()
        .at(23, 59, 59, 999_000_000)
        .to_zoned(date.time_zone().clone())
        .map_err(|e| DateDisplayError::invalid("date", e.to_string()))
}

/// Adds `days` calendar days to `date`.
pub(crate) fn add_days(date: &Zoned, days: i64) -> Result<Zoned> {
    let span = Span::new()
        .try_days(days)
        .map_err(|e| DateDisplayError::invalid("days", e.to_string()))?;
    date.checked_add(span)
        .map_err(|e| DateDisplayError::invalid("date", e.to_string()))
}

/// Absolute number of milliseconds between two instants.
pub(crate) fn interval_millis(a: &Zoned, b: &Zoned) -> i64 {
    (a.timestamp().as_millisecond() - b.timestamp().as_millisecond()).abs()
}

/// Whole days in a millisecond count, truncating.
pub(crate) fn to_days(millis: i64) -> i64 {
    millis / MILLIS_PER_DAY
}

/// Whole hours in a millisecond count, truncating.
pub(crate) fn to_hours(millis: i64) -> i64 {
    millis / MILLIS_PER_HOUR
}

/// Whole minutes in a millisecond count, truncating.
pub(crate) fn to_minutes(millis: i64) -> i64 {
    millis / MILLIS_PER_MINUTE
}

/// Whole seconds in a millisecond count, truncating.
pub(crate) fn to_seconds(millis: i64) -> i64 {
    millis / MILLIS_PER_SECOND
}

/// Calendar year of an instant, in its own zone.
pub(crate) fn year(date: &Zoned) -> i16 {
    date.year()
}

/// Calendar day-of-month of an instant, in its own zone.
pub(crate) fn day_of_month(date: &Zoned) -> i8 {
    date.day()
}

/// Whether two instants render identically under `pattern`.
///
/// With a date-only pattern this answers "do these fall on the same calendar
/// date", which is how the pretty formatter compares days.
pub(crate) fn same_rendering(a: &Zoned, b: &Zoned, pattern: &str) -> Result<bool> {
    Ok(format(a, pattern)? == format(b, pattern)?)
}

/// Midnight of the first occurrence of `weekday` on or after January 1 of
/// the year containing `anchor`, in the anchor's zone.
pub(crate) fn first_weekday_of_year(anchor: &Zoned, weekday: Weekday) -> Result<Zoned> {
    let jan_first = anchor.date().first_of_year();
    let first = if jan_first.weekday() == weekday {
        jan_first
    } else {
        // nth_weekday does not count the starting date itself.
        jan_first
            .nth_weekday(1, weekday)
            .map_err(|e| DateDisplayError::invalid("week", e.to_string()))?
    };
    first
        .to_datetime(Time::midnight())
        .to_zoned(anchor.time_zone().clone())
        .map_err(|e| DateDisplayError::invalid("week", e.to_string()))
}
