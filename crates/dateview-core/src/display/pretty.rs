//! Relative "pretty" date rendering against the current time.

use jiff::Zoned;

use crate::{
    calendar,
    clock::{Clock, SystemClock},
    error::Result,
    patterns,
};

const YESTERDAY: &str = "Yesterday";
const DAY_BEFORE_YESTERDAY: &str = "The day before yesterday";

/// Renders an instant relative to the system clock: seconds/minutes/hours
/// ago for the same day, "Yesterday HH:MM" and "The day before yesterday
/// HH:MM" for recent days, and a date-and-time form beyond that (the year is
/// omitted when it matches the current year; seconds are never shown).
///
/// Instants in the future take the same branches as past ones because the
/// underlying interval is sign-normalized; only past-or-present inputs have
/// documented behavior.
pub fn pretty_date_string(in_date: &Zoned) -> Result<String> {
    pretty_date_string_with_clock(in_date, &SystemClock)
}

/// Like [`pretty_date_string`], but with an explicit time source.
///
/// # Examples
///
/// ```rust
/// use dateview_core::{clock::FixedClock, pretty_date_string_with_clock};
/// use jiff::{ToSpan, Zoned};
///
/// let now: Zoned = "2024-05-04T12:00:00[UTC]".parse().unwrap();
/// let clock = FixedClock(now.clone());
///
/// let recent = now.checked_sub(30.seconds()).unwrap();
/// assert_eq!(
///     pretty_date_string_with_clock(&recent, &clock).unwrap(),
///     "30 seconds ago"
/// );
/// ```
pub fn pretty_date_string_with_clock(in_date: &Zoned, clock: &impl Clock) -> Result<String> {
    let now = clock.now();
    let same_year = calendar::year(in_date) == calendar::year(&now);
    let space_millis = calendar::interval_millis(in_date, &now);

    match calendar::to_days(space_millis) {
        0 => zero_day_interval(in_date, &now, space_millis),
        1 => one_day_interval(in_date, &now),
        2 => two_day_interval(in_date, &now, same_year),
        _ => long_form(in_date, same_year),
    }
}

/// Whether `in_date` shifted forward by `days` falls on the same calendar
/// date as `now`.
///
/// This is the crux of the quirky branches below: the dispatch above counts
/// days in elapsed milliseconds, while this helper compares calendar dates.
/// The two disagree around midnight boundaries (and DST shifts), and the
/// historical behavior of that disagreement is kept intact. Correcting it
/// means changing this helper only.
fn shifted_matches_calendar_date(in_date: &Zoned, now: &Zoned, days: i64) -> Result<bool> {
    let shifted = calendar::add_days(in_date, days)?;
    calendar::same_rendering(&shifted, now, patterns::DATE)
}

fn time_of(in_date: &Zoned) -> Result<String> {
    calendar::format(in_date, patterns::TIME_WITHOUT_SECOND)
}

fn ago(value: i64, unit: &str) -> String {
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}

fn zero_day_interval(in_date: &Zoned, now: &Zoned, space_millis: i64) -> Result<String> {
    let space_hours = calendar::to_hours(space_millis);
    if space_hours == 0 {
        let space_minutes = calendar::to_minutes(space_millis);
        return Ok(if space_minutes == 0 {
            ago(calendar::to_seconds(space_millis), "second")
        } else {
            ago(space_minutes, "minute")
        });
    }
    // Less than 24h apart can still straddle midnight; in that case the
    // wall-clock time reads as yesterday's.
    if calendar::day_of_month(in_date) == calendar::day_of_month(now) {
        Ok(ago(space_hours, "hour"))
    } else {
        Ok(format!("{YESTERDAY} {}", time_of(in_date)?))
    }
}

fn one_day_interval(in_date: &Zoned, now: &Zoned) -> Result<String> {
    let label = if shifted_matches_calendar_date(in_date, now, 1)? {
        YESTERDAY
    } else {
        // A full-day gap whose calendar dates are two apart reports "the day
        // before yesterday" even though only ~one day elapsed.
        DAY_BEFORE_YESTERDAY
    };
    Ok(format!("{label} {}", time_of(in_date)?))
}

fn two_day_interval(in_date: &Zoned, now: &Zoned, same_year: bool) -> Result<String> {
    if shifted_matches_calendar_date(in_date, now, 2)? {
        return Ok(format!("{DAY_BEFORE_YESTERDAY} {}", time_of(in_date)?));
    }
    long_form(in_date, same_year)
}

fn long_form(in_date: &Zoned, same_year: bool) -> Result<String> {
    let pattern = if same_year {
        patterns::MONTH_DAY_AND_TIME_WITHOUT_SECOND
    } else {
        patterns::DATE_AND_TIME_WITHOUT_SECOND
    };
    calendar::format(in_date, pattern)
}
