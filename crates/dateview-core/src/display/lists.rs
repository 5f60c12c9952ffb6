//! Calendar-aligned date sequences and batch string conversion.

use jiff::{civil::Weekday, Zoned};

use crate::{
    calendar,
    clock::{Clock, SystemClock},
    error::{require_non_blank, DateDisplayError, Result},
};

/// Returns every calendar day touched by the interval between two instants,
/// inclusive on both ends, each entry reset to its day start (00:00:00.000).
///
/// The inputs may arrive in either order; swapping them yields the identical
/// sequence. The day count is taken from the elapsed milliseconds between
/// day-start of the earlier instant and day-end of the later one, so the
/// sequence length is always that whole-day span plus one.
///
/// # Examples
///
/// ```rust
/// use dateview_core::interval_day_list;
/// use jiff::Zoned;
///
/// let from: Zoned = "2011-03-05T23:31:25.456[UTC]".parse().unwrap();
/// let to: Zoned = "2011-03-10T01:30:24.895[UTC]".parse().unwrap();
///
/// let days = interval_day_list(&from, &to).unwrap();
/// assert_eq!(days.len(), 6);
/// assert_eq!(days[0], "2011-03-05T00:00:00[UTC]".parse().unwrap());
/// assert_eq!(days[5], "2011-03-10T00:00:00[UTC]".parse().unwrap());
/// ```
pub fn interval_day_list(from_date: &Zoned, to_date: &Zoned) -> Result<Vec<Zoned>> {
    let (min, max) = if from_date < to_date {
        (from_date, to_date)
    } else {
        (to_date, from_date)
    };

    let begin = calendar::day_start(min)?;
    let end = calendar::day_end(max)?;

    let span_days = calendar::to_days(calendar::interval_millis(&begin, &end));
    let mut days = Vec::with_capacity(span_days as usize + 1);
    days.push(begin.clone());
    for i in 1..=span_days {
        days.push(calendar::add_days(&begin, i)?);
    }
    Ok(days)
}

/// String-input form of [`interval_day_list`]: parses both bounds with the
/// given pattern first.
///
/// Returns [`DateDisplayError::MissingArgument`] when any of the three
/// strings is empty, and [`DateDisplayError::InvalidArgument`] when one is
/// blank or does not parse under `pattern`.
pub fn interval_day_list_str(
    from_date: &str,
    to_date: &str,
    pattern: &str,
) -> Result<Vec<Zoned>> {
    require_non_blank(from_date, "from_date")?;
    require_non_blank(to_date, "to_date")?;
    require_non_blank(pattern, "pattern")?;

    let from = calendar::parse(from_date, pattern, "from_date")?;
    let to = calendar::parse(to_date, pattern, "to_date")?;
    interval_day_list(&from, &to)
}

/// Formats every occurrence of a weekday in the current year, read from the
/// system clock.
///
/// `week` follows the 1–7, Sunday = 1 convention. Occurrences start at the
/// first matching day on or after January 1 (at midnight) and step forward
/// seven calendar days at a time, stopping strictly before the last instant
/// of the year; the result always holds 52 or 53 entries.
pub fn week_date_string_list(week: i8, pattern: &str) -> Result<Vec<String>> {
    week_date_string_list_with_clock(week, pattern, &SystemClock)
}

/// Like [`week_date_string_list`], but with an explicit time source that
/// supplies the anchoring year.
///
/// # Examples
///
/// ```rust
/// use dateview_core::{clock::FixedClock, week_date_string_list_with_clock};
/// use jiff::Zoned;
///
/// let clock = FixedClock("2016-06-15T12:00:00[UTC]".parse().unwrap());
/// // 5 = Thursday under the Sunday = 1 convention.
/// let thursdays = week_date_string_list_with_clock(5, "%Y-%m-%d", &clock).unwrap();
/// assert_eq!(thursdays.first().unwrap(), "2016-01-07");
/// assert_eq!(thursdays.last().unwrap(), "2016-12-29");
/// assert_eq!(thursdays.len(), 52);
/// ```
pub fn week_date_string_list_with_clock(
    week: i8,
    pattern: &str,
    clock: &impl Clock,
) -> Result<Vec<String>> {
    require_non_blank(pattern, "pattern")?;
    let weekday = Weekday::from_sunday_one_offset(week)
        .map_err(|_| DateDisplayError::invalid("week", "must be in 1..=7, Sunday = 1"))?;

    let now = clock.now();
    let year_end = calendar::year_end(&now)?;

    let mut occurrence = calendar::first_weekday_of_year(&now, weekday)?;
    let mut list = Vec::with_capacity(53);
    while occurrence < year_end {
        list.push(calendar::format(&occurrence, pattern)?);
        occurrence = calendar::add_days(&occurrence, 7)?;
    }
    Ok(list)
}

/// Renders each instant with the given pattern, preserving input order.
///
/// An empty input yields an empty output with no validation at all; for a
/// non-empty input a blank pattern is rejected.
///
/// # Examples
///
/// ```rust
/// use dateview_core::{patterns, to_string_list};
/// use jiff::Zoned;
///
/// let dates: Vec<Zoned> = vec![
///     "2011-03-05T23:31:25[UTC]".parse().unwrap(),
///     "2011-03-10T01:30:24[UTC]".parse().unwrap(),
/// ];
/// let strings = to_string_list(&dates, patterns::DATE).unwrap();
/// assert_eq!(strings, vec!["2011-03-05", "2011-03-10"]);
///
/// assert!(to_string_list(&[], "").unwrap().is_empty());
/// ```
pub fn to_string_list(dates: &[Zoned], pattern: &str) -> Result<Vec<String>> {
    if dates.is_empty() {
        return Ok(Vec::new());
    }
    require_non_blank(pattern, "pattern")?;

    dates
        .iter()
        .map(|date| calendar::format(date, pattern))
        .collect()
}

/// Returns `[today 00:00:00.000, tomorrow 00:00:00.000]` for the system
/// clock, a convenient pair of bounds for day-granular range queries.
pub fn reset_today_and_tomorrow() -> Result<[Zoned; 2]> {
    reset_today_and_tomorrow_with_clock(&SystemClock)
}

/// Like [`reset_today_and_tomorrow`], but with an explicit time source.
pub fn reset_today_and_tomorrow_with_clock(clock: &impl Clock) -> Result<[Zoned; 2]> {
    let today = calendar::day_start(&clock.now())?;
    let tomorrow = calendar::add_days(&today, 1)?;
    Ok([today, tomorrow])
}

/// Returns `[yesterday 00:00:00.000, today 00:00:00.000]` for the system
/// clock.
pub fn reset_yesterday_and_today() -> Result<[Zoned; 2]> {
    reset_yesterday_and_today_with_clock(&SystemClock)
}

/// Like [`reset_yesterday_and_today`], but with an explicit time source.
pub fn reset_yesterday_and_today_with_clock(clock: &impl Clock) -> Result<[Zoned; 2]> {
    let today = calendar::day_start(&clock.now())?;
    let yesterday = calendar::add_days(&today, -1)?;
    Ok([yesterday, today])
}
