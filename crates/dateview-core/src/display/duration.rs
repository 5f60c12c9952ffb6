//! Verbose duration rendering for log and report output.

use std::fmt;

use jiff::Zoned;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::{self, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND},
    error::{DateDisplayError, Result},
};

/// A non-negative duration decomposed into calendar-free components.
///
/// Each component is the remainder after subtracting all larger units: a
/// strict base-{24,60,60,1000} decomposition of a millisecond count, so
/// `hours` is always in `0..24`, `minutes` and `seconds` in `0..60`, and
/// `milliseconds` in `0..1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationComponents {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl DurationComponents {
    /// Decomposes a millisecond count.
    ///
    /// Returns [`DateDisplayError::InvalidArgument`] if `millis` is negative.
    pub fn from_millis(millis: i64) -> Result<Self> {
        if millis < 0 {
            return Err(DateDisplayError::invalid("millis", "can't be negative"));
        }
        let days = millis / MILLIS_PER_DAY;
        let hours = millis / MILLIS_PER_HOUR - days * 24;
        let minutes = millis / MILLIS_PER_MINUTE - (days * 24 + hours) * 60;
        let seconds = millis / MILLIS_PER_SECOND - ((days * 24 + hours) * 60 + minutes) * 60;
        let milliseconds = millis - (((days * 24 + hours) * 60 + minutes) * 60 + seconds) * 1_000;
        Ok(Self {
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
        })
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.milliseconds == 0
    }
}

fn write_unit(f: &mut fmt::Formatter<'_>, first: &mut bool, value: i64, unit: &str) -> fmt::Result {
    if value == 0 {
        return Ok(());
    }
    if !*first {
        write!(f, " ")?;
    }
    *first = false;
    let plural = if value == 1 { "" } else { "s" };
    write!(f, "{value} {unit}{plural}")
}

impl fmt::Display for DurationComponents {
    /// Renders only the non-zero components, most-significant first:
    /// `3 days 2 hours 5 minutes`. An all-zero value renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        write_unit(f, &mut first, self.days, "day")?;
        write_unit(f, &mut first, self.hours, "hour")?;
        write_unit(f, &mut first, self.minutes, "minute")?;
        write_unit(f, &mut first, self.seconds, "second")?;
        write_unit(f, &mut first, self.milliseconds, "millisecond")
    }
}

/// Renders a millisecond interval in a verbose human-readable form, commonly
/// used to report how long a piece of work took.
///
/// Returns the literal `"0"` for an input of exactly zero, and
/// [`DateDisplayError::InvalidArgument`] for a negative input.
///
/// # Examples
///
/// ```rust
/// use dateview_core::interval_for_view;
///
/// assert_eq!(interval_for_view(13516).unwrap(), "13 seconds 516 milliseconds");
/// assert_eq!(interval_for_view(0).unwrap(), "0");
/// assert!(interval_for_view(-1).is_err());
/// ```
pub fn interval_for_view(millis: i64) -> Result<String> {
    let components = DurationComponents::from_millis(millis)?;
    Ok(components.to_string())
}

/// Renders the absolute interval between two instants, in either order.
///
/// # Examples
///
/// ```rust
/// use dateview_core::interval_for_view_between;
/// use jiff::Zoned;
///
/// let begin: Zoned = "2011-05-19T08:30:40[UTC]".parse().unwrap();
/// let end: Zoned = "2011-05-19T11:30:24[UTC]".parse().unwrap();
/// assert_eq!(
///     interval_for_view_between(&begin, &end).unwrap(),
///     "2 hours 59 minutes 44 seconds"
/// );
/// ```
pub fn interval_for_view_between(begin: &Zoned, end: &Zoned) -> Result<String> {
    interval_for_view(calendar::interval_millis(begin, end))
}
