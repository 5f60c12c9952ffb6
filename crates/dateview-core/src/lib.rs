//! Date display utilities: human-friendly rendering of instants and
//! intervals, and calendar-aligned date sequences for reporting.
//!
//! This crate is a small, stateless formatting layer over [`jiff`]. It does
//! no I/O and holds no state: every routine is a pure computation over its
//! arguments, plus a single clock read for the two operations that compare
//! against "now". Those two exist in `_with_clock` variants taking a
//! [`clock::Clock`], so tests and replay tooling can pin the current time.
//!
//! # Operations
//!
//! - [`pretty_date_string`]: relative rendering against now — "30 seconds
//!   ago", "Yesterday 21:30", "05-04 21:30".
//! - [`interval_for_view`]: verbose duration rendering — "2 hours 59 minutes
//!   44 seconds", commonly used to log how long a piece of work took.
//! - [`interval_day_list`]: every calendar day touched by an interval, each
//!   reset to its day start, for day-granular reports.
//! - [`week_date_string_list`]: every occurrence of a weekday in the current
//!   year, formatted with a caller-supplied pattern.
//! - [`to_string_list`]: batch conversion of instants to strings.
//! - [`reset_today_and_tomorrow`] / [`reset_yesterday_and_today`]:
//!   day-aligned bound pairs for range queries.
//!
//! # Quick Start
//!
//! ```rust
//! use dateview_core::{interval_day_list, interval_for_view, to_string_list, patterns};
//! use jiff::Zoned;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let from: Zoned = "2011-03-05T23:31:25.456[UTC]".parse()?;
//! let to: Zoned = "2011-03-10T01:30:24.895[UTC]".parse()?;
//!
//! // One entry per calendar day in the interval, inclusive on both ends.
//! let days = interval_day_list(&from, &to)?;
//! assert_eq!(days.len(), 6);
//!
//! let labels = to_string_list(&days, patterns::DATE)?;
//! assert_eq!(labels[0], "2011-03-05");
//! assert_eq!(labels[5], "2011-03-10");
//!
//! // Verbose duration rendering.
//! assert_eq!(interval_for_view(13_516)?, "13 seconds 516 milliseconds");
//! # Ok(())
//! # }
//! ```

mod calendar;
pub mod clock;
pub mod display;
pub mod error;
pub mod patterns;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use display::{
    interval_day_list, interval_day_list_str, interval_for_view, interval_for_view_between,
    pretty_date_string, pretty_date_string_with_clock, reset_today_and_tomorrow,
    reset_today_and_tomorrow_with_clock, reset_yesterday_and_today,
    reset_yesterday_and_today_with_clock, to_string_list, week_date_string_list,
    week_date_string_list_with_clock, DurationComponents,
};
pub use error::{DateDisplayError, Result};
