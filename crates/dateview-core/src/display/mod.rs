//! Display formatting routines.
//!
//! Everything user-visible this crate produces comes out of these modules:
//!
//! - [`pretty`]: relative rendering of a single instant against "now"
//!   ("30 seconds ago", "Yesterday 21:30", "05-04 21:30").
//! - [`duration`]: verbose rendering of a millisecond interval
//!   ("2 hours 59 minutes 44 seconds") via [`DurationComponents`].
//! - [`lists`]: calendar-aligned sequences — day boundaries of an interval,
//!   weekday occurrences of the current year — and batch conversion of
//!   instants to strings.
//!
//! The routines that depend on the current time exist in two forms: a plain
//! entry point on the system clock and a `_with_clock` variant taking any
//! [`crate::clock::Clock`], which is what the deterministic tests use.

pub mod duration;
pub mod lists;
pub mod pretty;


// Re-export commonly used items for convenience
pub use duration::{interval_for_view, interval_for_view_between, DurationComponents};
pub use lists::{
    interval_day_list, interval_day_list_str, reset_today_and_tomorrow,
    reset_today_and_tomorrow_with_clock, reset_yesterday_and_today,
    reset_yesterday_and_today_with_clock, to_string_list, week_date_string_list,
    week_date_string_list_with_clock,
};
pub use pretty::{pretty_date_string, pretty_date_string_with_clock};
