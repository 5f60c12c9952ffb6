//! Named `strftime` pattern constants.
//!
//! Patterns are opaque tokens passed to [`jiff::fmt::strtime`]; these
//! constants cover the combinations the display routines use internally and
//! the ones callers reach for most often.

/// Calendar date only: `2024-05-04`.
pub const DATE: &str = "%Y-%m-%d";

/// Hours and minutes: `21:30`.
pub const TIME_WITHOUT_SECOND: &str = "%H:%M";

/// Full date and time: `2024-05-04 21:30:15`.
pub const DATE_AND_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Full date and time with milliseconds: `2024-05-04 21:30:15.123`.
pub const DATE_AND_TIME_WITH_MILLISECOND: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Date and time without seconds: `2024-05-04 21:30`.
pub const DATE_AND_TIME_WITHOUT_SECOND: &str = "%Y-%m-%d %H:%M";

/// Month-day and time without seconds, used for same-year display:
/// `05-04 21:30`.
pub const MONTH_DAY_AND_TIME_WITHOUT_SECOND: &str = "%m-%d %H:%M";
