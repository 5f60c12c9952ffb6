//! Clock abstraction for operations that depend on "now".
//!
//! Two operations in this crate read the system clock: the relative pretty
//! formatter and the weekday-occurrence generator. Threading a [`Clock`]
//! through them keeps those operations deterministic under test while the
//! default entry points stay on real system time.

use jiff::Zoned;

/// A source of the current time in the system time zone.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Zoned;
}

/// The real system clock. Default time source for all `now`-dependent
/// operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// A clock pinned to a single instant.
///
/// Intended for tests and replay scenarios where "now" must not move between
/// calls.
///
/// # Examples
///
/// ```rust
/// use dateview_core::clock::{Clock, FixedClock};
/// use jiff::Zoned;
///
/// let now: Zoned = "2024-05-04T12:00:00[UTC]".parse().unwrap();
/// let clock = FixedClock(now.clone());
/// assert_eq!(clock.now(), now);
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock(pub Zoned);

impl Clock for FixedClock {
    fn now(&self) -> Zoned {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant: Zoned = "2022-01-01T00:00:00[UTC]".parse().unwrap();
        let clock = FixedClock(instant.clone());
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
