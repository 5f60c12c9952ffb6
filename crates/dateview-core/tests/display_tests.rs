//! Integration tests over the public API.

use dateview_core::{
    interval_day_list, interval_day_list_str, interval_for_view, interval_for_view_between,
    patterns, pretty_date_string, pretty_date_string_with_clock, to_string_list,
    week_date_string_list_with_clock, DateDisplayError, FixedClock,
};
use jiff::{civil::Date, ToSpan, Zoned};

fn zoned(s: &str) -> Zoned {
    s.parse().unwrap()
}

#[test]
fn interval_day_list_spans_both_bounds() {
    let from = zoned("2011-03-05T23:31:25.456[UTC]");
    let to = zoned("2011-03-10T01:30:24.895[UTC]");

    let days = interval_day_list(&from, &to).unwrap();
    assert_eq!(days.len(), 6);

    // First element is day-start of the earlier bound, and every entry is
    // exactly one calendar day after the previous.
    assert_eq!(days[0], zoned("2011-03-05T00:00:00[UTC]"));
    for pair in days.windows(2) {
        assert_eq!(pair[1].date(), pair[0].date().tomorrow().unwrap());
    }
    assert_eq!(days[5], zoned("2011-03-10T00:00:00[UTC]"));
}

#[test]
fn interval_day_list_is_order_invariant() {
    let from = zoned("2011-03-05T23:31:25.456[UTC]");
    let to = zoned("2011-03-10T01:30:24.895[UTC]");
    assert_eq!(
        interval_day_list(&from, &to).unwrap(),
        interval_day_list(&to, &from).unwrap()
    );
}

#[test]
fn interval_day_list_str_round_trips_through_parsing() {
    let days = interval_day_list_str(
        "2011-03-05 23:31:25.456",
        "2011-03-10 01:30:24.895",
        patterns::DATE_AND_TIME_WITH_MILLISECOND,
    )
    .unwrap();
    assert_eq!(days.len(), 6);

    let labels = to_string_list(&days, patterns::DATE_AND_TIME).unwrap();
    assert_eq!(labels.first().unwrap(), "2011-03-05 00:00:00");
    assert_eq!(labels.last().unwrap(), "2011-03-10 00:00:00");
}

#[test]
fn interval_for_view_known_values() {
    assert_eq!(
        interval_for_view(13_516).unwrap(),
        "13 seconds 516 milliseconds"
    );
    assert_eq!(interval_for_view(0).unwrap(), "0");
    assert!(matches!(
        interval_for_view(-1),
        Err(DateDisplayError::InvalidArgument { field: "millis", .. })
    ));
}

#[test]
fn interval_for_view_between_is_order_invariant() {
    let begin = zoned("2011-05-19T08:30:40[UTC]");
    let end = zoned("2011-05-19T11:30:24[UTC]");

    let rendered = interval_for_view_between(&begin, &end).unwrap();
    assert_eq!(rendered, "2 hours 59 minutes 44 seconds");
    assert_eq!(rendered, interval_for_view_between(&end, &begin).unwrap());
}

#[test]
fn to_string_list_empty_input_yields_empty_output() {
    assert!(to_string_list(&[], "").unwrap().is_empty());
}

#[test]
fn pretty_date_string_thirty_seconds_ago() {
    let now = zoned("2024-05-04T12:00:00[UTC]");
    let in_date = now.checked_sub(30.seconds()).unwrap();
    assert_eq!(
        pretty_date_string_with_clock(&in_date, &FixedClock(now)).unwrap(),
        "30 seconds ago"
    );
}

#[test]
fn pretty_date_string_against_real_clock() {
    // Against the live system clock the exact count can skew by a second
    // between the two clock reads, so only the shape is asserted.
    let in_date = Zoned::now().checked_sub(30.seconds()).unwrap();
    let rendered = pretty_date_string(&in_date).unwrap();
    assert!(rendered.ends_with("seconds ago"), "got: {rendered}");
}

#[test]
fn week_date_string_list_entries_are_seven_days_apart() {
    let clock = FixedClock(zoned("2016-06-15T12:00:00[UTC]"));
    for week in 1..=7 {
        let entries = week_date_string_list_with_clock(week, patterns::DATE, &clock).unwrap();
        assert!(
            entries.len() == 52 || entries.len() == 53,
            "weekday {week} produced {} entries",
            entries.len()
        );

        let dates: Vec<Date> = entries.iter().map(|s| s.parse().unwrap()).collect();
        for pair in dates.windows(2) {
            assert_eq!(pair[0].checked_add(7.days()).unwrap(), pair[1]);
        }
        assert!(*dates.last().unwrap() <= Date::constant(2016, 12, 31));
        assert_eq!(dates[0].year(), 2016);
    }
}

#[test]
fn formatting_is_idempotent() {
    let date = zoned("2011-03-05T23:31:25.456[UTC]");
    let dates = [date];
    let first = to_string_list(&dates, patterns::DATE_AND_TIME_WITH_MILLISECOND).unwrap();
    let second = to_string_list(&dates, patterns::DATE_AND_TIME_WITH_MILLISECOND).unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0], "2011-03-05 23:31:25.456");
}
