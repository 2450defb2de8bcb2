// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{monday, utc};
use crate::{
    ANY_DAY_LABEL, Day, EventKind, Instant, WindowDescriptor, day_count, day_label, generate_days,
    recurring_anchor,
};
use chrono::{Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;

fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
}

#[test]
fn test_specific_date_generates_one_day_at_midnight() {
    let days: Vec<Day> = generate_days(&WindowDescriptor::SpecificDate(monday()), &chrono_tz::UTC);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].start_of_day(), utc(2026, 3, 2, 0, 0));
    assert!(!days[0].is_disabled());
    assert!(!days[0].has_selection());
}

#[test]
fn test_date_range_excludes_end_date() {
    let descriptor: WindowDescriptor = WindowDescriptor::DateRange {
        from: monday(),
        to: wednesday(),
    };

    let days: Vec<Day> = generate_days(&descriptor, &chrono_tz::UTC);

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].start_of_day(), utc(2026, 3, 2, 0, 0));
    assert_eq!(days[1].start_of_day(), utc(2026, 3, 3, 0, 0));
}

#[test]
fn test_date_range_on_single_date_yields_one_day() {
    let descriptor: WindowDescriptor = WindowDescriptor::DateRange {
        from: monday(),
        to: monday(),
    };

    assert_eq!(day_count(&descriptor), 1);
    assert_eq!(generate_days(&descriptor, &chrono_tz::UTC).len(), 1);
}

#[test]
fn test_date_range_count_uses_absolute_span() {
    let descriptor: WindowDescriptor = WindowDescriptor::DateRange {
        from: wednesday(),
        to: monday(),
    };

    assert_eq!(day_count(&descriptor), 2);
}

#[test]
fn test_week_generates_seven_days_from_placeholder_thursday() {
    let days: Vec<Day> = generate_days(&WindowDescriptor::RecurringWeek, &chrono_tz::UTC);

    assert_eq!(days.len(), 7);
    assert_eq!(recurring_anchor().weekday(), Weekday::Thu);
    assert_eq!(days[0].local_date(&chrono_tz::UTC), recurring_anchor());

    let labels: Vec<String> = days
        .iter()
        .map(|day| day_label(EventKind::Week, day, &chrono_tz::UTC))
        .collect();
    assert_eq!(
        labels,
        vec![
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday"
        ]
    );
}

#[test]
fn test_week_has_seven_days_in_any_timezone() {
    let tz: Tz = chrono_tz::Pacific::Auckland;
    let days: Vec<Day> = generate_days(&WindowDescriptor::RecurringWeek, &tz);

    assert_eq!(days.len(), 7);
    assert_eq!(days[0].local_date(&tz), recurring_anchor());
}

#[test]
fn test_recurring_day_is_labelled_any_day() {
    let days: Vec<Day> = generate_days(&WindowDescriptor::RecurringDay, &chrono_tz::UTC);

    assert_eq!(days.len(), 1);
    assert_eq!(
        day_label(EventKind::Day, &days[0], &chrono_tz::UTC),
        ANY_DAY_LABEL
    );
}

#[test]
fn test_dated_windows_use_long_date_label() {
    let days: Vec<Day> = generate_days(&WindowDescriptor::SpecificDate(monday()), &chrono_tz::UTC);

    assert_eq!(
        day_label(EventKind::SpecificDate, &days[0], &chrono_tz::UTC),
        "March 2, 2026"
    );
}

#[test]
fn test_day_starts_at_local_midnight_of_canonical_timezone() {
    let tz: Tz = chrono_tz::America::New_York;
    let days: Vec<Day> = generate_days(&WindowDescriptor::SpecificDate(monday()), &tz);

    // EST is UTC-5 in early March.
    assert_eq!(days[0].start_of_day(), utc(2026, 3, 2, 5, 0));
    assert_eq!(days[0].local_date(&tz), monday());
}

#[test]
fn test_regular_day_has_forty_eight_slots() {
    let days: Vec<Day> = generate_days(&WindowDescriptor::SpecificDate(monday()), &chrono_tz::UTC);
    let slots: Vec<Instant> = days[0].slots(&chrono_tz::UTC);

    assert_eq!(slots.len(), 48);
    assert_eq!(slots[0], utc(2026, 3, 2, 0, 0));
    assert_eq!(slots[1], utc(2026, 3, 2, 0, 30));
    assert_eq!(slots[47], utc(2026, 3, 2, 23, 30));
}

#[test]
fn test_spring_forward_day_skips_missing_hour() {
    let tz: Tz = chrono_tz::America::New_York;
    let dst_start: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
    let days: Vec<Day> = generate_days(&WindowDescriptor::SpecificDate(dst_start), &tz);
    let slots: Vec<Instant> = days[0].slots(&tz);

    assert_eq!(slots.len(), 46);
    assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_fall_back_day_lists_repeated_hour_once() {
    let tz: Tz = chrono_tz::America::New_York;
    let dst_end: NaiveDate = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
    let days: Vec<Day> = generate_days(&WindowDescriptor::SpecificDate(dst_end), &tz);
    let slots: Vec<Instant> = days[0].slots(&tz);

    assert_eq!(slots.len(), 48);
    // 01:00 EDT is 05:00 UTC; the repeated 01:00 EST is not listed.
    assert!(slots.contains(&utc(2026, 11, 1, 5, 0)));
    assert!(!slots.contains(&utc(2026, 11, 1, 6, 0)));
}
