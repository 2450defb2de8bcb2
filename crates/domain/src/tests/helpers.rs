// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Day, Instant};
use chrono::{NaiveDate, TimeZone, Utc};

/// Monday, March 2nd 2026.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Instant {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// An instant on Monday, March 2nd 2026 (UTC).
pub fn at(hour: u32, minute: u32) -> Instant {
    utc(2026, 3, 2, hour, minute)
}

pub fn create_test_day() -> Day {
    Day::new(at(0, 0))
}

/// Builds a day from `(start_hour, start_minute, end_hour, end_minute)` spans.
pub fn create_day_with(spans: &[(u32, u32, u32, u32)]) -> Day {
    let mut day: Day = create_test_day();
    for (start_hour, start_minute, end_hour, end_minute) in spans {
        let from: Instant = at(*start_hour, *start_minute);
        let to: Instant = at(*end_hour, *end_minute);
        let minutes: u32 = u32::try_from((to - from).num_minutes()).unwrap();
        day.add(from, minutes).unwrap();
    }
    day
}

/// Returns the day's intervals as `(from, to)` pairs.
pub fn spans(day: &Day) -> Vec<(Instant, Instant)> {
    day.intervals()
        .iter()
        .map(|interval| (interval.from(), interval.to()))
        .collect()
}

/// Asserts that no two intervals share an instant or touch.
pub fn assert_disjoint(day: &Day) {
    let intervals = day.intervals();
    for (i, a) in intervals.iter().enumerate() {
        for b in intervals.iter().skip(i + 1) {
            assert!(
                a.to() < b.from() || b.to() < a.from(),
                "intervals {a:?} and {b:?} overlap or touch"
            );
        }
    }
    assert!(day.is_normalized());
}
