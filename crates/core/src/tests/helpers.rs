// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Session;
use chrono::{NaiveDate, TimeZone, Utc};
use findtime_domain::{Instant, WindowDescriptor};

pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
}

pub fn utc(day: u32, hour: u32, minute: u32) -> Instant {
    Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
}

/// A Monday-to-Wednesday range (two days) in UTC with the given duration.
pub fn create_test_session(duration_minutes: u32) -> Session {
    Session::new(
        WindowDescriptor::DateRange {
            from: monday(),
            to: wednesday(),
        },
        chrono_tz::UTC,
        duration_minutes,
    )
    .unwrap()
}
