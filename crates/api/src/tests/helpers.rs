// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{AvailabilityDto, CreateEventDto, EventDto};
use chrono::{NaiveDate, TimeZone, Utc};
use findtime_domain::Instant;

pub fn utc(day: u32, hour: u32, minute: u32) -> Instant {
    Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
}

pub fn create_test_event(event_type: &str) -> EventDto {
    EventDto {
        snowflake_id: String::from("7234567890123456789"),
        name: String::from("Planning sync"),
        description: None,
        from_date: Some(utc(2, 0, 0)),
        to_date: Some(utc(4, 0, 0)),
        event_type: event_type.to_string(),
        duration: 60,
    }
}

pub fn create_availability(
    id: i64,
    from: Instant,
    to: Instant,
    user_name: &str,
) -> AvailabilityDto {
    AvailabilityDto {
        id,
        from_date: from,
        to_date: to,
        user_name: user_name.to_string(),
    }
}

/// The day before the fixture window opens.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

pub fn create_new_event(event_type: &str) -> CreateEventDto {
    CreateEventDto {
        name: String::from("Planning sync"),
        description: Some(String::from("Quarterly planning")),
        from_date: Some(utc(2, 0, 0)),
        to_date: Some(utc(4, 0, 0)),
        event_type: event_type.to_string(),
        duration: 60,
    }
}
