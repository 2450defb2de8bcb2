// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{at, utc};
use crate::{
    DomainError, ceil_to_slot, fits_in_day, floor_to_slot, format_slot_time, is_slot_aligned,
    minutes_into_day, slot_time_of_day, validate_duration,
};
use chrono::NaiveTime;
use chrono_tz::Tz;

#[test]
fn test_floor_and_ceil_in_utc() {
    let tz: Tz = chrono_tz::UTC;

    assert_eq!(floor_to_slot(at(9, 10), &tz), at(9, 0));
    assert_eq!(ceil_to_slot(at(9, 10), &tz), at(9, 30));
    assert_eq!(floor_to_slot(at(9, 30), &tz), at(9, 30));
    assert_eq!(ceil_to_slot(at(9, 30), &tz), at(9, 30));
}

#[test]
fn test_alignment_follows_local_wall_clock() {
    let tz: Tz = chrono_tz::Asia::Kathmandu;

    // 03:15 UTC is 09:00 in Kathmandu.
    assert!(is_slot_aligned(utc(2026, 3, 2, 3, 15), &tz));
    assert!(!is_slot_aligned(utc(2026, 3, 2, 3, 0), &tz));
    assert_eq!(
        floor_to_slot(utc(2026, 3, 2, 3, 20), &tz),
        utc(2026, 3, 2, 3, 15)
    );
    assert_eq!(format_slot_time(utc(2026, 3, 2, 3, 15), &tz), "09:00");
}

#[test]
fn test_minutes_into_day() {
    assert_eq!(minutes_into_day(at(0, 0), &chrono_tz::UTC), 0);
    assert_eq!(minutes_into_day(at(13, 30), &chrono_tz::UTC), 810);
}

#[test]
fn test_fits_in_day_stops_at_midnight() {
    let tz: Tz = chrono_tz::UTC;

    assert!(fits_in_day(at(23, 0), 60, &tz));
    assert!(fits_in_day(at(23, 30), 30, &tz));
    assert!(!fits_in_day(at(23, 30), 60, &tz));
}

#[test]
fn test_slot_time_of_day_bounds() {
    assert_eq!(slot_time_of_day(0), Some(NaiveTime::MIN));
    assert_eq!(slot_time_of_day(47), NaiveTime::from_hms_opt(23, 30, 0));
    assert_eq!(slot_time_of_day(48), None);
}

#[test]
fn test_validate_duration_accepts_whole_slots() {
    assert_eq!(validate_duration(30), Ok(()));
    assert_eq!(validate_duration(90), Ok(()));
    assert_eq!(validate_duration(1440), Ok(()));
}

#[test]
fn test_validate_duration_rejects_partial_or_oversized() {
    assert_eq!(
        validate_duration(0),
        Err(DomainError::InvalidDuration { minutes: 0 })
    );
    assert_eq!(
        validate_duration(45),
        Err(DomainError::InvalidDuration { minutes: 45 })
    );
    assert_eq!(
        validate_duration(1470),
        Err(DomainError::InvalidDuration { minutes: 1470 })
    );
}
