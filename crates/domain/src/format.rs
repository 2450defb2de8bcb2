// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display helpers for durations and slot times.

use crate::slot::Instant;
use chrono::DateTime;
use chrono_tz::Tz;

/// Splits a minute count into whole hours and remaining minutes.
#[must_use]
pub const fn to_hours_and_minutes(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

/// Formats a duration for humans: `"1h 30m"`, `"2h 0m"` or `"45m"`.
#[must_use]
pub fn format_duration(total_minutes: u32) -> String {
    let (hours, minutes): (u32, u32) = to_hours_and_minutes(total_minutes);
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Formats a wall-clock time as `HH:MM`.
#[must_use]
pub fn format_time_of_day(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Formats the wall-clock time of `instant` in `tz` as `HH:MM`.
#[must_use]
pub fn format_slot_time(instant: Instant, tz: &Tz) -> String {
    let local: DateTime<Tz> = instant.with_timezone(tz);
    local.format("%H:%M").to_string()
}
