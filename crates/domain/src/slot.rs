// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-hour slot arithmetic in the canonical timezone.
//!
//! Instants are stored as UTC. Slot boundaries are measured on the wall
//! clock of the canonical timezone, so a slot starts at local `:00` or `:30`
//! regardless of the zone's offset from UTC.

use crate::error::DomainError;
use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Timelike, Utc,
};
use chrono_tz::Tz;
use tracing::warn;

/// An absolute point in time.
pub type Instant = DateTime<Utc>;

/// Length of one selectable slot, in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Number of slots on a regular (non-DST-transition) day.
pub const SLOTS_PER_DAY: u32 = 48;

/// Minutes in a wall-clock day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

const SLOT_SECONDS: i64 = 30 * 60;

/// Returns the length of one slot as a `Duration`.
#[must_use]
pub fn slot_duration() -> Duration {
    Duration::minutes(i64::from(SLOT_MINUTES))
}

/// Seconds between UTC and the canonical wall clock at `instant`.
fn local_offset_seconds(instant: Instant, tz: &Tz) -> i64 {
    i64::from(
        tz.offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc(),
    )
}

/// Checks that an event duration is a whole number of slots, at most one day.
///
/// # Errors
///
/// Returns `DomainError::InvalidDuration` if `minutes` is zero, not a
/// multiple of 30, or longer than a day.
pub const fn validate_duration(minutes: u32) -> Result<(), DomainError> {
    if minutes == 0 || minutes % SLOT_MINUTES != 0 || minutes > MINUTES_PER_DAY {
        return Err(DomainError::InvalidDuration { minutes });
    }
    Ok(())
}

/// Rounds `instant` down to the nearest slot boundary in `tz`.
#[must_use]
pub fn floor_to_slot(instant: Instant, tz: &Tz) -> Instant {
    let local_seconds: i64 = instant.timestamp() + local_offset_seconds(instant, tz);
    let into_slot: i64 = local_seconds.rem_euclid(SLOT_SECONDS);
    let nanos: i64 = i64::from(instant.timestamp_subsec_nanos());

    instant - Duration::seconds(into_slot) - Duration::nanoseconds(nanos)
}

/// Rounds `instant` up to the nearest slot boundary in `tz`.
///
/// An instant already on a boundary is returned unchanged.
#[must_use]
pub fn ceil_to_slot(instant: Instant, tz: &Tz) -> Instant {
    let floor: Instant = floor_to_slot(instant, tz);
    if floor == instant {
        instant
    } else {
        floor + slot_duration()
    }
}

/// Returns true if `instant` falls exactly on a slot boundary in `tz`.
#[must_use]
pub fn is_slot_aligned(instant: Instant, tz: &Tz) -> bool {
    floor_to_slot(instant, tz) == instant
}

/// Minutes elapsed since local midnight at `instant`.
#[must_use]
pub fn minutes_into_day(instant: Instant, tz: &Tz) -> u32 {
    let local: DateTime<Tz> = instant.with_timezone(tz);
    local.hour() * 60 + local.minute()
}

/// Returns true if a selection of `duration_minutes` starting at `instant`
/// ends no later than 24:00 of the same local day.
#[must_use]
pub fn fits_in_day(instant: Instant, duration_minutes: u32, tz: &Tz) -> bool {
    minutes_into_day(instant, tz).saturating_add(duration_minutes) <= MINUTES_PER_DAY
}

/// Resolves a local wall-clock time in `tz` to an instant.
///
/// Ambiguous wall times (a DST fall-back hour) resolve to the earliest
/// instant. Nonexistent wall times (a DST gap) return `None`.
#[must_use]
pub fn resolve_local(naive: NaiveDateTime, tz: &Tz) -> Option<Instant> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(local) => Some(local.with_timezone(&Utc)),
        LocalResult::Ambiguous(first, second) => {
            let earliest: DateTime<Tz> = first.min(second);
            Some(earliest.with_timezone(&Utc))
        }
        LocalResult::None => None,
    }
}

/// Returns the wall-clock start time of slot `index` (0-based) in a day.
#[must_use]
pub fn slot_time_of_day(index: u32) -> Option<NaiveTime> {
    if index >= SLOTS_PER_DAY {
        return None;
    }
    let minutes: u32 = index * SLOT_MINUTES;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Returns the first existing instant of `date` in `tz`.
///
/// This is local midnight unless midnight falls inside a DST gap, in which
/// case the first slot boundary that exists on that date is used.
#[must_use]
pub fn start_of_local_day(date: NaiveDate, tz: &Tz) -> Instant {
    for index in 0..SLOTS_PER_DAY {
        let Some(time) = slot_time_of_day(index) else {
            break;
        };
        if let Some(instant) = resolve_local(date.and_time(time), tz) {
            if index > 0 {
                warn!(
                    %date,
                    timezone = %tz.name(),
                    slot = index,
                    "local midnight does not exist; day starts later"
                );
            }
            return instant;
        }
    }

    warn!(
        %date,
        timezone = %tz.name(),
        "no resolvable wall time on date; falling back to UTC midnight"
    );
    date.and_time(NaiveTime::MIN).and_utc()
}
