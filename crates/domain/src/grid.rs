// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expansion of a scheduling window into picker days.
//!
//! ## Invariants
//!
//! - Every produced day starts at local midnight of the canonical timezone
//! - `SpecificDate` and `RecurringDay` produce exactly one day
//! - `RecurringWeek` produces exactly seven days
//! - `DateRange` excludes its end date and never produces zero days
//! - Recurring windows anchor on a placeholder Thursday whose calendar
//!   date is never shown or submitted

use crate::slot::start_of_local_day;
use crate::types::{Day, EventKind, WindowDescriptor};
use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

/// Number of representative days in a recurring week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Label shown above a recurring single-day column.
pub const ANY_DAY_LABEL: &str = "Any Day";

/// Returns the placeholder date recurring windows are anchored on.
///
/// This is 1970-01-01, a Thursday. Only its weekday is ever observed.
#[must_use]
pub fn recurring_anchor() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// Returns the first date a descriptor expands from.
#[must_use]
pub fn anchor_date(descriptor: &WindowDescriptor) -> NaiveDate {
    match descriptor {
        WindowDescriptor::SpecificDate(date) => *date,
        WindowDescriptor::DateRange { from, .. } => *from,
        WindowDescriptor::RecurringDay | WindowDescriptor::RecurringWeek => recurring_anchor(),
    }
}

/// Returns the number of days a descriptor expands to.
///
/// A `DateRange` spans the whole days between its two dates, so the end
/// date itself is not shown. A range whose dates coincide still yields one
/// day.
#[must_use]
pub fn day_count(descriptor: &WindowDescriptor) -> u64 {
    match descriptor {
        WindowDescriptor::SpecificDate(_) | WindowDescriptor::RecurringDay => 1,
        WindowDescriptor::DateRange { from, to } => {
            let span: u64 = (*to - *from).num_days().unsigned_abs();
            span.max(1)
        }
        WindowDescriptor::RecurringWeek => DAYS_PER_WEEK,
    }
}

/// Expands a scheduling window into its ordered, empty picker days.
///
/// # Arguments
///
/// * `descriptor` - The window, with dates in the canonical timezone
/// * `tz` - The canonical timezone
///
/// # Returns
///
/// One enabled `Day` per date, in calendar order, each starting at local
/// midnight of `tz`.
///
/// # Example
///
/// ```text
/// DateRange { from: 2026-03-02 (Mon), to: 2026-03-04 (Wed) }
///
/// Day 0: 2026-03-02 00:00 local
/// Day 1: 2026-03-03 00:00 local
/// ```
#[must_use]
pub fn generate_days(descriptor: &WindowDescriptor, tz: &Tz) -> Vec<Day> {
    let anchor: NaiveDate = anchor_date(descriptor);
    let count: u64 = day_count(descriptor);

    let days: Vec<Day> = (0..count)
        .filter_map(|offset| {
            let date: Option<NaiveDate> = anchor.checked_add_days(Days::new(offset));
            if date.is_none() {
                warn!(%anchor, offset, "date arithmetic overflow while expanding window");
            }
            date
        })
        .map(|date| Day::new(start_of_local_day(date, tz)))
        .collect();

    debug!(
        kind = %descriptor.kind(),
        %anchor,
        timezone = %tz.name(),
        days = days.len(),
        "generated slot grid"
    );

    days
}

/// Returns the column heading for a day.
///
/// Recurring windows never expose the placeholder date: a recurring day is
/// labelled "Any Day" and a recurring week uses weekday names.
#[must_use]
pub fn day_label(kind: EventKind, day: &Day, tz: &Tz) -> String {
    let date: NaiveDate = day.local_date(tz);
    match kind {
        EventKind::Day => ANY_DAY_LABEL.to_string(),
        EventKind::Week => date.format("%A").to_string(),
        EventKind::SpecificDate | EventKind::DateRange => date.format("%B %-d, %Y").to_string(),
    }
}
