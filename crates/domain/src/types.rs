// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::slot::{Instant, SLOTS_PER_DAY, resolve_local, slot_time_of_day};
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// A half-open span of time `[from, to)`.
///
/// Intervals are plain values. Merging never mutates an existing interval;
/// it produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    from: Instant,
    to: Instant,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Arguments
    ///
    /// * `from` - The first covered instant
    /// * `to` - The first instant after the interval
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInterval` if `from` is not before `to`.
    pub fn new(from: Instant, to: Instant) -> Result<Self, DomainError> {
        if from >= to {
            return Err(DomainError::InvalidInterval { from, to });
        }
        Ok(Self { from, to })
    }

    /// Builds the smallest interval covering both `self` and `other`.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }

    /// Returns the first covered instant.
    #[must_use]
    pub const fn from(&self) -> Instant {
        self.from
    }

    /// Returns the first instant after the interval.
    #[must_use]
    pub const fn to(&self) -> Instant {
        self.to
    }

    /// Half-open containment: `from <= instant < to`.
    #[must_use]
    pub fn contains(&self, instant: Instant) -> bool {
        self.from <= instant && instant < self.to
    }

    /// Inclusive matching used when merging: `from <= instant <= to`.
    ///
    /// An interval "touches" its own end so that a selection starting
    /// exactly where another ends is merged rather than left adjacent.
    #[must_use]
    pub fn touches(&self, instant: Instant) -> bool {
        self.from <= instant && instant <= self.to
    }

    /// Returns true if the two intervals share an instant or are adjacent.
    #[must_use]
    pub fn overlaps_or_touches(&self, other: &Self) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Length of the interval in whole minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.to - self.from).num_minutes()
    }
}

/// One column of the picker: a calendar day in the canonical timezone and
/// the respondent's selections on it.
///
/// Intervals are kept sorted by start, pairwise disjoint, and never adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    start_of_day: Instant,
    disabled: bool,
    pub(crate) intervals: Vec<Interval>,
}

impl Day {
    /// Creates an empty, interactive day.
    #[must_use]
    pub const fn new(start_of_day: Instant) -> Self {
        Self {
            start_of_day,
            disabled: false,
            intervals: Vec::new(),
        }
    }

    /// Creates an empty day that is shown only because of a timezone shift.
    ///
    /// Disabled days take no selections and are never submitted.
    #[must_use]
    pub const fn new_disabled(start_of_day: Instant) -> Self {
        Self {
            start_of_day,
            disabled: true,
            intervals: Vec::new(),
        }
    }

    /// Returns the first instant of the day in the canonical timezone.
    #[must_use]
    pub const fn start_of_day(&self) -> Instant {
        self.start_of_day
    }

    /// Returns true if the day is a timezone-shift artifact.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the day's selections, sorted by start.
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns true if at least one slot is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.intervals.is_empty()
    }

    /// Total selected time on this day, in minutes.
    #[must_use]
    pub fn selected_minutes(&self) -> i64 {
        self.intervals.iter().map(Interval::duration_minutes).sum()
    }

    /// Returns the calendar date of this day in `tz`.
    #[must_use]
    pub fn local_date(&self, tz: &Tz) -> NaiveDate {
        let local: DateTime<Tz> = self.start_of_day.with_timezone(tz);
        local.date_naive()
    }

    /// Returns the start instant of every half-hour slot on this day.
    ///
    /// Wall times that fall into a DST gap are skipped. Wall times repeated
    /// by a DST fall-back appear once, at their earliest instant.
    #[must_use]
    pub fn slots(&self, tz: &Tz) -> Vec<Instant> {
        let date: NaiveDate = self.local_date(tz);
        let mut slots: Vec<Instant> = Vec::with_capacity(SLOTS_PER_DAY as usize);

        for index in 0..SLOTS_PER_DAY {
            let Some(time) = slot_time_of_day(index) else {
                break;
            };
            match resolve_local(date.and_time(time), tz) {
                Some(instant) => slots.push(instant),
                None => {
                    warn!(%date, %time, timezone = %tz.name(), "skipping nonexistent wall time");
                }
            }
        }

        slots
    }

    /// Returns true if the intervals are sorted, disjoint and non-adjacent.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|pair| pair[0].to() < pair[1].from())
    }
}

/// The kinds of scheduling window an organizer can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A single calendar date.
    SpecificDate,
    /// A range of calendar dates.
    DateRange,
    /// Any day; only the time of day matters.
    Day,
    /// Any day of the week; time of day and weekday matter.
    Week,
}

impl FromStr for EventKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SpecificDate" => Ok(Self::SpecificDate),
            "DateRange" => Ok(Self::DateRange),
            "Day" => Ok(Self::Day),
            "Week" => Ok(Self::Week),
            _ => Err(DomainError::UnsupportedEventKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl EventKind {
    /// Converts this kind to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SpecificDate => "SpecificDate",
            Self::DateRange => "DateRange",
            Self::Day => "Day",
            Self::Week => "Week",
        }
    }
}

/// A scheduling window, with dates already expressed in the canonical timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowDescriptor {
    /// One calendar date.
    SpecificDate(NaiveDate),
    /// Calendar dates from `from` up to, but not including, `to`.
    DateRange {
        /// First date shown.
        from: NaiveDate,
        /// Date after the last date shown.
        to: NaiveDate,
    },
    /// A single representative day.
    RecurringDay,
    /// Seven representative days, one per weekday.
    RecurringWeek,
}

impl WindowDescriptor {
    /// Returns the event kind this descriptor was created from.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::SpecificDate(_) => EventKind::SpecificDate,
            Self::DateRange { .. } => EventKind::DateRange,
            Self::RecurringDay => EventKind::Day,
            Self::RecurringWeek => EventKind::Week,
        }
    }

    /// Returns true for windows whose calendar date carries no meaning.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        matches!(self, Self::RecurringDay | Self::RecurringWeek)
    }
}
