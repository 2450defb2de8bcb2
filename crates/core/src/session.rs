// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use chrono_tz::Tz;
use findtime_domain::{
    AddOutcome, Day, EventKind, Interval, WindowDescriptor, day_label, generate_days,
    validate_duration,
};

/// One respondent's editing session for an event.
///
/// A session owns the picker days generated from the event's window and
/// the respondent's selections on them. It lives only until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    descriptor: WindowDescriptor,
    timezone: Tz,
    duration_minutes: u32,
    days: Vec<Day>,
}

impl Session {
    /// Creates a session with empty days generated from `descriptor`.
    ///
    /// # Arguments
    ///
    /// * `descriptor` - The event's window, dates in `timezone`
    /// * `timezone` - The canonical timezone of this session
    /// * `duration_minutes` - Length of the event, selected per click
    ///
    /// # Errors
    ///
    /// Returns an error if `duration_minutes` is zero, not a multiple of
    /// the slot length, or longer than a day.
    pub fn new(
        descriptor: WindowDescriptor,
        timezone: Tz,
        duration_minutes: u32,
    ) -> Result<Self, CoreError> {
        let days: Vec<Day> = generate_days(&descriptor, &timezone);
        Self::from_days(descriptor, timezone, duration_minutes, days)
    }

    /// Creates a session over days prepared by the caller.
    ///
    /// This is used when some days must be marked disabled, for example
    /// partial days produced by a timezone shift.
    ///
    /// # Errors
    ///
    /// Returns an error if `duration_minutes` is invalid.
    pub fn from_days(
        descriptor: WindowDescriptor,
        timezone: Tz,
        duration_minutes: u32,
        days: Vec<Day>,
    ) -> Result<Self, CoreError> {
        validate_duration(duration_minutes)?;
        Ok(Self {
            descriptor,
            timezone,
            duration_minutes,
            days,
        })
    }

    /// Returns the window this session was generated from.
    #[must_use]
    pub const fn descriptor(&self) -> &WindowDescriptor {
        &self.descriptor
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.descriptor.kind()
    }

    /// Returns the canonical timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the length of one selection in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the picker days in calendar order.
    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Returns the day at `index`, if any.
    #[must_use]
    pub fn day(&self, index: usize) -> Option<&Day> {
        self.days.get(index)
    }

    /// Returns the column heading of every day.
    #[must_use]
    pub fn day_labels(&self) -> Vec<String> {
        self.days
            .iter()
            .map(|day| day_label(self.kind(), day, &self.timezone))
            .collect()
    }

    /// Returns true if any interactive day has a selection.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.interactive_days().any(Day::has_selection)
    }

    /// Flattens the selections of every interactive day, in order.
    ///
    /// Disabled days are never included.
    #[must_use]
    pub fn submission_payload(&self) -> Vec<Interval> {
        self.interactive_days()
            .flat_map(|day| day.intervals().iter().copied())
            .collect()
    }

    fn interactive_days(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|day| !day.is_disabled())
    }

    pub(crate) fn day_mut(&mut self, index: usize) -> Option<&mut Day> {
        self.days.get_mut(index)
    }
}

/// What a command did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A selection was placed.
    Added(AddOutcome),
    /// A selection was erased.
    Removed,
    /// Nothing was selected at the clicked slot.
    NothingToRemove,
}

impl Effect {
    /// Returns true if the session's selections changed.
    #[must_use]
    pub const fn changed(&self) -> bool {
        match self {
            Self::Added(outcome) => outcome.changed(),
            Self::Removed => true,
            Self::NothingToRemove => false,
        }
    }
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The session after the command.
    pub new_session: Session,
    /// What the command did.
    pub effect: Effect,
}
