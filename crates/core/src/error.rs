// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use findtime_domain::{DomainError, Instant};

/// Errors that can occur while applying a command to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command referenced a day the session does not have.
    DayNotFound {
        /// The requested day index.
        index: usize,
        /// The number of days in the session.
        day_count: usize,
    },
    /// The command targeted a day shown only because of a timezone shift.
    DayDisabled {
        /// The day index.
        index: usize,
    },
    /// The instant does not belong to the targeted day.
    InstantOutsideDay {
        /// The day index.
        index: usize,
        /// The offending instant.
        instant: Instant,
    },
    /// A selection starting at `instant` would run past midnight.
    SlotOverflowsDay {
        /// The requested start.
        instant: Instant,
        /// The event duration in minutes.
        duration_minutes: u32,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::DayNotFound { index, day_count } => {
                write!(f, "Day {index} not found: session has {day_count} day(s)")
            }
            Self::DayDisabled { index } => {
                write!(f, "Day {index} is disabled and cannot be edited")
            }
            Self::InstantOutsideDay { index, instant } => {
                write!(
                    f,
                    "Instant {} does not belong to day {index}",
                    instant.to_rfc3339()
                )
            }
            Self::SlotOverflowsDay {
                instant,
                duration_minutes,
            } => {
                write!(
                    f,
                    "A {duration_minutes} minute selection starting at {} would end after midnight",
                    instant.to_rfc3339()
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
