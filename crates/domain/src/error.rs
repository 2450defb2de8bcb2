// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::slot::Instant;

/// Errors that can occur while building or mutating the availability model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An interval was requested whose start is not before its end.
    InvalidInterval {
        /// The requested start.
        from: Instant,
        /// The requested end.
        to: Instant,
    },
    /// An instant does not fall on a half-hour boundary of the canonical timezone.
    MisalignedInstant {
        /// The offending instant.
        instant: Instant,
    },
    /// A selection duration is zero or not a whole number of slots.
    InvalidDuration {
        /// The requested duration in minutes.
        minutes: u32,
    },
    /// The event kind is unknown or not supported.
    UnsupportedEventKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval { from, to } => {
                write!(
                    f,
                    "Invalid interval: start {} must be before end {}",
                    from.to_rfc3339(),
                    to.to_rfc3339()
                )
            }
            Self::MisalignedInstant { instant } => {
                write!(
                    f,
                    "Instant {} is not aligned to a 30 minute slot",
                    instant.to_rfc3339()
                )
            }
            Self::InvalidDuration { minutes } => {
                write!(
                    f,
                    "Invalid duration: {minutes} minutes. Must be a positive multiple of 30"
                )
            }
            Self::UnsupportedEventKind(kind) => {
                write!(f, "Unsupported event kind: {kind}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
