// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use findtime_domain::Instant;

/// A respondent's intent on one picker cell, as data only.
///
/// Commands are the only way to change a session's selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select one event duration starting at `instant`.
    Select {
        /// Index of the day in the session.
        day: usize,
        /// Start of the clicked slot.
        instant: Instant,
    },
    /// Erase the selection that contains `instant`.
    Deselect {
        /// Index of the day in the session.
        day: usize,
        /// Start of the clicked slot.
        instant: Instant,
    },
}

impl Command {
    /// Builds a command from a pointer event on a cell.
    ///
    /// # Arguments
    ///
    /// * `day` - Index of the day column
    /// * `instant` - Start of the clicked slot
    /// * `is_removal` - Whether the secondary button was used
    #[must_use]
    pub const fn from_click(day: usize, instant: Instant, is_removal: bool) -> Self {
        if is_removal {
            Self::Deselect { day, instant }
        } else {
            Self::Select { day, instant }
        }
    }

    /// Returns the targeted day index.
    #[must_use]
    pub const fn day(&self) -> usize {
        match self {
            Self::Select { day, .. } | Self::Deselect { day, .. } => *day,
        }
    }

    /// Returns the targeted slot instant.
    #[must_use]
    pub const fn instant(&self) -> Instant {
        match self {
            Self::Select { instant, .. } | Self::Deselect { instant, .. } => *instant,
        }
    }

    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Select { .. } => "Select",
            Self::Deselect { .. } => "Deselect",
        }
    }
}
