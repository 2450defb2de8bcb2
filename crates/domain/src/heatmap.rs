// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-respondent occupancy per half-hour slot.
//!
//! The heatmap is built once from every other respondent's submitted spans
//! and is read-only afterwards. The local respondent's edits never change it.
//!
//! ## Invariants
//!
//! - Every recorded instant is a slot boundary of the canonical timezone
//! - A span records both its start and its end slot (inclusive bounds)
//! - A name appears at most once per slot
//! - `max_number_of_respondents` equals the largest entry size

use crate::slot::{Instant, ceil_to_slot, floor_to_slot, slot_duration};
use chrono_tz::Tz;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Largest hue used for heat colouring (blue, least popular).
pub const COLD_HUE: f64 = 240.0;

/// One respondent's contiguous availability span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Start of the span.
    pub from: Instant,
    /// End of the span.
    pub to: Instant,
    /// The respondent's display name.
    pub user_name: String,
}

impl Submission {
    /// Creates a new submission.
    #[must_use]
    pub fn new(from: Instant, to: Instant, user_name: impl Into<String>) -> Self {
        Self {
            from,
            to,
            user_name: user_name.into(),
        }
    }
}

/// The respondents available at one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyEntry {
    names: Vec<String>,
}

impl OccupancyEntry {
    /// Returns the names in the order they were first recorded.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of respondents available.
    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Returns true if `name` was recorded for this slot.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|recorded| recorded == name)
    }

    fn record(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }
}

/// Occupancy per quantized instant, plus the peak count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap {
    timezone: Tz,
    entries: BTreeMap<Instant, OccupancyEntry>,
    max_number_of_respondents: usize,
}

impl Heatmap {
    /// Creates a heatmap with no recorded availability.
    #[must_use]
    pub const fn empty(timezone: Tz) -> Self {
        Self {
            timezone,
            entries: BTreeMap::new(),
            max_number_of_respondents: 0,
        }
    }

    /// Builds the heatmap from every respondent's submitted spans.
    ///
    /// For each span, every slot boundary `t` with `from <= t <= to` is
    /// recorded under the span's name, including the slot the span ends on.
    ///
    /// # Arguments
    ///
    /// * `submissions` - All spans reported for the event
    /// * `timezone` - The canonical timezone used for slot boundaries
    #[must_use]
    pub fn build<'a, I>(submissions: I, timezone: Tz) -> Self
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        let mut heatmap: Self = Self::empty(timezone);
        let mut span_count: usize = 0;

        for submission in submissions {
            span_count += 1;

            if submission.to < submission.from {
                warn!(
                    user_name = %submission.user_name,
                    from = %submission.from,
                    to = %submission.to,
                    "ignoring span that ends before it starts"
                );
                continue;
            }

            let mut slot: Instant = ceil_to_slot(submission.from, &timezone);
            while slot <= submission.to {
                let entry: &mut OccupancyEntry = heatmap.entries.entry(slot).or_default();
                entry.record(&submission.user_name);
                heatmap.max_number_of_respondents =
                    heatmap.max_number_of_respondents.max(entry.count());
                slot += slot_duration();
            }
        }

        debug!(
            spans = span_count,
            slots = heatmap.entries.len(),
            max_number_of_respondents = heatmap.max_number_of_respondents,
            "built availability heatmap"
        );

        heatmap
    }

    /// Returns the timezone slot boundaries are measured in.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the names available at the slot containing `instant`.
    ///
    /// Returns an empty slice if nobody is available.
    #[must_use]
    pub fn names_at(&self, instant: Instant) -> &[String] {
        match self.entry_at(instant) {
            Some(entry) => entry.names(),
            None => &[],
        }
    }

    /// Returns the number of respondents available at the slot containing `instant`.
    #[must_use]
    pub fn count_at(&self, instant: Instant) -> usize {
        self.entry_at(instant).map_or(0, OccupancyEntry::count)
    }

    /// Returns the occupancy entry for the slot containing `instant`.
    #[must_use]
    pub fn entry_at(&self, instant: Instant) -> Option<&OccupancyEntry> {
        self.entries.get(&floor_to_slot(instant, &self.timezone))
    }

    /// Returns the largest number of respondents available at any one slot.
    #[must_use]
    pub const fn max_number_of_respondents(&self) -> usize {
        self.max_number_of_respondents
    }

    /// Returns true if no availability was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every occupied slot, most popular first.
    ///
    /// Slots with equal counts are ordered chronologically.
    #[must_use]
    pub fn ranked_slots(&self) -> Vec<(Instant, &OccupancyEntry)> {
        let mut ranked: Vec<(Instant, &OccupancyEntry)> = self
            .entries
            .iter()
            .map(|(instant, entry)| (*instant, entry))
            .collect();
        ranked.sort_by(|(a_instant, a_entry), (b_instant, b_entry)| {
            b_entry
                .count()
                .cmp(&a_entry.count())
                .then_with(|| a_instant.cmp(b_instant))
        });
        ranked
    }

    /// Returns the slots at which the maximum number of respondents is available.
    #[must_use]
    pub fn peak_slots(&self) -> Vec<Instant> {
        if self.max_number_of_respondents == 0 {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|(_, entry)| entry.count() == self.max_number_of_respondents)
            .map(|(instant, _)| *instant)
            .collect()
    }
}

/// Share of the peak that `count` represents, in `(0, 1]`.
///
/// Returns `None` when either value is zero so callers can render a
/// neutral cell.
#[must_use]
pub fn intensity(count: usize, max_number_of_respondents: usize) -> Option<f64> {
    if count == 0 || max_number_of_respondents == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio: f64 = count as f64 / max_number_of_respondents as f64;
    Some(ratio.min(1.0))
}

/// How a picker cell should be shaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellShade {
    /// The day is a timezone-shift artifact.
    Disabled,
    /// The local respondent selected this slot.
    Selected,
    /// Others are available; `hue` runs from 240 (few) down to 0 (everyone).
    Heat {
        /// HSL hue in degrees.
        hue: f64,
    },
    /// Nobody is available and nothing is selected.
    Neutral,
}

impl CellShade {
    /// Renders the shade as a CSS colour, or `None` to inherit the background.
    #[must_use]
    pub fn css(&self) -> Option<String> {
        match self {
            Self::Disabled => Some(String::from("#222222")),
            Self::Selected => Some(String::from("#338822")),
            Self::Heat { hue } => Some(format!("hsl({hue:.0}, 75%, 35%)")),
            Self::Neutral => None,
        }
    }
}

/// Chooses the shade of a picker cell.
///
/// Disabled days win over selection, and selection wins over heat.
#[must_use]
pub fn cell_shade(
    selected: bool,
    disabled: bool,
    count: usize,
    max_number_of_respondents: usize,
) -> CellShade {
    if disabled {
        return CellShade::Disabled;
    }
    if selected {
        return CellShade::Selected;
    }
    intensity(count, max_number_of_respondents).map_or(CellShade::Neutral, |share| {
        CellShade::Heat {
            hue: (1.0 - share) * COLD_HUE,
        }
    })
}

/// Tooltip text listing who is available, or `None` if nobody is.
#[must_use]
pub fn tooltip_text(names: &[String]) -> Option<String> {
    match names.len() {
        0 => None,
        1 => Some(format!(
            "1 person has marked this time as available: {}",
            names.join(", ")
        )),
        count => Some(format!(
            "{count} people have marked this time as available: {}",
            names.join(", ")
        )),
    }
}
