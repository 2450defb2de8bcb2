// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Merge and delete algebra for a day's selections.
//!
//! ## Invariants
//!
//! - After every mutation a day's intervals are sorted, pairwise disjoint,
//!   and no interval's end equals another's start
//! - Merging removes exactly the intervals it absorbs and inserts one new value
//! - Removal deletes one whole interval, never a sub-range

use crate::error::DomainError;
use crate::slot::Instant;
use crate::types::{Day, Interval};
use chrono::Duration;
use tracing::debug;

/// What `Day::add` did with a candidate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// One existing interval already covered the candidate. Nothing changed.
    AlreadyCovered,
    /// The candidate joined two existing intervals into one.
    Bridged,
    /// The candidate started inside an existing interval and lengthened it.
    ExtendedForward,
    /// The candidate ended inside an existing interval and moved its start earlier.
    ExtendedBackward,
    /// The candidate touched nothing and was inserted as is.
    Inserted,
}

impl AddOutcome {
    /// Returns true if the day's intervals changed.
    #[must_use]
    pub const fn changed(&self) -> bool {
        !matches!(self, Self::AlreadyCovered)
    }
}

impl Day {
    /// Selects `duration_minutes` of time starting at `instant`.
    ///
    /// The candidate `[instant, instant + duration)` is matched against the
    /// existing intervals inclusively on both ends, then placed by the first
    /// case that applies:
    ///
    /// 1. one interval covers both ends: no change
    /// 2. two different intervals cover the two ends: both are replaced by
    ///    one interval spanning them
    /// 3. only the start is covered: that interval is lengthened to the
    ///    candidate's end
    /// 4. only the end is covered: that interval's start moves back to the
    ///    candidate's start
    /// 5. otherwise the candidate is inserted
    ///
    /// Intervals lying wholly inside the result are absorbed into it.
    ///
    /// Keeping `instant + duration` within the day is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` if `duration_minutes` is zero.
    pub fn add(
        &mut self,
        instant: Instant,
        duration_minutes: u32,
    ) -> Result<AddOutcome, DomainError> {
        if duration_minutes == 0 {
            return Err(DomainError::InvalidDuration {
                minutes: duration_minutes,
            });
        }

        let candidate: Interval = Interval::new(
            instant,
            instant + Duration::minutes(i64::from(duration_minutes)),
        )?;

        let covering_from: Option<Interval> = self
            .intervals
            .iter()
            .copied()
            .find(|existing| existing.touches(candidate.from()));
        let covering_to: Option<Interval> = self
            .intervals
            .iter()
            .copied()
            .find(|existing| existing.touches(candidate.to()));

        let (merged, outcome): (Interval, AddOutcome) = match (covering_from, covering_to) {
            (Some(start), Some(end)) if start == end => {
                debug!(
                    from = %candidate.from(),
                    to = %candidate.to(),
                    "selection already covered"
                );
                return Ok(AddOutcome::AlreadyCovered);
            }
            (Some(start), Some(end)) => (start.hull(&end), AddOutcome::Bridged),
            (Some(start), None) => (start.hull(&candidate), AddOutcome::ExtendedForward),
            (None, Some(end)) => (candidate.hull(&end), AddOutcome::ExtendedBackward),
            (None, None) => (candidate, AddOutcome::Inserted),
        };

        let (absorbed, kept): (Vec<Interval>, Vec<Interval>) = self
            .intervals
            .iter()
            .copied()
            .partition(|existing| existing.overlaps_or_touches(&merged));
        let merged: Interval = absorbed
            .iter()
            .fold(merged, |acc, existing| acc.hull(existing));

        self.intervals = kept;
        let position: usize = self
            .intervals
            .partition_point(|existing| existing.from() < merged.from());
        self.intervals.insert(position, merged);

        debug!(
            ?outcome,
            from = %merged.from(),
            to = %merged.to(),
            absorbed = absorbed.len(),
            "selection added"
        );
        debug_assert!(self.is_normalized());

        Ok(outcome)
    }

    /// Deletes the whole interval containing `instant`.
    ///
    /// Containment is half-open, so an interval's end does not match.
    ///
    /// # Returns
    ///
    /// `true` if an interval was deleted, `false` if none contained `instant`.
    pub fn remove(&mut self, instant: Instant) -> bool {
        let Some(position) = self
            .intervals
            .iter()
            .position(|existing| existing.contains(instant))
        else {
            return false;
        };

        let removed: Interval = self.intervals.remove(position);
        debug!(
            from = %removed.from(),
            to = %removed.to(),
            "selection removed"
        );

        true
    }

    /// Returns true if `instant` lies inside one of the day's selections.
    #[must_use]
    pub fn is_selected(&self, instant: Instant) -> bool {
        self.intervals
            .iter()
            .any(|existing| existing.contains(instant))
    }
}
