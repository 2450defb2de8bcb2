// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod format;
mod grid;
mod heatmap;
mod interval_set;
mod slot;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use format::{format_duration, format_slot_time, format_time_of_day, to_hours_and_minutes};
pub use grid::{
    ANY_DAY_LABEL, DAYS_PER_WEEK, anchor_date, day_count, day_label, generate_days,
    recurring_anchor,
};
pub use heatmap::{
    COLD_HUE, CellShade, Heatmap, OccupancyEntry, Submission, cell_shade, intensity, tooltip_text,
};
pub use interval_set::AddOutcome;
pub use slot::{
    Instant, MINUTES_PER_DAY, SLOT_MINUTES, SLOTS_PER_DAY, ceil_to_slot, fits_in_day, floor_to_slot,
    is_slot_aligned, minutes_into_day, resolve_local, slot_duration, slot_time_of_day,
    start_of_local_day, validate_duration,
};
pub use types::{Day, EventKind, Interval, WindowDescriptor};
