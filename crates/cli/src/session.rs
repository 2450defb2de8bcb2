// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Replaying clicks against an editing session.

use crate::error::CliError;
use crate::input::Click;
use chrono_tz::Tz;
use findtime::{Command, CoreError, Session, TransitionResult, apply};
use findtime_domain::{Day, Instant, resolve_local};
use tracing::debug;

/// Resolves a click to the command the picker would issue.
///
/// # Errors
///
/// Returns an error if the column does not exist or the wall time does
/// not exist on that day.
pub fn click_command(session: &Session, click: Click) -> Result<Command, CliError> {
    let timezone: Tz = session.timezone();
    let day: &Day = session.day(click.day).ok_or(CoreError::DayNotFound {
        index: click.day,
        day_count: session.days().len(),
    })?;

    let instant: Instant = resolve_local(day.local_date(&timezone).and_time(click.time), &timezone)
        .ok_or_else(|| CliError::NonexistentTime {
            day: click.day,
            time: click.time.format("%H:%M").to_string(),
        })?;

    Ok(Command::from_click(click.day, instant, click.is_removal))
}

/// Applies every click in order and returns the resulting session.
///
/// # Errors
///
/// Returns the first click that cannot be resolved or applied.
pub fn replay_clicks(session: &Session, clicks: &[Click]) -> Result<Session, CliError> {
    clicks.iter().try_fold(session.clone(), |current, click| -> Result<Session, CliError> {
        let command: Command = click_command(&current, *click)?;
        let transition: TransitionResult = apply(&current, command)?;
        debug!(
            day = click.day,
            time = %click.time,
            changed = transition.effect.changed(),
            "replayed click"
        );
        Ok(transition.new_session)
    })
}
