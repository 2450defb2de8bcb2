// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::session::{Effect, Session, TransitionResult};
use chrono_tz::Tz;
use findtime_domain::{AddOutcome, Day, DomainError, Instant, fits_in_day, is_slot_aligned};
use tracing::debug;

/// Applies a command to a session, producing a new session.
///
/// Commands are applied strictly one at a time, so each sees the state
/// left by the previous one.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session and the command's effect
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The day index does not exist
/// - The day is disabled
/// - The instant is not on a slot boundary or not on the targeted day
/// - A selection would run past midnight
pub fn apply(session: &Session, command: Command) -> Result<TransitionResult, CoreError> {
    let index: usize = command.day();
    let instant: Instant = command.instant();
    let timezone: Tz = session.timezone();
    let duration_minutes: u32 = session.duration_minutes();

    let day: &Day = session.day(index).ok_or(CoreError::DayNotFound {
        index,
        day_count: session.days().len(),
    })?;
    validate_target(day, index, instant, &timezone)?;

    let mut new_session: Session = session.clone();
    let target: &mut Day = new_session.day_mut(index).ok_or(CoreError::DayNotFound {
        index,
        day_count: session.days().len(),
    })?;

    let effect: Effect = match command {
        Command::Select { .. } => {
            if !fits_in_day(instant, duration_minutes, &timezone) {
                return Err(CoreError::SlotOverflowsDay {
                    instant,
                    duration_minutes,
                });
            }
            let outcome: AddOutcome = target.add(instant, duration_minutes)?;
            Effect::Added(outcome)
        }
        Command::Deselect { .. } => {
            if target.remove(instant) {
                Effect::Removed
            } else {
                Effect::NothingToRemove
            }
        }
    };

    debug!(
        command = command.name(),
        day = index,
        %instant,
        ?effect,
        intervals = target.intervals().len(),
        "applied command"
    );

    Ok(TransitionResult {
        new_session,
        effect,
    })
}

/// Applies commands in order, stopping at the first error.
///
/// # Errors
///
/// Returns the first command error encountered.
pub fn apply_all<I>(session: &Session, commands: I) -> Result<Session, CoreError>
where
    I: IntoIterator<Item = Command>,
{
    commands
        .into_iter()
        .try_fold(session.clone(), |current, command| {
            apply(&current, command).map(|transition| transition.new_session)
        })
}

fn validate_target(
    day: &Day,
    index: usize,
    instant: Instant,
    timezone: &Tz,
) -> Result<(), CoreError> {
    if day.is_disabled() {
        return Err(CoreError::DayDisabled { index });
    }

    if !is_slot_aligned(instant, timezone) {
        return Err(CoreError::DomainViolation(DomainError::MisalignedInstant {
            instant,
        }));
    }

    if instant.with_timezone(timezone).date_naive() != day.local_date(timezone) {
        return Err(CoreError::InstantOutsideDay { index, instant });
    }

    Ok(())
}
