// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary operations between service payloads and the scheduling core.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use findtime::Session;
use findtime_domain::{
    EventKind, Heatmap, Instant, Interval, Submission, WindowDescriptor, tooltip_text,
    validate_duration,
};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AvailabilityDto, CreateAvailabilitiesDto, CreateAvailabilityDto, CreateEventDto, EventDto,
};

/// Longest display name the service accepts, in characters.
pub const MAX_USER_NAME_CHARS: usize = 100;

/// Longest date range an organizer may offer, in days.
pub const MAX_DATE_RANGE_DAYS: i64 = 14;

/// Default length of a generated event identifier.
pub const DEFAULT_SNOWFLAKE_LENGTH: usize = 10;

const SNOWFLAKE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Parses the wire name of an event kind.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for `Month` and any unknown kind.
pub fn parse_event_kind(value: &str) -> Result<EventKind, ApiError> {
    EventKind::from_str(value).map_err(|err| {
        warn!(event_type = value, "rejected event kind");
        translate_domain_error(err)
    })
}

/// Builds the window descriptor of an event in `timezone`.
///
/// `from_date` and `to_date` are converted into `timezone` once, and only
/// their local calendar dates are kept.
///
/// # Errors
///
/// Returns an error if:
/// - The event kind is unsupported
/// - A dated kind is missing a date it needs
/// - `to_date` falls on a date before `from_date`
pub fn descriptor_from_event(
    event: &EventDto,
    timezone: &Tz,
) -> Result<WindowDescriptor, ApiError> {
    let kind: EventKind = parse_event_kind(&event.event_type)?;

    let descriptor: WindowDescriptor = match kind {
        EventKind::SpecificDate => WindowDescriptor::SpecificDate(required_local_date(
            event.from_date,
            "from_date",
            timezone,
        )?),
        EventKind::DateRange => {
            let from: NaiveDate = required_local_date(event.from_date, "from_date", timezone)?;
            let to: NaiveDate = required_local_date(event.to_date, "to_date", timezone)?;
            if to < from {
                return Err(ApiError::InvalidInput {
                    field: String::from("to_date"),
                    message: format!("Date range ends on {to}, before it starts on {from}"),
                });
            }
            WindowDescriptor::DateRange { from, to }
        }
        EventKind::Day => WindowDescriptor::RecurringDay,
        EventKind::Week => WindowDescriptor::RecurringWeek,
    };

    debug!(
        snowflake_id = %event.snowflake_id,
        ?descriptor,
        %timezone,
        "resolved event window"
    );

    Ok(descriptor)
}

/// Checks an organizer's new event against the creation rules.
///
/// Dates are compared as calendar dates in `timezone`, against `today`
/// in that same timezone.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if:
/// - The name is empty after trimming
/// - The event kind is unsupported
/// - The duration is not a positive multiple of 30 minutes up to one day
/// - A specific date lies in the past
/// - A date range starts in the past, or does not span 1 to 14 days
pub fn validate_new_event(
    event: &CreateEventDto,
    today: NaiveDate,
    timezone: &Tz,
) -> Result<(), ApiError> {
    if event.name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Event name must not be empty"),
        });
    }

    let kind: EventKind = parse_event_kind(&event.event_type)?;
    validate_duration(event.duration)?;

    match kind {
        EventKind::SpecificDate => {
            let date: NaiveDate = required_local_date(event.from_date, "from_date", timezone)?;
            ensure_not_past(date, today, "from_date")?;
        }
        EventKind::DateRange => {
            let from: NaiveDate = required_local_date(event.from_date, "from_date", timezone)?;
            let to: NaiveDate = required_local_date(event.to_date, "to_date", timezone)?;
            ensure_not_past(from, today, "from_date")?;

            let span: i64 = (to - from).num_days();
            if !(1..=MAX_DATE_RANGE_DAYS).contains(&span) {
                return Err(ApiError::InvalidInput {
                    field: String::from("to_date"),
                    message: format!(
                        "Date range spans {span} day(s). Must be between 1 and {MAX_DATE_RANGE_DAYS}"
                    ),
                });
            }
        }
        EventKind::Day | EventKind::Week => {}
    }

    Ok(())
}

/// Validates a new event and assigns it a fresh identifier.
///
/// Recurring kinds drop any dates they were given. The name is trimmed.
///
/// # Errors
///
/// Returns an error if the event fails `validate_new_event`.
pub fn create_event(
    event: CreateEventDto,
    today: NaiveDate,
    timezone: &Tz,
    id_length: usize,
) -> Result<EventDto, ApiError> {
    validate_new_event(&event, today, timezone)?;
    let kind: EventKind = parse_event_kind(&event.event_type)?;

    let (from_date, to_date): (Option<DateTime<Utc>>, Option<DateTime<Utc>>) = match kind {
        EventKind::SpecificDate => (event.from_date, None),
        EventKind::DateRange => (event.from_date, event.to_date),
        EventKind::Day | EventKind::Week => (None, None),
    };

    let created: EventDto = EventDto {
        snowflake_id: generate_snowflake_id(id_length),
        name: event.name.trim().to_string(),
        description: event.description,
        from_date,
        to_date,
        event_type: kind.as_str().to_string(),
        duration: event.duration,
    };

    debug!(
        snowflake_id = %created.snowflake_id,
        kind = %kind,
        duration = created.duration,
        "created event"
    );

    Ok(created)
}

/// Generates a random alphanumeric event identifier of `length` characters.
#[must_use]
pub fn generate_snowflake_id(length: usize) -> String {
    (0..length)
        .map(|_| {
            let index: usize = rand::random_range(0..SNOWFLAKE_ALPHABET.len());
            char::from(SNOWFLAKE_ALPHABET[index])
        })
        .collect()
}

/// Opens an editing session for `event` in `timezone`.
///
/// # Errors
///
/// Returns an error if the event window is invalid or its duration is
/// not a positive multiple of 30 minutes up to one day.
pub fn session_for_event(event: &EventDto, timezone: Tz) -> Result<Session, ApiError> {
    let descriptor: WindowDescriptor = descriptor_from_event(event, &timezone)?;
    Ok(Session::new(descriptor, timezone, event.duration)?)
}

/// Builds the availability heatmap from the event's roster.
#[must_use]
pub fn build_heatmap(roster: &[AvailabilityDto], timezone: Tz) -> Heatmap {
    let submissions: Vec<Submission> = roster.iter().map(Submission::from).collect();
    Heatmap::build(&submissions, timezone)
}

/// Returns the tooltip for the slot containing `instant`.
#[must_use]
pub fn tooltip_for(heatmap: &Heatmap, instant: Instant) -> Option<String> {
    tooltip_text(heatmap.names_at(instant))
}

/// Builds this respondent's submission from their session.
///
/// Only days that accept input contribute, in calendar order.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if:
/// - The name is empty after trimming or longer than 100 characters
/// - Nothing was selected
pub fn build_submission(
    session: &Session,
    user_name: &str,
    user_email: Option<&str>,
) -> Result<CreateAvailabilitiesDto, ApiError> {
    let user_name: &str = validate_user_name(user_name)?;

    let intervals: Vec<Interval> = session.submission_payload();
    if intervals.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("availabilities"),
            message: String::from("Select at least one time before submitting"),
        });
    }

    let user_email: Option<String> = user_email
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(ToString::to_string);

    debug!(
        user_name,
        spans = intervals.len(),
        "built availability submission"
    );

    Ok(CreateAvailabilitiesDto {
        availabilities: intervals
            .into_iter()
            .map(CreateAvailabilityDto::from)
            .collect(),
        user_email,
        user_name: user_name.to_string(),
    })
}

/// Rejects a respondent whose name already appears in the roster.
///
/// Names are compared after trimming, case-sensitively.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if `user_name` already submitted.
pub fn ensure_not_already_submitted(
    roster: &[AvailabilityDto],
    user_name: &str,
) -> Result<(), ApiError> {
    let user_name: &str = user_name.trim();
    if roster
        .iter()
        .any(|availability| availability.user_name.trim() == user_name)
    {
        warn!(user_name, "repeat submission refused");
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("single_submission"),
            message: format!("'{user_name}' has already submitted availability for this event"),
        });
    }
    Ok(())
}

fn validate_user_name(user_name: &str) -> Result<&str, ApiError> {
    let trimmed: &str = user_name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("user_name"),
            message: String::from("Name must not be empty"),
        });
    }
    let length: usize = trimmed.chars().count();
    if length > MAX_USER_NAME_CHARS {
        return Err(ApiError::InvalidInput {
            field: String::from("user_name"),
            message: format!(
                "Name is {length} characters long. Must be at most {MAX_USER_NAME_CHARS}"
            ),
        });
    }
    Ok(trimmed)
}

fn ensure_not_past(date: NaiveDate, today: NaiveDate, field: &str) -> Result<(), ApiError> {
    if date < today {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{date} is in the past"),
        });
    }
    Ok(())
}

fn required_local_date(
    value: Option<DateTime<Utc>>,
    field: &str,
    timezone: &Tz,
) -> Result<NaiveDate, ApiError> {
    value
        .map(|instant| instant.with_timezone(timezone).date_naive())
        .ok_or_else(|| ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} is required for this event type"),
        })
}
