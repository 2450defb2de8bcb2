// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire shapes exchanged with the scheduling service.
//!
//! All instants are RFC 3339 in UTC. Field names are snake_case.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use findtime_domain::{Interval, Submission};

/// An organizer's request to create an event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateEventDto {
    /// The event's display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First day of the window, for dated kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    /// End of the window, for date ranges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
    /// One of `SpecificDate`, `DateRange`, `Day` or `Week`.
    pub event_type: String,
    /// Length of the event in minutes.
    pub duration: u32,
}

/// An event as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventDto {
    /// The public identifier of the event.
    pub snowflake_id: String,
    /// The event's display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First day of the window, for dated kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    /// End of the window, for date ranges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
    /// One of `SpecificDate`, `DateRange`, `Day` or `Week`.
    pub event_type: String,
    /// Length of the event in minutes.
    pub duration: u32,
}

/// One availability span already submitted by a respondent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityDto {
    /// Row identifier.
    pub id: i64,
    /// Start of the span.
    pub from_date: DateTime<Utc>,
    /// End of the span.
    pub to_date: DateTime<Utc>,
    /// The respondent's display name.
    pub user_name: String,
}

impl From<&AvailabilityDto> for Submission {
    fn from(dto: &AvailabilityDto) -> Self {
        Self::new(dto.from_date, dto.to_date, dto.user_name.clone())
    }
}

/// One span of a new submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAvailabilityDto {
    /// Start of the span.
    pub from_date: DateTime<Utc>,
    /// End of the span.
    pub to_date: DateTime<Utc>,
}

impl From<Interval> for CreateAvailabilityDto {
    fn from(interval: Interval) -> Self {
        Self {
            from_date: interval.from(),
            to_date: interval.to(),
        }
    }
}

/// A respondent's complete submission for an event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAvailabilitiesDto {
    /// Every selected span, in calendar order.
    pub availabilities: Vec<CreateAvailabilityDto>,
    /// Optional contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// The respondent's display name.
    pub user_name: String,
}

/// The error half of a service response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorDto {
    /// Human-readable reason.
    pub message: String,
}

/// The service's universal response wrapper.
///
/// Exactly one of `result` and `error` is expected to be present.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResponseEnvelope<T> {
    /// The payload of a successful call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// The failure of an unsuccessful call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDto>,
}

impl<T> ResponseEnvelope<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub const fn success(result: T) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    /// Unwraps the envelope.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Remote` if the service reported an error, and
    /// `ApiError::Internal` if the envelope carries neither half.
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.result, self.error) {
            (_, Some(error)) => Err(ApiError::Remote {
                message: error.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ApiError::Internal {
                message: String::from("response carried neither a result nor an error"),
            }),
        }
    }
}
