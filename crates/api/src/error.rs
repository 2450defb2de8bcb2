// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use findtime::CoreError;
use findtime_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A request field was missing or malformed.
    InvalidInput {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },
    /// The request was well formed but broke a scheduling rule.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description.
        message: String,
    },
    /// The service answered with an error envelope.
    Remote {
        /// The message reported by the service.
        message: String,
    },
    /// An unexpected internal error occurred.
    Internal {
        /// A description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Rule violation '{rule}': {message}")
            }
            Self::Remote { message } => {
                write!(f, "Service error: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidInterval { .. } => ApiError::InvalidInput {
            field: String::from("availabilities"),
            message: err.to_string(),
        },
        DomainError::MisalignedInstant { .. } => ApiError::InvalidInput {
            field: String::from("instant"),
            message: err.to_string(),
        },
        DomainError::InvalidDuration { .. } => ApiError::InvalidInput {
            field: String::from("duration"),
            message: err.to_string(),
        },
        DomainError::UnsupportedEventKind(_) => ApiError::InvalidInput {
            field: String::from("event_type"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::DayNotFound { .. } => ApiError::InvalidInput {
            field: String::from("day"),
            message: err.to_string(),
        },
        CoreError::DayDisabled { .. } => ApiError::DomainRuleViolation {
            rule: String::from("disabled_day"),
            message: err.to_string(),
        },
        CoreError::InstantOutsideDay { .. } => ApiError::InvalidInput {
            field: String::from("instant"),
            message: err.to_string(),
        },
        CoreError::SlotOverflowsDay { .. } => ApiError::DomainRuleViolation {
            rule: String::from("selection_within_day"),
            message: err.to_string(),
        },
    }
}
