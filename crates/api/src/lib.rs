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
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    DEFAULT_SNOWFLAKE_LENGTH, MAX_DATE_RANGE_DAYS, MAX_USER_NAME_CHARS, build_heatmap,
    build_submission, create_event, descriptor_from_event, ensure_not_already_submitted,
    generate_snowflake_id, parse_event_kind, session_for_event, tooltip_for, validate_new_event,
};
pub use request_response::{
    AvailabilityDto, CreateAvailabilitiesDto, CreateAvailabilityDto, CreateEventDto, ErrorDto,
    EventDto, ResponseEnvelope,
};
