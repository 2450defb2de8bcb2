// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading service payloads and click arguments.

use crate::error::CliError;
use chrono::NaiveTime;
use chrono_tz::Tz;
use findtime_api::ResponseEnvelope;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One simulated click on the picker grid.
///
/// Written as `DAY@HH:MM`, where `DAY` is the zero-based column index.
/// A leading `-` marks a secondary-button click, which erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub day: usize,
    pub time: NaiveTime,
    pub is_removal: bool,
}

impl FromStr for Click {
    type Err = CliError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CliError::InvalidClick {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (is_removal, rest): (bool, &str) = input
            .strip_prefix('-')
            .map_or((false, input), |rest| (true, rest));
        let (day, time): (&str, &str) = rest
            .split_once('@')
            .ok_or_else(|| invalid("expected DAY@HH:MM"))?;
        let day: usize = day
            .trim()
            .parse()
            .map_err(|_| invalid("day must be a column index"))?;
        let time: NaiveTime = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|_| invalid("time must be HH:MM"))?;

        Ok(Self {
            day,
            time,
            is_removal,
        })
    }
}

/// Parses a click for clap.
pub fn parse_click(input: &str) -> Result<Click, String> {
    Click::from_str(input).map_err(|err| err.to_string())
}

/// Parses an IANA timezone id for clap.
pub fn parse_timezone(id: &str) -> Result<Tz, String> {
    Tz::from_str(id).map_err(|_| format!("unknown timezone '{id}'"))
}

/// Reads a JSON payload from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold `T`.
pub fn read_payload<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text: String = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read payload");
    parse_payload(&text)
}

/// Parses a payload that is either bare or wrapped in a response envelope.
///
/// A top-level object with a `result` or `error` key is an envelope.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON for `T`, or if the
/// envelope reports a service error.
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, CliError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let is_envelope: bool = value
        .as_object()
        .is_some_and(|object| object.contains_key("result") || object.contains_key("error"));

    if is_envelope {
        let envelope: ResponseEnvelope<T> = serde_json::from_value(value)?;
        Ok(envelope.into_result()?)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}
