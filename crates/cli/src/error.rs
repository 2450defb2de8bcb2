// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use findtime_api::ApiError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Invalid click '{input}': {reason}")]
    InvalidClick { input: String, reason: String },

    #[error("Day {day} has no {time} in this timezone")]
    NonexistentTime { day: usize, time: String },
}

impl From<findtime::CoreError> for CliError {
    fn from(err: findtime::CoreError) -> Self {
        Self::Api(ApiError::from(err))
    }
}
