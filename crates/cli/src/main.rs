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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod input;
mod render;
mod session;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use findtime::Session;
use findtime_api::{
    AvailabilityDto, CreateAvailabilitiesDto, CreateEventDto, DEFAULT_SNOWFLAKE_LENGTH, EventDto,
    ResponseEnvelope, build_heatmap, build_submission, create_event, ensure_not_already_submitted,
    session_for_event,
};
use findtime_domain::Heatmap;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::CliError;
use crate::input::{Click, parse_click, parse_timezone, read_payload};
use crate::render::{render_grid, render_grid_html, render_ranking};
use crate::session::replay_clicks;

/// findtime - pick a meeting time from everyone's availability
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// IANA timezone that every slot boundary is measured in
    #[arg(
        short,
        long,
        env = "FINDTIME_TIMEZONE",
        default_value = "UTC",
        value_parser = parse_timezone
    )]
    timezone: Tz,

    /// Log filter, used instead of `RUST_LOG` when given
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Validate a new event and print it as the service would store it
    Create {
        /// Event definition from the organizer (JSON)
        #[arg(short, long)]
        event: PathBuf,

        /// Length of the generated event identifier
        #[arg(
            long,
            env = "FINDTIME_EVENT_UID_SIZE",
            default_value_t = DEFAULT_SNOWFLAKE_LENGTH
        )]
        id_length: usize,
    },

    /// Show the picker grid with everyone's availability
    Grid {
        #[command(flatten)]
        session: SessionArgs,

        /// Render an HTML table instead of text
        #[arg(long)]
        html: bool,
    },

    /// List the slots the most respondents can make
    Heatmap {
        /// Roster of submitted availability (JSON)
        #[arg(short, long)]
        availabilities: PathBuf,

        /// Number of slots to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// Print the submission payload for a set of clicks
    Submit {
        #[command(flatten)]
        session: SessionArgs,

        /// Display name of the respondent
        #[arg(short, long)]
        name: String,

        /// Optional contact address
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
struct SessionArgs {
    /// Event returned by the service (JSON)
    #[arg(short, long)]
    event: PathBuf,

    /// Roster of submitted availability (JSON)
    #[arg(short, long)]
    availabilities: Option<PathBuf>,

    /// Click a slot as `DAY@HH:MM`; prefix with `-` to erase
    #[arg(short, long = "click", value_parser = parse_click, allow_hyphen_values = true)]
    clicks: Vec<Click>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    let filter: tracing_subscriber::EnvFilter = match &args.log_level {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(timezone = %args.timezone.name(), "starting findtime");

    let output: String = run(args.action, args.timezone)?;
    print!("{output}");

    Ok(())
}

fn run(action: Action, timezone: Tz) -> Result<String, CliError> {
    match action {
        Action::Create { event, id_length } => {
            let request: CreateEventDto = read_payload(&event)?;
            let today: NaiveDate = Utc::now().with_timezone(&timezone).date_naive();
            let created: EventDto = create_event(request, today, &timezone, id_length)?;
            info!(
                snowflake_id = %created.snowflake_id,
                event_type = %created.event_type,
                "created event"
            );
            let mut json: String =
                serde_json::to_string_pretty(&ResponseEnvelope::success(created))?;
            json.push('\n');
            Ok(json)
        }
        Action::Grid { session, html } => {
            let (session, roster): (Session, Vec<AvailabilityDto>) =
                open_session(&session, timezone)?;
            let heatmap: Heatmap = build_heatmap(&roster, timezone);
            if html {
                Ok(render_grid_html(&session, &heatmap))
            } else {
                Ok(render_grid(&session, &heatmap))
            }
        }
        Action::Heatmap {
            availabilities,
            top,
        } => {
            let roster: Vec<AvailabilityDto> = read_payload(&availabilities)?;
            let heatmap: Heatmap = build_heatmap(&roster, timezone);
            info!(
                spans = roster.len(),
                max_number_of_respondents = heatmap.max_number_of_respondents(),
                "built heatmap"
            );
            Ok(render_ranking(&heatmap, top))
        }
        Action::Submit {
            session,
            name,
            email,
        } => {
            let (session, roster): (Session, Vec<AvailabilityDto>) =
                open_session(&session, timezone)?;
            ensure_not_already_submitted(&roster, &name)?;
            let submission: CreateAvailabilitiesDto =
                build_submission(&session, &name, email.as_deref())?;
            info!(
                user_name = %submission.user_name,
                spans = submission.availabilities.len(),
                "prepared submission"
            );
            let mut json: String = serde_json::to_string_pretty(&submission)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn open_session(
    args: &SessionArgs,
    timezone: Tz,
) -> Result<(Session, Vec<AvailabilityDto>), CliError> {
    let event: EventDto = read_payload(&args.event)?;
    let roster: Vec<AvailabilityDto> = read_roster(args.availabilities.as_deref())?;

    let session: Session = session_for_event(&event, timezone)?;
    info!(
        event = %event.name,
        kind = %session.kind(),
        days = session.days().len(),
        clicks = args.clicks.len(),
        "opened session"
    );

    Ok((replay_clicks(&session, &args.clicks)?, roster))
}

fn read_roster(path: Option<&Path>) -> Result<Vec<AvailabilityDto>, CliError> {
    path.map_or_else(|| Ok(Vec::new()), read_payload)
}
