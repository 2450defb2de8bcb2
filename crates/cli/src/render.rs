// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text and HTML views of the picker grid and the heatmap.

use chrono::{NaiveTime, Timelike};
use chrono_tz::Tz;
use findtime::Session;
use findtime_domain::{
    CellShade, Day, Heatmap, Instant, OccupancyEntry, SLOTS_PER_DAY, cell_shade, format_duration,
    format_slot_time, format_time_of_day, resolve_local, slot_time_of_day, tooltip_text,
};

const TIME_COLUMN_WIDTH: usize = 5;

/// Renders the picker as a table of half-hour rows by day columns.
///
/// Cells show `#` for this respondent's selections, the respondent count
/// where others are available, `.` when nobody is, and `/` on disabled
/// days. Wall times that do not exist on a day are left blank. A summary
/// line per day follows the table.
#[must_use]
pub fn render_grid(session: &Session, heatmap: &Heatmap) -> String {
    let timezone: Tz = session.timezone();
    let labels: Vec<String> = session.day_labels();
    let width: usize = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(TIME_COLUMN_WIDTH);

    let mut out: String = format!(
        "{} in {} ({} per selection)\n",
        session.kind(),
        timezone.name(),
        format_duration(session.duration_minutes())
    );
    out.push_str(&format!("{:width$}", "", width = TIME_COLUMN_WIDTH));
    for label in &labels {
        out.push_str(&format!("  {label:>width$}"));
    }
    out.push('\n');

    for time in slot_times() {
        out.push_str(&row_label(time));
        for day in session.days() {
            let cell: String = resolve_local(day.local_date(&timezone).and_time(time), &timezone)
                .map_or_else(String::new, |instant| cell_glyph(day, instant, heatmap));
            out.push_str(&format!("  {cell:>width$}"));
        }
        out.push('\n');
    }

    out.push('\n');
    for (label, day) in labels.iter().zip(session.days()) {
        out.push_str(&day_summary(label, day, &timezone));
    }

    out
}

/// Renders the picker as an HTML table shaded like the web picker.
///
/// Every cell carries its heat colour as an inline background and the
/// availability tooltip as its `title`.
#[must_use]
pub fn render_grid_html(session: &Session, heatmap: &Heatmap) -> String {
    let timezone: Tz = session.timezone();
    let mut out: String = String::from("<table class=\"findtime-grid\">\n<tr><th></th>");
    for label in session.day_labels() {
        out.push_str(&format!("<th>{}</th>", escape_html(&label)));
    }
    out.push_str("</tr>\n");

    for time in slot_times() {
        out.push_str(&format!("<tr><th>{}</th>", row_label(time)));
        for day in session.days() {
            match resolve_local(day.local_date(&timezone).and_time(time), &timezone) {
                Some(instant) => out.push_str(&html_cell(day, instant, heatmap)),
                None => out.push_str("<td></td>"),
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n");
    out
}

/// Renders the most popular slots, at most `top` of them.
#[must_use]
pub fn render_ranking(heatmap: &Heatmap, top: usize) -> String {
    let timezone: Tz = heatmap.timezone();

    if heatmap.is_empty() {
        return String::from("Nobody has marked any time as available\n");
    }

    let peaks: Vec<Instant> = heatmap.peak_slots();
    let mut out: String = format!(
        "Best: {} respondent(s) at {} slot(s)\n",
        heatmap.max_number_of_respondents(),
        peaks.len()
    );

    let ranked: Vec<(Instant, &OccupancyEntry)> = heatmap.ranked_slots();
    for (instant, entry) in ranked.into_iter().take(top) {
        out.push_str(&format!(
            "{} {}  {:>3}  {}\n",
            instant.with_timezone(&timezone).format("%Y-%m-%d"),
            format_slot_time(instant, &timezone),
            entry.count(),
            entry.names().join(", ")
        ));
    }

    out
}

fn slot_times() -> impl Iterator<Item = NaiveTime> {
    (0..SLOTS_PER_DAY).map_while(slot_time_of_day)
}

fn row_label(time: NaiveTime) -> String {
    format_time_of_day(time.hour(), time.minute())
}

fn day_summary(label: &str, day: &Day, timezone: &Tz) -> String {
    if day.is_disabled() {
        return format!("{label}: disabled\n");
    }
    let selected: u32 = u32::try_from(day.selected_minutes()).unwrap_or(u32::MAX);
    format!(
        "{label}: {} slots, {} selected\n",
        day.slots(timezone).len(),
        format_duration(selected)
    )
}

fn shade_at(day: &Day, instant: Instant, heatmap: &Heatmap) -> CellShade {
    cell_shade(
        day.is_selected(instant),
        day.is_disabled(),
        heatmap.count_at(instant),
        heatmap.max_number_of_respondents(),
    )
}

fn cell_glyph(day: &Day, instant: Instant, heatmap: &Heatmap) -> String {
    match shade_at(day, instant, heatmap) {
        CellShade::Disabled => String::from("/"),
        CellShade::Selected => String::from("#"),
        CellShade::Heat { .. } => heatmap.count_at(instant).to_string(),
        CellShade::Neutral => String::from("."),
    }
}

fn html_cell(day: &Day, instant: Instant, heatmap: &Heatmap) -> String {
    let style: String = shade_at(day, instant, heatmap)
        .css()
        .map_or_else(String::new, |colour| {
            format!(" style=\"background-color: {colour}\"")
        });
    let title: String = tooltip_text(heatmap.names_at(instant))
        .map_or_else(String::new, |text| {
            format!(" title=\"{}\"", escape_html(&text))
        });
    format!("<td{style}{title}></td>")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use findtime::{Command, apply};
    use findtime_domain::{Submission, WindowDescriptor};

    fn utc(hour: u32, minute: u32) -> Instant {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, minute, 0).unwrap()
    }

    fn create_test_session() -> Session {
        Session::new(
            WindowDescriptor::SpecificDate(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
            chrono_tz::UTC,
            30,
        )
        .unwrap()
    }

    fn row<'a>(grid: &'a str, time: &str) -> &'a str {
        grid.lines().find(|line| line.starts_with(time)).unwrap()
    }

    #[test]
    fn test_render_grid_marks_selection_and_heat() {
        let session: Session = apply(
            &create_test_session(),
            Command::Select {
                day: 0,
                instant: utc(9, 0),
            },
        )
        .unwrap()
        .new_session;
        let submissions: Vec<Submission> = vec![Submission::new(utc(10, 0), utc(10, 0), "Alice")];
        let heatmap: Heatmap = Heatmap::build(&submissions, chrono_tz::UTC);

        let grid: String = render_grid(&session, &heatmap);

        assert!(grid.contains("March 2, 2026"));
        assert!(row(&grid, "09:00").ends_with('#'));
        assert!(row(&grid, "10:00").ends_with('1'));
        assert!(row(&grid, "11:00").ends_with('.'));
        assert_eq!(grid.lines().count(), 2 + 48 + 2);
        assert!(grid.ends_with("March 2, 2026: 48 slots, 30m selected\n"));
    }

    #[test]
    fn test_render_ranking_orders_by_count() {
        let submissions: Vec<Submission> = vec![
            Submission::new(utc(9, 0), utc(9, 30), "Alice"),
            Submission::new(utc(9, 30), utc(9, 30), "Bob"),
        ];
        let heatmap: Heatmap = Heatmap::build(&submissions, chrono_tz::UTC);

        let ranking: String = render_ranking(&heatmap, 10);
        let lines: Vec<&str> = ranking.lines().collect();

        assert_eq!(lines[0], "Best: 2 respondent(s) at 1 slot(s)");
        assert_eq!(lines[1], "2026-03-02 09:30    2  Alice, Bob");
        assert_eq!(lines[2], "2026-03-02 09:00    1  Alice");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_render_ranking_respects_top() {
        let submissions: Vec<Submission> = vec![Submission::new(utc(9, 0), utc(12, 0), "Alice")];
        let heatmap: Heatmap = Heatmap::build(&submissions, chrono_tz::UTC);

        let ranking: String = render_ranking(&heatmap, 2);

        assert_eq!(ranking.lines().count(), 3);
    }

    #[test]
    fn test_render_ranking_empty() {
        let ranking: String = render_ranking(&Heatmap::empty(chrono_tz::UTC), 5);

        assert_eq!(ranking, "Nobody has marked any time as available\n");
    }

    #[test]
    fn test_render_grid_html_shades_cells() {
        let session: Session = apply(
            &create_test_session(),
            Command::Select {
                day: 0,
                instant: utc(9, 0),
            },
        )
        .unwrap()
        .new_session;
        let submissions: Vec<Submission> = vec![Submission::new(utc(10, 0), utc(10, 0), "<Alice>")];
        let heatmap: Heatmap = Heatmap::build(&submissions, chrono_tz::UTC);

        let html: String = render_grid_html(&session, &heatmap);

        assert!(html.contains("<th>March 2, 2026</th>"));
        assert!(html.contains(
            "<tr><th>09:00</th><td style=\"background-color: #338822\"></td></tr>"
        ));
        assert!(html.contains(
            "<tr><th>10:00</th><td style=\"background-color: hsl(0, 75%, 35%)\" \
             title=\"1 person has marked this time as available: &lt;Alice&gt;\"></td></tr>"
        ));
        assert!(html.contains("<tr><th>11:00</th><td></td></tr>"));
    }

    #[test]
    fn test_day_summary_of_disabled_day() {
        let day: Day = Day::new_disabled(utc(0, 0));

        assert_eq!(day_summary("Monday", &day, &chrono_tz::UTC), "Monday: disabled\n");
    }
}
