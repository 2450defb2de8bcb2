// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_availability, utc};
use crate::{AvailabilityDto, build_heatmap, tooltip_for};
use findtime_domain::Heatmap;

fn create_test_roster() -> Vec<AvailabilityDto> {
    vec![
        create_availability(1, utc(2, 9, 0), utc(2, 10, 0), "Alice"),
        create_availability(2, utc(2, 9, 30), utc(2, 10, 30), "Bob"),
    ]
}

#[test]
fn test_build_heatmap_counts_overlap() {
    let heatmap: Heatmap = build_heatmap(&create_test_roster(), chrono_tz::UTC);

    assert_eq!(heatmap.max_number_of_respondents(), 2);
    assert_eq!(heatmap.count_at(utc(2, 9, 0)), 1);
    assert_eq!(heatmap.count_at(utc(2, 9, 30)), 2);
    assert_eq!(heatmap.count_at(utc(2, 10, 0)), 2);
    assert_eq!(heatmap.count_at(utc(2, 10, 30)), 1);
    assert_eq!(heatmap.count_at(utc(2, 11, 0)), 0);
}

#[test]
fn test_build_heatmap_empty_roster() {
    let heatmap: Heatmap = build_heatmap(&[], chrono_tz::UTC);

    assert!(heatmap.is_empty());
    assert_eq!(heatmap.max_number_of_respondents(), 0);
}

#[test]
fn test_tooltip_for_lists_names() {
    let heatmap: Heatmap = build_heatmap(&create_test_roster(), chrono_tz::UTC);

    assert_eq!(
        tooltip_for(&heatmap, utc(2, 9, 30)),
        Some(String::from(
            "2 people have marked this time as available: Alice, Bob"
        ))
    );
    assert_eq!(
        tooltip_for(&heatmap, utc(2, 10, 30)),
        Some(String::from(
            "1 person has marked this time as available: Bob"
        ))
    );
}

#[test]
fn test_tooltip_for_empty_slot() {
    let heatmap: Heatmap = build_heatmap(&create_test_roster(), chrono_tz::UTC);

    assert_eq!(tooltip_for(&heatmap, utc(2, 12, 0)), None);
}
