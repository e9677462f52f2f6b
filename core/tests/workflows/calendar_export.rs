// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar export workflow tests.
//!
//! These tests cover the schedule page shown after payment: one "add to
//! calendar" control per session, built from configuration.

use slotbook_core::{CalendarAffordance, CalendarLinkBuilder, Config, schedule_affordances};

use crate::common::schedule_item;

fn query_value(link: &str, key: &str) -> String {
    url::Url::parse(link)
        .unwrap()
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .unwrap_or_else(|| panic!("missing {key} in {link}"))
}

#[test]
fn schedule_page_mixes_links_and_placeholders() {
    // Arrange
    let builder = CalendarLinkBuilder::from_config(&Config::default());
    let items = vec![
        schedule_item(1, Some("2026-02-03"), Some("19:00"), Some("https://zoom.example.com/j/1")),
        schedule_item(2, Some("2026-02-10"), Some("23:30"), Some("zoom.example.com/j/2")),
        schedule_item(3, None, None, None),
    ];

    // Act
    let affordances = schedule_affordances(&items, &builder);

    // Assert
    assert_eq!(affordances.len(), 3);

    let CalendarAffordance::Link { url, .. } = &affordances[0] else {
        panic!("session 1 should have a link");
    };
    assert_eq!(query_value(url, "text"), "Intro to AI (Session 1)");
    assert_eq!(query_value(url, "dates"), "20260203T190000/20260203T210000");
    assert_eq!(query_value(url, "ctz"), "Asia/Tokyo");
    assert_eq!(query_value(url, "location"), "https://zoom.example.com/j/1");

    let CalendarAffordance::Link { url, .. } = &affordances[1] else {
        panic!("session 2 should have a link");
    };
    assert_eq!(query_value(url, "dates"), "20260210T233000/20260211T013000");
    assert_eq!(query_value(url, "location"), "Online");

    assert!(matches!(
        &affordances[2],
        CalendarAffordance::Pending { session_number: 3, notice } if !notice.is_empty()
    ));
}

#[test]
fn configured_zone_and_placeholder_are_used() {
    // Arrange
    let config: Config = toml::from_str(
        r#"
timezone = "America/New_York"
online_placeholder = "Zoom (link by email)"
"#,
    )
    .unwrap();
    let builder = CalendarLinkBuilder::from_config(&config);

    // Act
    let link = schedule_item(1, Some("2026-03-08"), Some("01:30"), None)
        .calendar_link(&builder)
        .unwrap();

    // Assert - tokens are local wall-clock values, the zone is explicit
    assert_eq!(query_value(&link, "dates"), "20260308T013000/20260308T033000");
    assert_eq!(query_value(&link, "ctz"), "America/New_York");
    assert_eq!(query_value(&link, "location"), "Zoom (link by email)");
}
