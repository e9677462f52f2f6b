// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::civil::{Date, Time, date};
use slotbook_core::{Action, AvailabilityDay, Consent, ScheduleItem, Slot, Wizard};

/// The date every workflow treats as today, a Wednesday.
pub const TODAY: Date = date(2026, 1, 14);

/// A day whose slots are all at the given times, each with its availability.
#[must_use]
pub fn available_day(d: Date, slots: &[(Time, bool)]) -> AvailabilityDay {
    AvailabilityDay {
        date: d,
        has_slots: slots.iter().any(|(_, available)| *available),
        slots: slots
            .iter()
            .map(|(time, available)| Slot {
                time: *time,
                available: *available,
            })
            .collect(),
    }
}

/// Fills the contact form with valid data and ticks every consent.
pub fn fill_customer(wizard: &mut Wizard) {
    let actions = [
        Action::UpdateName("Hanako Yamada".to_string()),
        Action::UpdateEmail("hanako@example.com".to_string()),
        Action::UpdatePhone("090-0000-0000".to_string()),
        Action::UpdateMessage("First time".to_string()),
    ];
    for action in actions {
        wizard.dispatch(action).expect("Failed to edit the form");
    }
    for consent in Consent::ALL {
        wizard
            .dispatch(Action::SetConsent(consent, true))
            .expect("Failed to give consent");
    }
}

/// A schedule item of the course "Intro to AI".
#[must_use]
pub fn schedule_item(
    session_number: u32,
    date: Option<&str>,
    start_time: Option<&str>,
    online_url: Option<&str>,
) -> ScheduleItem {
    ScheduleItem {
        session_number,
        course_title: "Intro to AI".to_string(),
        date: date.map(str::to_string),
        start_time: start_time.map(str::to_string),
        end_time: None,
        online_url: online_url.map(str::to_string),
    }
}
