// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Time slot list of a selected day.

use jiff::civil::{Date, Time};

use crate::availability::AvailabilityDay;
use crate::datetime::{clock_time, iso_date};
use crate::month::WEEKDAY_HEADERS;
use crate::wizard::Action;

/// A time slot row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCell {
    /// Start time.
    pub time: Time,
    /// `HH:MM` label.
    pub label: String,
    /// Whether the slot can be chosen.
    pub available: bool,
    /// Currently selected slot. At most one cell carries this marker.
    pub selected: bool,
}

impl SlotCell {
    /// Action dispatched when the slot is chosen, if it is available.
    #[must_use]
    pub fn on_select(&self) -> Option<Action> {
        self.available.then_some(Action::SelectSlot(self.time))
    }
}

/// Rendered slot list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotList {
    /// The day the slots belong to.
    pub date: Date,
    /// Heading such as `2026-01-20 (Tue)`.
    pub heading: String,
    /// Slots in display order.
    pub cells: Vec<SlotCell>,
    /// Whether the forward control is enabled, i.e. an available slot is selected.
    pub can_proceed: bool,
}

impl SlotList {
    /// The selected slot, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&SlotCell> {
        self.cells.iter().find(|c| c.selected)
    }
}

/// Renders the slots of `day`, marking `selected` if it is one of them.
#[must_use]
pub fn render_slots(day: &AvailabilityDay, selected: Option<Time>) -> SlotList {
    let cells: Vec<_> = day
        .slots
        .iter()
        .map(|slot| SlotCell {
            time: slot.time,
            label: clock_time(slot.time),
            available: slot.available,
            selected: selected == Some(slot.time),
        })
        .collect();

    let can_proceed = cells.iter().any(|c| c.selected && c.available);

    SlotList {
        date: day.date,
        heading: date_heading(day.date),
        cells,
        can_proceed,
    }
}

/// `2026-01-20 (Tue)`.
pub(crate) fn date_heading(date: Date) -> String {
    let weekday = usize::try_from(date.weekday().to_sunday_zero_offset())
        .ok()
        .and_then(|i| WEEKDAY_HEADERS.get(i))
        .copied()
        .unwrap_or_default();
    format!("{} ({weekday})", iso_date(date))
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;
    use crate::availability::Slot;

    fn sample_day() -> AvailabilityDay {
        AvailabilityDay {
            date: date(2026, 1, 20),
            has_slots: true,
            slots: vec![
                Slot {
                    time: time(10, 0, 0, 0),
                    available: true,
                },
                Slot {
                    time: time(11, 0, 0, 0),
                    available: false,
                },
                Slot {
                    time: time(13, 30, 0, 0),
                    available: true,
                },
            ],
        }
    }

    #[test]
    fn renders_labels_and_availability() {
        let list = render_slots(&sample_day(), None);

        assert_eq!(list.heading, "2026-01-20 (Tue)");
        let labels: Vec<_> = list.cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["10:00", "11:00", "13:30"]);
        assert!(list.cells[0].available);
        assert!(!list.cells[1].available);
        assert!(!list.can_proceed);
        assert!(list.selected().is_none());
    }

    #[test]
    fn only_available_slots_dispatch() {
        let list = render_slots(&sample_day(), None);
        assert_eq!(
            list.cells[0].on_select(),
            Some(Action::SelectSlot(time(10, 0, 0, 0)))
        );
        assert_eq!(list.cells[1].on_select(), None);
    }

    #[test]
    fn single_selection_enables_forward() {
        let list = render_slots(&sample_day(), Some(time(13, 30, 0, 0)));

        assert_eq!(list.cells.iter().filter(|c| c.selected).count(), 1);
        assert_eq!(list.selected().unwrap().label, "13:30");
        assert!(list.can_proceed);
    }

    #[test]
    fn selection_of_unavailable_slot_does_not_enable_forward() {
        let list = render_slots(&sample_day(), Some(time(11, 0, 0, 0)));
        assert!(!list.can_proceed);
    }
}
