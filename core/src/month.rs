// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid of the availability calendar.

use jiff::civil::{Date, Weekday};

use crate::availability::{AvailabilityState, AvailabilityStore};
use crate::datetime::iso_date;
use crate::wizard::Action;

/// Weekday headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The displayed `(year, month)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i16,
    month: i8,
}

impl MonthCursor {
    /// Cursor on `month` (`1..=12`) of `year`, if that month exists.
    #[must_use]
    pub fn new(year: i16, month: i8) -> Option<Self> {
        Date::new(year, month, 1)
            .ok()
            .map(|_| Self { year, month })
    }

    /// Cursor on the month containing `date`.
    #[must_use]
    pub fn containing(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Year shown.
    #[must_use]
    pub const fn year(&self) -> i16 {
        self.year
    }

    /// Month shown, `1..=12`.
    #[must_use]
    pub const fn month(&self) -> i8 {
        self.month
    }

    /// Moves to the previous month, rolling the year over before January.
    pub const fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    /// Moves to the next month, rolling the year over after December.
    pub const fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(&self) -> Date {
        // year/month always come from a valid date or a rollover of one
        Date::new(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    /// Title such as `January 2026`.
    #[must_use]
    pub fn title(&self) -> String {
        let name = usize::try_from(self.month - 1)
            .ok()
            .and_then(|i| MONTH_NAMES.get(i))
            .copied()
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }
}

/// Why a day can or cannot be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Strictly before today.
    Past,
    /// Sunday; consultations are never held on Sundays.
    Closed,
    /// No availability record, or no free slot left.
    Unavailable,
    /// At least one slot can be booked.
    Available,
}

/// Classifies `date` against today and the loaded availability.
///
/// Priority: past, then Sunday, then missing/empty availability.
#[must_use]
pub fn classify_day(date: Date, today: Date, availability: &AvailabilityStore) -> DayStatus {
    if date < today {
        DayStatus::Past
    } else if date.weekday() == Weekday::Sunday {
        DayStatus::Closed
    } else if availability.get(date).is_some_and(|d| d.has_slots) {
        DayStatus::Available
    } else {
        DayStatus::Unavailable
    }
}

/// A day of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// The date.
    pub date: Date,
    /// `YYYY-MM-DD`, built from the local components.
    pub iso: String,
    /// Day of month.
    pub day: i8,
    /// Availability classification.
    pub status: DayStatus,
    /// Saturday marker; purely cosmetic.
    pub weekend: bool,
    /// Currently selected date.
    pub selected: bool,
    /// The current date.
    pub today: bool,
}

impl DayCell {
    /// Whether choosing this day does anything.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.status == DayStatus::Available
    }

    /// Action dispatched when the day is chosen, if it is selectable.
    #[must_use]
    pub fn on_select(&self) -> Option<Action> {
        self.is_selectable().then_some(Action::SelectDate(self.date))
    }
}

/// A cell of the 7-column grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the first day of the month.
    Blank,
    /// A day of the month.
    Day(DayCell),
}

/// Banner shown over the grid instead of, or while waiting for, availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Availability is being fetched.
    Loading,
    /// Availability could not be loaded.
    Failed(String),
}

/// Rendered month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// The month shown.
    pub cursor: MonthCursor,
    /// Title such as `January 2026`.
    pub title: String,
    /// Leading blanks followed by one cell per day.
    pub cells: Vec<GridCell>,
    /// Whether the previous month may be shown; months before today's are not.
    pub can_go_prev: bool,
    /// Loading or failure banner.
    pub notice: Option<Notice>,
}

impl MonthGrid {
    /// Number of blank cells before day 1.
    #[must_use]
    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, GridCell::Blank))
            .count()
    }

    /// Cells grouped by week row.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    /// The cell of `date`, if it is in this month.
    #[must_use]
    pub fn day(&self, date: Date) -> Option<&DayCell> {
        self.cells.iter().find_map(|c| match c {
            GridCell::Day(d) if d.date == date => Some(d),
            _ => None,
        })
    }
}

/// Renders the month at `cursor` against the loaded availability.
#[must_use]
pub fn render_month(
    cursor: MonthCursor,
    availability: &AvailabilityStore,
    selected: Option<Date>,
    today: Date,
) -> MonthGrid {
    let first = cursor.first_day();
    let blanks = usize::try_from(first.weekday().to_sunday_zero_offset()).unwrap_or(0);

    let mut cells = Vec::with_capacity(blanks + 31);
    cells.extend(std::iter::repeat_n(GridCell::Blank, blanks));

    for day in 1..=first.days_in_month() {
        let Ok(date) = Date::new(cursor.year, cursor.month, day) else {
            continue;
        };
        cells.push(GridCell::Day(DayCell {
            date,
            iso: iso_date(date),
            day,
            status: classify_day(date, today, availability),
            weekend: date.weekday() == Weekday::Saturday,
            selected: selected == Some(date),
            today: date == today,
        }));
    }

    let notice = match availability.state() {
        AvailabilityState::Loading => Some(Notice::Loading),
        AvailabilityState::Failed(msg) => Some(Notice::Failed(msg.clone())),
        AvailabilityState::Idle | AvailabilityState::Ready => None,
    };

    MonthGrid {
        cursor,
        title: cursor.title(),
        cells,
        can_go_prev: cursor > MonthCursor::containing(today),
        notice,
    }
}
