// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering of the booking view models.

use std::{error::Error, io};

use colored::Colorize;
use slotbook_core::{
    BookingSummary, CalendarAffordance, DayCell, DayStatus, GridCell, MonthGrid, Notice, SlotList,
    WEEKDAY_HEADERS,
};

const CELL_WIDTH: usize = 4;

pub fn write_month(w: &mut impl io::Write, grid: &MonthGrid) -> Result<(), Box<dyn Error>> {
    let width = CELL_WIDTH * WEEKDAY_HEADERS.len();
    writeln!(w, "{}", format!("{:^width$}", grid.title).bold())?;

    for (i, header) in WEEKDAY_HEADERS.iter().enumerate() {
        let header = format!("{header:>3} ");
        match i {
            0 => write!(w, "{}", header.red())?,
            6 => write!(w, "{}", header.blue())?,
            _ => write!(w, "{header}")?,
        }
    }
    writeln!(w)?;

    for week in grid.weeks() {
        for cell in week {
            match cell {
                GridCell::Blank => write!(w, "{:CELL_WIDTH$}", "")?,
                GridCell::Day(day) => write!(w, "{} ", day_label(day))?,
            }
        }
        writeln!(w)?;
    }

    match &grid.notice {
        Some(Notice::Loading) => writeln!(w, "{}", "Loading availability...".yellow())?,
        Some(Notice::Failed(msg)) => writeln!(w, "{} {}", "Unavailable:".red(), msg)?,
        None => writeln!(
            w,
            "{} bookable  {} full  {} closed",
            "■".green(),
            "■".dimmed(),
            "■".red()
        )?,
    }
    Ok(())
}

fn day_label(day: &DayCell) -> colored::ColoredString {
    let text = format!("{:>3}", day.day);
    let mut label = match day.status {
        DayStatus::Available if day.weekend => text.blue().bold(),
        DayStatus::Available => text.green().bold(),
        DayStatus::Closed => text.red().dimmed(),
        DayStatus::Unavailable | DayStatus::Past => text.dimmed(),
    };
    if day.today {
        label = label.underline();
    }
    if day.selected {
        label = label.reversed();
    }
    label
}

pub fn write_slots(w: &mut impl io::Write, list: &SlotList) -> Result<(), Box<dyn Error>> {
    writeln!(w, "{}", list.heading.bold())?;
    if list.cells.is_empty() {
        writeln!(w, "  {}", "No time slots".dimmed())?;
        return Ok(());
    }

    for cell in &list.cells {
        let marker = if cell.selected { "*" } else { " " };
        if cell.available {
            writeln!(w, "{marker} {}  {}", cell.label.green().bold(), "available".green())?;
        } else {
            writeln!(w, "{marker} {}  {}", cell.label.dimmed(), "booked".dimmed())?;
        }
    }
    Ok(())
}

pub fn write_summary(
    w: &mut impl io::Write,
    summary: &BookingSummary,
) -> Result<(), Box<dyn Error>> {
    let rows = [
        ("Type", &summary.kind),
        ("Duration", &summary.duration),
        ("Price", &summary.price),
        ("Date", &summary.date),
        ("Time", &summary.time),
    ];
    for (name, value) in rows {
        writeln!(w, "{:>8}: {value}", name.bold())?;
    }
    Ok(())
}

pub fn write_affordances(
    w: &mut impl io::Write,
    affordances: &[CalendarAffordance],
) -> Result<(), Box<dyn Error>> {
    for affordance in affordances {
        match affordance {
            CalendarAffordance::Link {
                session_number,
                label,
                url,
            } => {
                writeln!(w, "{} {}", format!("#{session_number}").bold(), label)?;
                writeln!(w, "   {}", url.cyan())?;
            }
            CalendarAffordance::Pending {
                session_number,
                notice,
            } => writeln!(
                w,
                "{} {}",
                format!("#{session_number}").bold(),
                notice.dimmed()
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};
    use slotbook_core::{
        AvailabilityDay, AvailabilityError, AvailabilityStore, CalendarLinkBuilder, Duration,
        MonthCursor, ScheduleItem, Slot, render_month, render_slots, schedule_affordances,
    };

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), Box<dyn Error>>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn month_is_laid_out_in_weeks() {
        let store = AvailabilityStore::new();
        let grid = render_month(
            MonthCursor::containing(date(2026, 2, 1)),
            &store,
            None,
            date(2026, 1, 14),
        );

        let text = render(|w| write_month(w, &grid));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0].trim(), "February 2026");
        assert_eq!(lines[1], "Sun Mon Tue Wed Thu Fri Sat ");
        // February 2026 starts on a Sunday
        assert!(lines[2].starts_with("  1   2   3"));
        assert!(text.contains(" 28 "));
    }

    #[test]
    fn failed_month_shows_message() {
        let mut store = AvailabilityStore::new();
        let ticket = store.begin_refresh(Duration::Minutes30);
        store.complete_refresh(ticket, Err(AvailabilityError::Fetch("down".to_string())));
        let grid = render_month(
            MonthCursor::containing(date(2026, 1, 1)),
            &store,
            None,
            date(2026, 1, 14),
        );

        let text = render(|w| write_month(w, &grid));
        assert!(text.ends_with("Unavailable: down\n"));
    }

    #[test]
    fn slots_show_availability_and_selection() {
        let day = AvailabilityDay {
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
            ],
        };
        let list = render_slots(&day, Some(time(10, 0, 0, 0)));

        let text = render(|w| write_slots(w, &list));
        assert_eq!(
            text,
            "2026-01-20 (Tue)\n* 10:00  available\n  11:00  booked\n"
        );
    }

    #[test]
    fn affordances_list_links_and_pending_sessions() {
        let items = vec![
            ScheduleItem {
                session_number: 1,
                course_title: "Intro".to_string(),
                date: Some("2026-02-03".to_string()),
                start_time: Some("19:00".to_string()),
                end_time: None,
                online_url: None,
            },
            ScheduleItem {
                session_number: 2,
                course_title: "Intro".to_string(),
                date: None,
                start_time: None,
                end_time: None,
                online_url: None,
            },
        ];
        let affordances = schedule_affordances(&items, &CalendarLinkBuilder::default());

        let text = render(|w| write_affordances(w, &affordances));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "#1 Add to Google Calendar");
        assert!(lines[1].trim_start().starts_with("https://calendar.google.com/"));
        assert_eq!(lines[2], "#2 Available once the date is confirmed");
    }
}
