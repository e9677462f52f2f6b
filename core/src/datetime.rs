// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Local calendar dates and clock times, and the timestamp tokens used by
//! calendar links.
//!
//! Everything here works on civil (zone-less) values: a token never carries an
//! offset, the calendar service is told separately which zone it belongs to.

use jiff::ToSpan;
use jiff::civil::{Date, Time};

use crate::error::FormatError;

/// Hours added to a start time when no end time is known.
pub const DEFAULT_SESSION_HOURS: i64 = 2;

/// Parses a strict `YYYY-MM-DD` local date.
///
/// # Errors
///
/// Returns an error if the string is not exactly in that shape or names a day
/// that does not exist.
pub fn parse_date(s: &str) -> Result<Date, FormatError> {
    let invalid = || FormatError::InvalidDate(s.to_string());

    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes.get(4) != Some(&b'-') || bytes.get(7) != Some(&b'-') {
        return Err(invalid());
    }

    let year = digits(s, 0..4).ok_or_else(invalid)?;
    let month = digits(s, 5..7).ok_or_else(invalid)?;
    let day = digits(s, 8..10).ok_or_else(invalid)?;
    Date::new(
        i16::try_from(year).map_err(|_| invalid())?,
        i8::try_from(month).map_err(|_| invalid())?,
        i8::try_from(day).map_err(|_| invalid())?,
    )
    .map_err(|_| invalid())
}

/// Parses a strict 24-hour `HH:MM` local time.
///
/// # Errors
///
/// Returns an error if the string is not exactly in that shape or is out of range.
pub fn parse_time(s: &str) -> Result<Time, FormatError> {
    let invalid = || FormatError::InvalidTime(s.to_string());

    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes.get(2) != Some(&b':') {
        return Err(invalid());
    }

    let hour = digits(s, 0..2).ok_or_else(invalid)?;
    let minute = digits(s, 3..5).ok_or_else(invalid)?;
    Time::new(
        i8::try_from(hour).map_err(|_| invalid())?,
        i8::try_from(minute).map_err(|_| invalid())?,
        0,
        0,
    )
    .map_err(|_| invalid())
}

fn digits(s: &str, range: std::ops::Range<usize>) -> Option<u32> {
    let part = s.get(range)?;
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Formats a date as `YYYY-MM-DD` from its own components, never through UTC.
#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Formats a time as `HH:MM`.
#[must_use]
pub fn clock_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Concatenates a local date and time into a `YYYYMMDDTHHMMSS` token.
#[must_use]
pub fn format_token(date: Date, time: Time) -> String {
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}",
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Default end of a session: two hours after `start`, wrapping past midnight.
#[must_use]
pub fn compute_end_time(start: Time) -> Time {
    start.wrapping_add(DEFAULT_SESSION_HOURS.hours())
}
