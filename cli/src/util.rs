// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};
use slotbook_core::{MonthCursor, parse_date, parse_time};

/// Parses a `YYYY-MM-DD` argument.
pub fn parse_date_arg(s: &str) -> Result<Date, String> {
    parse_date(s.trim()).map_err(|e| e.to_string())
}

/// Parses an `HH:MM` argument.
pub fn parse_time_arg(s: &str) -> Result<Time, String> {
    parse_time(s.trim()).map_err(|e| e.to_string())
}

/// Parses a `YYYY-MM` argument.
pub fn parse_month_arg(s: &str) -> Result<MonthCursor, String> {
    const EXPECTED: &str = "expected YYYY-MM";

    let (year, month) = s.trim().split_once('-').ok_or(EXPECTED)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(format!("invalid month {s:?}, {EXPECTED}"));
    }
    let year: i16 = year.parse().map_err(|_| format!("invalid year in {s:?}"))?;
    let month: i8 = month.parse().map_err(|_| format!("invalid month in {s:?}"))?;
    MonthCursor::new(year, month).ok_or_else(|| format!("invalid month {s:?}, {EXPECTED}"))
}
