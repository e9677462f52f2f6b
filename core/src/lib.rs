// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Consultation booking core: availability, calendar and slot views, the
//! booking wizard, and "add to calendar" links.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]

mod availability;
mod calendar_link;
mod config;
mod datetime;
mod error;
mod month;
mod slots;
mod types;
mod view;
mod wizard;

pub use crate::availability::{
    AvailabilityDay, AvailabilitySource, AvailabilityState, AvailabilityStore, RefreshTicket, Slot,
};
pub use crate::calendar_link::{
    CalendarAffordance, CalendarEvent, CalendarLinkBuilder, ScheduleItem, meeting_url,
    schedule_affordances,
};
pub use crate::config::{
    APP_NAME, Config, DEFAULT_CALENDAR_URL, DEFAULT_ONLINE_PLACEHOLDER, DEFAULT_TIMEZONE,
};
pub use crate::datetime::{
    DEFAULT_SESSION_HOURS, clock_time, compute_end_time, format_token, iso_date, parse_date,
    parse_time,
};
pub use crate::error::{AvailabilityError, BookingError, FormatError, ValidationError, WizardError};
pub use crate::month::{
    DayCell, DayStatus, GridCell, MonthCursor, MonthGrid, Notice, WEEKDAY_HEADERS, classify_day,
    render_month,
};
pub use crate::slots::{SlotCell, SlotList, render_slots};
pub use crate::types::{
    BookingSelection, Consent, Consents, ConsultationType, CustomerInfo, Duration,
};
pub use crate::view::{BookingSummary, DurationOption, TypeOption, WizardView};
pub use crate::wizard::{Action, BookingGateway, BookingPayload, Confirmation, Effect, Step, Wizard};
pub use slotbook_api::ConsultationId;
