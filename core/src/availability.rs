// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory availability, refreshed wholesale per session length.

use std::collections::BTreeMap;

use async_trait::async_trait;
use jiff::civil::{Date, Time};
use slotbook_api::{ConsultationClient, DateAvailability};

use crate::datetime::{parse_date, parse_time};
use crate::error::AvailabilityError;
use crate::types::Duration;

/// A bookable time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Local start time.
    pub time: Time,
    /// Whether the slot is still free.
    pub available: bool,
}

/// Availability of one local calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityDay {
    /// The date.
    pub date: Date,
    /// Whether any slot can be booked on this date.
    pub has_slots: bool,
    /// Slots in ascending time order.
    pub slots: Vec<Slot>,
}

impl AvailabilityDay {
    /// Finds the slot starting at `time`.
    #[must_use]
    pub fn slot(&self, time: Time) -> Option<&Slot> {
        self.slots.iter().find(|s| s.time == time)
    }

    /// Whether `time` is a free slot on this date.
    #[must_use]
    pub fn is_available_at(&self, time: Time) -> bool {
        self.has_slots && self.slot(time).is_some_and(|s| s.available)
    }
}

impl TryFrom<DateAvailability> for AvailabilityDay {
    type Error = AvailabilityError;

    fn try_from(raw: DateAvailability) -> Result<Self, Self::Error> {
        let date =
            parse_date(&raw.date).map_err(|e| AvailabilityError::Malformed(e.to_string()))?;

        let mut slots = raw
            .slots
            .into_iter()
            .map(|s| {
                parse_time(&s.time)
                    .map(|time| Slot {
                        time,
                        available: s.available,
                    })
                    .map_err(|e| AvailabilityError::Malformed(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        slots.sort_by_key(|s| s.time);

        Ok(Self {
            date,
            has_slots: raw.has_slots,
            slots,
        })
    }
}

/// Source of availability data, usually the booking API.
#[async_trait]
pub trait AvailabilitySource {
    /// Fetches the availability of every known date for sessions of `duration`.
    async fn fetch(&self, duration: Duration) -> Result<Vec<AvailabilityDay>, AvailabilityError>;
}

#[async_trait]
impl AvailabilitySource for ConsultationClient {
    async fn fetch(&self, duration: Duration) -> Result<Vec<AvailabilityDay>, AvailabilityError> {
        self.available_dates(duration.minutes())
            .await
            .map_err(|e| AvailabilityError::Fetch(e.user_message().to_string()))?
            .into_iter()
            .map(AvailabilityDay::try_from)
            .collect()
    }
}

/// Load state of the store, as shown by the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AvailabilityState {
    /// Nothing requested yet, or invalidated.
    #[default]
    Idle,
    /// A refresh is in flight.
    Loading,
    /// The latest refresh succeeded.
    Ready,
    /// The latest refresh failed; the message is shown in place of the calendar.
    Failed(String),
}

/// Handle of an issued refresh. Only the newest handle may update the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    seq: u64,
    duration: Duration,
}

impl RefreshTicket {
    /// Session length the refresh was issued for.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

/// Map from local date to that date's availability.
///
/// Each refresh replaces the entire content. Responses are matched against the
/// ticket issued by [`AvailabilityStore::begin_refresh`]; a response for any
/// ticket other than the newest is dropped, so an older request finishing late
/// cannot overwrite newer data.
#[derive(Debug, Default)]
pub struct AvailabilityStore {
    days: BTreeMap<Date, AvailabilityDay>,
    state: AvailabilityState,
    duration: Option<Duration>,
    issued: u64,
}

impl AvailabilityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a refresh for `duration` as in flight and returns its ticket.
    ///
    /// Any ticket issued before becomes stale.
    pub fn begin_refresh(&mut self, duration: Duration) -> RefreshTicket {
        self.issued += 1;
        self.state = AvailabilityState::Loading;
        tracing::debug!(
            seq = self.issued,
            minutes = duration.minutes(),
            "availability refresh started"
        );
        RefreshTicket {
            seq: self.issued,
            duration,
        }
    }

    /// Applies the outcome of a refresh.
    ///
    /// Returns `false` and leaves the store untouched if `ticket` is stale.
    /// On failure the store is emptied and the failure is kept for display.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<AvailabilityDay>, AvailabilityError>,
    ) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.issued,
                "dropping stale availability response"
            );
            return false;
        }

        self.days.clear();
        match result {
            Ok(days) => {
                self.days = days.into_iter().map(|d| (d.date, d)).collect();
                self.state = AvailabilityState::Ready;
                self.duration = Some(ticket.duration);
                tracing::debug!(dates = self.days.len(), "availability loaded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load availability");
                self.state = AvailabilityState::Failed(e.to_string());
                self.duration = None;
            }
        }
        true
    }

    /// Fetches availability for `duration` from `source` and replaces the content.
    pub async fn refresh<S>(&mut self, source: &S, duration: Duration) -> &AvailabilityState
    where
        S: AvailabilitySource + ?Sized,
    {
        let ticket = self.begin_refresh(duration);
        let result = source.fetch(duration).await;
        self.complete_refresh(ticket, result);
        &self.state
    }

    /// Availability of `date`, if the latest refresh returned it.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<&AvailabilityDay> {
        self.days.get(&date)
    }

    /// Current load state.
    #[must_use]
    pub const fn state(&self) -> &AvailabilityState {
        &self.state
    }

    /// Session length of the loaded data, if any.
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Number of dates held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no date is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Drops all data and invalidates any refresh in flight.
    pub fn clear(&mut self) {
        self.issued += 1;
        self.days.clear();
        self.state = AvailabilityState::Idle;
        self.duration = None;
    }
}
