// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory availability source and booking gateway.

use std::sync::Mutex;

use async_trait::async_trait;
use slotbook_core::{
    AvailabilityDay, AvailabilityError, AvailabilitySource, BookingError, BookingGateway,
    BookingPayload, ConsultationId, Duration,
};

/// Answers every fetch with the same result and records the requested lengths.
#[derive(Debug)]
pub struct FakeSource {
    result: Result<Vec<AvailabilityDay>, AvailabilityError>,
    requests: Mutex<Vec<Duration>>,
}

impl FakeSource {
    /// A source that returns `days`.
    #[must_use]
    pub fn with_days(days: Vec<AvailabilityDay>) -> Self {
        Self {
            result: Ok(days),
            requests: Mutex::default(),
        }
    }

    /// A source that always fails with `message`.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(AvailabilityError::Fetch(message.to_string())),
            requests: Mutex::default(),
        }
    }

    /// Session lengths requested so far.
    pub fn requests(&self) -> Vec<Duration> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AvailabilitySource for FakeSource {
    async fn fetch(&self, duration: Duration) -> Result<Vec<AvailabilityDay>, AvailabilityError> {
        self.requests.lock().unwrap().push(duration);
        self.result.clone()
    }
}

/// Answers every submission with the same result and records the payloads.
#[derive(Debug)]
pub struct FakeGateway {
    result: Result<ConsultationId, BookingError>,
    payloads: Mutex<Vec<BookingPayload>>,
}

impl FakeGateway {
    /// A gateway that accepts every booking as `id`.
    #[must_use]
    pub fn accepting(id: &str) -> Self {
        Self {
            result: Ok(ConsultationId::from(id)),
            payloads: Mutex::default(),
        }
    }

    /// A gateway that refuses every booking with `message`.
    #[must_use]
    pub fn rejecting(message: &str) -> Self {
        Self {
            result: Err(BookingError::Rejected(message.to_string())),
            payloads: Mutex::default(),
        }
    }

    /// Payloads received so far.
    pub fn payloads(&self) -> Vec<BookingPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingGateway for FakeGateway {
    async fn submit(&self, payload: &BookingPayload) -> Result<ConsultationId, BookingError> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.result.clone()
    }
}
