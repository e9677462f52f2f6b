// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/consultation/available-dates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AvailableDatesResponse {
    /// Per-date availability, in the order the server sent it.
    #[serde(default)]
    pub dates: Option<Vec<DateAvailability>>,

    /// Present when the server could not compute availability.
    #[serde(default)]
    pub error: Option<String>,
}

/// Availability of a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateAvailability {
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,

    /// Whether any slot on this date can still be booked.
    pub has_slots: bool,

    /// Time slots of the day.
    #[serde(default)]
    pub slots: Vec<SlotAvailability>,
}

/// A bookable time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    /// Local clock time, `HH:MM`.
    pub time: String,

    /// Whether the slot is still free.
    pub available: bool,
}

/// Body of `POST /api/consultation/apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    /// Consultation type, `ai` or `mental`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Session length in minutes.
    pub duration: u16,

    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,

    /// Local clock time, `HH:MM`.
    pub time: String,

    /// Customer name.
    pub customer_name: String,

    /// Customer email address.
    pub customer_email: String,

    /// Customer phone number, empty when not given.
    pub customer_phone: String,

    /// Free-text message, empty when not given.
    pub message: String,

    /// Always `true`; the request is only built once every consent is given.
    pub agreed_to_terms: bool,
}

/// Body returned by `POST /api/consultation/apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    /// Whether the application was accepted.
    #[serde(default)]
    pub success: bool,

    /// Identifier of the created consultation.
    #[serde(default)]
    pub consultation_id: Option<ConsultationId>,

    /// Error message when the application was rejected.
    #[serde(default)]
    pub error: Option<String>,
}

/// Identifier of a booked consultation.
///
/// The server may send it either as a JSON string or as a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConsultationId(String);

impl ConsultationId {
    /// Creates a new `ConsultationId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConsultationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ConsultationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ConsultationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}
