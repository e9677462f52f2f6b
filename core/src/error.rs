// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::types::Consent;
use crate::wizard::Step;

/// Malformed date or time input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Not a `YYYY-MM-DD` calendar date.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Not an `HH:MM` clock time.
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    /// Unknown consultation type or session length.
    #[error("invalid value {value:?} for {field}")]
    InvalidValue {
        /// Field being parsed.
        field: &'static str,
        /// Rejected input.
        value: String,
    },
}

/// Failure to load availability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// The request failed or the server reported an error.
    #[error("{0}")]
    Fetch(String),

    /// The server answered with data that cannot be interpreted.
    #[error("malformed availability data: {0}")]
    Malformed(String),
}

/// Missing or invalid input that blocks a step transition or the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No consultation type chosen.
    #[error("Please choose a consultation type.")]
    MissingType,

    /// No date chosen.
    #[error("Please choose a date.")]
    MissingDate,

    /// No time chosen.
    #[error("Please choose a time.")]
    MissingTime,

    /// Name left empty.
    #[error("Please enter your name.")]
    MissingName,

    /// Email left empty.
    #[error("Please enter your email address.")]
    MissingEmail,

    /// Email does not look like an address.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// A required consent is not given.
    #[error("Please agree to the {0}.")]
    MissingConsent(Consent),
}

/// Failure of the booking submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The booking service answered and refused the booking.
    #[error("{0}")]
    Rejected(String),

    /// The booking service could not be reached or answered nonsense.
    #[error("{0}")]
    Transport(String),
}

impl BookingError {
    /// Fallback shown when the service gives no usable message.
    pub const FALLBACK_MESSAGE: &'static str =
        "Failed to submit your booking. Please try again.";

    /// Message to show in the booking form.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected(msg) | Self::Transport(msg) if !msg.trim().is_empty() => msg,
            _ => Self::FALLBACK_MESSAGE,
        }
    }
}

/// A wizard action that cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// A forward transition whose precondition does not hold.
    #[error("cannot continue to {target}: {reason}")]
    StepBlocked {
        /// Step that was requested.
        target: Step,
        /// Missing input.
        reason: ValidationError,
    },

    /// A forward transition that would skip a step.
    #[error("cannot jump from {from} to {to}")]
    SkipForward {
        /// Current step.
        from: Step,
        /// Requested step.
        to: Step,
    },

    /// Submission attempted with incomplete input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A submission is already waiting for the booking service.
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// The booking is complete and can no longer change.
    #[error("the booking has already been submitted")]
    AlreadySubmitted,
}
