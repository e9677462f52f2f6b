// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Booking API client errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum ApiError {
    /// HTTP layer error, including non-success status codes without a usable body.
    Http(String),

    /// The response body could not be decoded.
    Decode(String),

    /// The server answered with an `error` field or `success: false`.
    Remote(String),

    /// Invalid response from server.
    InvalidResponse(String),

    /// Configuration error.
    Config(String),
}

impl ApiError {
    /// Message suitable for showing to the person using the booking flow.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Remote(msg) if !msg.trim().is_empty() => msg,
            _ => "Communication with the server failed. Please try again.",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Decode(e) => write!(f, "Malformed response: {e}"),
            Self::Remote(e) => write!(f, "Server rejected the request: {e}"),
            Self::InvalidResponse(e) => write!(f, "Invalid server response: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
