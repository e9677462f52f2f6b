// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the consultation booking endpoints.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{
    ApplyRequest, ApplyResponse, AvailableDatesResponse, ConsultationId, DateAvailability,
};

const AVAILABLE_DATES_PATH: &str = "/api/consultation/available-dates";
const APPLY_PATH: &str = "/api/consultation/apply";

/// Client for fetching consultation availability and submitting applications.
///
/// # Example
///
/// ```ignore
/// use slotbook_api::{ApiConfig, ConsultationClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ConsultationClient::new(ApiConfig::new("https://example.com"))?;
/// let dates = client.available_dates(30).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConsultationClient {
    http: Arc<HttpClient>,
}

impl ConsultationClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }

        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Fetches the availability of every date for sessions of the given length.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Remote`] if the body carries an `error` field, whatever
    /// the status code, [`ApiError::InvalidResponse`] if it carries neither
    /// `error` nor `dates`, and a transport or decode error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn available_dates(
        &self,
        duration_minutes: u16,
    ) -> Result<Vec<DateAvailability>, ApiError> {
        let req = self
            .http
            .build_request(Method::GET, AVAILABLE_DATES_PATH)
            .query(&[("duration", duration_minutes)]);

        let (status, body) = self.http.execute_json::<AvailableDatesResponse>(req).await?;
        if let Some(error) = body.error {
            tracing::warn!(%status, %error, "availability feed reported an error");
            return Err(ApiError::Remote(error));
        }
        if !status.is_success() {
            return Err(ApiError::Http(format!("unexpected status {status}")));
        }

        let dates = body.dates.ok_or_else(|| {
            ApiError::InvalidResponse("availability response without dates".to_string())
        })?;
        tracing::debug!(dates = dates.len(), "fetched availability");
        Ok(dates)
    }

    /// Submits a consultation application and returns the created identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Remote`] with the server's message if the application
    /// is rejected, [`ApiError::InvalidResponse`] if it is accepted without an
    /// identifier, and a transport or decode error otherwise.
    #[tracing::instrument(skip_all, fields(date = %request.date, time = %request.time))]
    pub async fn apply(&self, request: &ApplyRequest) -> Result<ConsultationId, ApiError> {
        let req = self.http.build_request(Method::POST, APPLY_PATH).json(request);

        let (status, body) = self.http.execute_json::<ApplyResponse>(req).await?;
        if !body.success || !status.is_success() || body.error.is_some() {
            let error = body.error.unwrap_or_default();
            tracing::warn!(%status, %error, "application rejected");
            return Err(ApiError::Remote(error));
        }

        body.consultation_id.ok_or_else(|| {
            ApiError::InvalidResponse("accepted application without consultationId".to_string())
        })
    }
}
