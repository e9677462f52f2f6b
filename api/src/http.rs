// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with JSON body decoding.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for booking API operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request against the configured base URL.
    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        self.client
            .request(method, url)
            .header("Accept", "application/json")
    }

    /// Executes a request and decodes the JSON body.
    ///
    /// The body is decoded regardless of the status code, since the endpoints
    /// report failures through an `error` field. A non-success status whose body
    /// cannot be decoded is reported as an HTTP error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not the expected JSON.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<(StatusCode, T), ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        match serde_json::from_str::<T>(&text) {
            Ok(body) => Ok((status, body)),
            Err(e) if status.is_success() => Err(e.into()),
            Err(_) => {
                tracing::debug!(%status, body = %text, "undecodable error response");
                Err(ApiError::Http(format!("{status}: {}", summarize(&text))))
            }
        }
    }
}

fn summarize(text: &str) -> &str {
    const MAX: usize = 200;
    let text = text.trim();
    match text.char_indices().nth(MAX) {
        Some((i, _)) => text.get(..i).unwrap_or(text),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_truncates_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(summarize(&long).len(), 200);
        assert_eq!(summarize("  short  "), "short");
    }
}
