//! HTTP client for RateMyProfessors
//!
//! One GET per call with the configured header set. Failures are
//! reported as-is; nothing is retried.

use std::time::Duration;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Result, RmpError};

/// HTTP client wrapper
///
/// Handles all HTTP communication with the site:
/// - Fixed headers from [`ClientConfig`]
/// - Status mapping (404, 429, 5xx) into [`RmpError`]
pub struct RmpClient {
    client: reqwest::Client,
    base_url: String,
}

impl RmpClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `Config` - the header payload is malformed
    /// - `HttpError` - reqwest failed to build the client
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let headers = config.resolved_headers()?.to_header_map()?;

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(RmpError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Site root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the body of a full URL
    ///
    /// # Errors
    /// - `HttpError` - network failure or 5xx status
    /// - `NotFound` - 404 status
    /// - `RateLimited` - 429 status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RmpError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RmpError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RmpError::NotFound(url.to_string()));
        }

        if status.is_server_error() {
            return Err(response
                .error_for_status()
                .map_err(RmpError::HttpError)
                .err()
                .unwrap_or_else(|| RmpError::NotFound(url.to_string())));
        }

        response.text().await.map_err(RmpError::HttpError)
    }
}
