//! HTTP client for the upstream domain pricing/availability API.
//!
//! Each call is a single GET with no retry. The client holds no mutable
//! state, so one instance is shared by all in-flight tool calls.

use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::config::DomainApiConfig;

/// Errors returned by the domain API client.
#[derive(Debug, Error)]
pub enum DomainApiError {
    /// The API answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request could not be sent or the body could not be decoded.
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the domain API.
#[derive(Debug, Clone)]
pub struct DomainApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl DomainApiClient {
    /// Create a client from the domain API configuration.
    pub fn new(config: &DomainApiConfig) -> Result<Self, DomainApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL endpoints are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch prices for the given TLDs (`tldsToCheck=com,net`).
    pub async fn get_domain_prices(
        &self,
        tlds: &[String],
    ) -> Result<serde_json::Value, DomainApiError> {
        self.get_json("getDomainPrices", &[("tldsToCheck", tlds.join(","))])
            .await
    }

    /// Check whether `domain` can be registered.
    pub async fn check_domain_availability(
        &self,
        domain: &str,
    ) -> Result<serde_json::Value, DomainApiError> {
        self.get_json("checkDomainAvailability", &[("domain", domain.to_string())])
            .await
    }

    #[instrument(skip(self, query))]
    async fn get_json(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, DomainApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainApiError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
