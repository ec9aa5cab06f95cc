//! HTTP fetcher for upstream pages
//!
//! This module handles the outbound side of every request:
//! - Building the shared HTTP client with the configured user agent
//! - GET requests for the upstream table pages
//! - Classification of failures
//!
//! There are no retries and nothing is cached; each call is one request.

use crate::config::{UpstreamConfig, UserAgentConfig};
use crate::TabellError;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Page body content
        body: String,
    },

    /// Upstream answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, broken body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the body on success, otherwise the matching upstream error
    pub fn into_body(self, url: &str) -> Result<String, TabellError> {
        match self {
            FetchResult::Success { body } => Ok(body),
            FetchResult::HttpError { status_code } => Err(TabellError::UpstreamStatus {
                url: url.to_string(),
                status_code,
            }),
            FetchResult::NetworkError { error } => Err(TabellError::Network {
                url: url.to_string(),
                error,
            }),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use allsvenskan_api::config::{UpstreamConfig, UserAgentConfig};
/// use allsvenskan_api::fetcher::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &UpstreamConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    agent: &UserAgentConfig,
    upstream: &UpstreamConfig,
) -> Result<Client, reqwest::Error> {
    // Format: Name/Version
    let user_agent = format!("{}/{}", agent.name, agent.version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(upstream.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | Success |
/// | Any other status | HttpError |
/// | Timeout, connection refused, body read failure | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    tracing::debug!("Fetching {}", url);

    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if response.url().as_str() != url {
                tracing::debug!("{} redirected to {}", url, response.url());
            }

            if !status.is_success() {
                tracing::warn!("Upstream returned {} for {}", status, url);
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success { body },
                Err(e) => {
                    tracing::warn!("Failed to read body from {}: {}", url, e);
                    FetchResult::NetworkError {
                        error: e.to_string(),
                    }
                }
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            tracing::warn!("Request to {} failed: {}", url, error);
            FetchResult::NetworkError { error }
        }
    }
}

/// Fetches a URL and returns its body, or the upstream error
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, TabellError> {
    fetch_url(client, url).await.into_body(url)
}
