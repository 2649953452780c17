//! HTTP client for fetching trace logs published at a URL.

use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::SourceError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking client for remote trace logs
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    /// Create a new client with the default timeout
    pub fn new() -> Result<Self, SourceError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a client with custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SourceError::RequestFailed)?;

        Ok(Self { client })
    }

    /// Fetch the raw text of a log
    pub fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        info!("Fetching trace log: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(SourceError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::InvalidResponse {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let text = response.text().map_err(SourceError::RequestFailed)?;
        debug!("Fetched {} bytes from {}", text.len(), url);

        Ok(text)
    }
}

/// Whether a source string should be fetched over HTTP
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Label for a remote log: last non-empty path segment, query stripped
pub fn url_file_name(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = without_query
        .split_once("://")
        .map_or(without_query, |(_, rest)| rest);

    after_scheme
        .split('/')
        .skip(1)
        .filter(|segment| !segment.is_empty())
        .last()
        .unwrap_or(after_scheme)
        .to_string()
}
