//! HTTP fetcher for individual store pages.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Single-attempt HTML fetcher.
///
/// Every request is bounded by the configured total timeout and is never
/// retried. Idle connections are not pooled, so each connection is closed
/// once its response body has been read.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with a total per-request timeout.
    ///
    /// When `user_agent` is `None` the client's default headers are sent
    /// unchanged. Redirects follow the client's default policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: Option<&str>) -> Result<Self, ScraperError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(0);
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches `url` once and returns the body decoded as UTF-8.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing
    /// the fetch.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx response.
    /// - [`ScraperError::Http`] for network, TLS, or timeout failures.
    pub async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
