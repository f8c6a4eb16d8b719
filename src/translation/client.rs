//! HTTP client for the Google web-translate endpoint.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::querier::Querier;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Queries the unauthenticated web endpoint used by the translate widget.
///
/// The endpoint answers with the nested-array shape the decoder expects;
/// it is also the reason the pipeline throttles itself, since heavy use
/// trips its abuse protections.
pub struct GoogleClient {
    client: Client,
    base_url: String,
}

impl GoogleClient {
    /// Creates a client with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Points the client at a different endpoint (used by tests).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Querier for GoogleClient {
    async fn query(&self, source: &str, target: &str, text: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "webapp"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("dt", "rm"),
                ("ie", "UTF-8"),
                ("oe", "UTF-8"),
                ("q", text),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to reach translation backend: {}", self.base_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translation backend returned status {status}: {body}");
        }

        response
            .text()
            .await
            .context("Failed to read translation backend response")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let client = GoogleClient::new().unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        let client = GoogleClient::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:1/translate");
        let result = client.query("auto", "ja", "hello").await;
        assert!(result.is_err());
    }
}
