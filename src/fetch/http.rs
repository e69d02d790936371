// HTTP page fetcher: a thin reqwest wrapper.
//
// One GET per URL with a fixed user agent and a per-request timeout. The
// response body is handed to the HTML cleanup in html.rs. No retries.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::html::extract_paragraphs;
use super::traits::PageFetcher;

/// Browser-like user agent; some sites refuse obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

pub struct HttpFetcher {
    client: reqwest::Client,
    min_paragraph_length: usize,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration, min_paragraph_length: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            min_paragraph_length,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn try_fetch(&self, url: &str) -> Result<Vec<String>> {
        debug!(url, "GET page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("{url} returned {}", response.status());
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))?;

        Ok(extract_paragraphs(&body, self.min_paragraph_length))
    }
}
