// Page fetcher trait: the best-effort fetch contract.
//
// Implementations report failures through `try_fetch`. Callers that only
// want text use `fetch_paragraphs`, which folds every failure into an empty
// paragraph list after logging it.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page and return its qualifying paragraphs in document order.
    async fn try_fetch(&self, url: &str) -> Result<Vec<String>>;

    /// Like `try_fetch`, but never fails: errors become an empty list.
    async fn fetch_paragraphs(&self, url: &str) -> Vec<String> {
        match self.try_fetch(url).await {
            Ok(paragraphs) => {
                debug!(url, paragraphs = paragraphs.len(), "Fetched page");
                paragraphs
            }
            Err(e) => {
                warn!(url, error = %format!("{e:#}"), "Failed to fetch page");
                Vec::new()
            }
        }
    }
}
