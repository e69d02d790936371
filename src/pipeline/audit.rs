// Audit pipeline: target page vs. competitor pages.
//
// Strategy: fetch and cluster the target page, then fetch every competitor
// in turn and merge their concept counts into one corpus before clustering
// it. The two cluster maps are scored against each other and packaged into
// a report.
//
// Fetching is sequential and best-effort. A target page with no usable
// paragraphs ends the audit early; a competitor with none just contributes
// nothing.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::concepts::cluster::{build_clusters, ClusterMap};
use crate::concepts::extract::{merge_frequencies, ConceptExtractor, ConceptFrequency};
use crate::fetch::traits::PageFetcher;
use crate::report::assemble::{assemble_report, MAX_CLUSTERS};
use crate::report::models::AuditReport;
use crate::scoring::gap::{score_clusters, GapWeights};

pub const PAGE_UNAVAILABLE: &str = "Failed to process your page";

/// The JSON request read from stdin or `--input`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditRequest {
    #[serde(rename = "myUrl", default)]
    pub my_url: Option<String>,
    /// Missing and `null` both mean "no competitors"
    #[serde(rename = "competitorUrls", default)]
    pub competitor_urls: Option<Vec<String>>,
}

impl AuditRequest {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid request JSON")
    }

    /// The target URL, or an error when it is missing or empty.
    pub fn target_url(&self) -> Result<&str> {
        match self.my_url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => anyhow::bail!("Missing myUrl"),
        }
    }

    pub fn competitor_urls(&self) -> &[String] {
        self.competitor_urls.as_deref().unwrap_or_default()
    }
}

/// Tunables for one audit run.
pub struct AuditSettings {
    pub weights: GapWeights,
    pub max_clusters: usize,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            weights: GapWeights::default(),
            max_clusters: MAX_CLUSTERS,
        }
    }
}

/// How an audit ended.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditOutcome {
    Report(AuditReport),
    /// The target page yielded no paragraphs, so there is nothing to compare.
    PageUnavailable,
}

/// Run a full audit. Never fails: fetch problems are absorbed by the
/// fetcher, and everything after fetching is pure computation.
pub async fn run_audit(
    fetcher: &dyn PageFetcher,
    extractor: &ConceptExtractor,
    my_url: &str,
    competitor_urls: &[String],
    settings: &AuditSettings,
) -> AuditOutcome {
    let my_paragraphs = fetcher.fetch_paragraphs(my_url).await;
    if my_paragraphs.is_empty() {
        warn!(url = my_url, "Target page produced no paragraphs");
        return AuditOutcome::PageUnavailable;
    }

    let my_concepts = extractor.extract(&my_paragraphs);
    let my_clusters = build_clusters(&my_concepts);
    info!(
        url = my_url,
        paragraphs = my_paragraphs.len(),
        concepts = my_concepts.len(),
        clusters = my_clusters.len(),
        "Target page analyzed"
    );

    let mut comp_concepts = ConceptFrequency::new();
    let mut competitors_used = 0usize;
    for url in competitor_urls {
        let paragraphs = fetcher.fetch_paragraphs(url).await;
        if paragraphs.is_empty() {
            continue;
        }
        competitors_used += 1;
        merge_frequencies(&mut comp_concepts, extractor.extract(&paragraphs));
    }

    let comp_clusters = build_clusters(&comp_concepts);
    info!(
        competitors = competitor_urls.len(),
        competitors_used,
        concepts = comp_concepts.len(),
        clusters = comp_clusters.len(),
        "Competitor corpus analyzed"
    );

    let rows = score_clusters(&my_clusters, &comp_clusters, &settings.weights);
    AuditOutcome::Report(assemble_report(rows, settings.max_clusters))
}

/// Fetch one page and cluster its concepts. Unlike the audit, fetch
/// failures are returned to the caller.
pub async fn page_clusters(
    fetcher: &dyn PageFetcher,
    extractor: &ConceptExtractor,
    url: &str,
) -> Result<ClusterMap> {
    let paragraphs = fetcher
        .try_fetch(url)
        .await
        .with_context(|| format!("Failed to fetch {url}"))?;
    let concepts = extractor.extract(&paragraphs);
    Ok(build_clusters(&concepts))
}
