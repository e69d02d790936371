// Gap scoring between the target page's clusters and the competitors'.
//
// For every head word present on either side we compare cluster totals:
//
//   gap_score          = comp_total - my_total
//   weighted_gap_score = gap_score * 1.2
//   semantic_score     = min(100, comp_total / total_comp_freq * 100 * 2)
//   dominance_score    = comp_total / (my_total + comp_total) * 100
//
// Clusters the competitors barely mention (comp_total below the minimum) are
// noise and never reported, however often the target mentions them.

use std::collections::BTreeSet;

use tracing::debug;

use crate::concepts::cluster::{total_frequency, ClusterMap, TOP_PHRASES};
use crate::report::models::{ClusterResult, DominanceType, SeverityLevel};

use super::insight::{describe, Coverage};

/// Configurable constants for gap scoring.
pub struct GapWeights {
    /// Competitor-side cluster total required for a row to be reported (default 6)
    pub min_cluster_freq: u32,
    /// Multiplier applied to the raw gap (default 1.2)
    pub gap_multiplier: f64,
    /// Boost applied to a cluster's share of the competitor corpus (default 2.0)
    pub semantic_boost: f64,
    /// Phrases listed per row (default 5)
    pub top_phrases: usize,
}

impl Default for GapWeights {
    fn default() -> Self {
        Self {
            min_cluster_freq: 6,
            gap_multiplier: 1.2,
            semantic_boost: 2.0,
            top_phrases: TOP_PHRASES,
        }
    }
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A cluster's share of the whole competitor corpus, boosted and capped at 100.
pub fn semantic_score(comp_total: u32, total_comp_freq: u64, boost: f64) -> f64 {
    if total_comp_freq == 0 {
        return 0.0;
    }
    let normalized = f64::from(comp_total) / total_comp_freq as f64 * 100.0;
    round2((normalized * boost).min(100.0))
}

/// 0 when the target owns the cluster, 100 when the competitors do.
pub fn dominance_score(my_total: u32, comp_total: u32) -> f64 {
    let total = u64::from(my_total) + u64::from(comp_total);
    if total == 0 {
        return 0.0;
    }
    round2(f64::from(comp_total) / total as f64 * 100.0)
}

/// Score one head word. Returns `None` when the competitor side is below
/// the reporting threshold.
pub fn score_head(
    head: &str,
    mine: &ClusterMap,
    theirs: &ClusterMap,
    total_comp_freq: u64,
    weights: &GapWeights,
) -> Option<ClusterResult> {
    let my_total = mine.get(head).map_or(0, |c| c.total_freq);
    let comp_total = theirs.get(head).map_or(0, |c| c.total_freq);

    if comp_total < weights.min_cluster_freq {
        return None;
    }

    let gap = i64::from(comp_total) - i64::from(my_total);
    let coverage = Coverage::from_totals(my_total, comp_total);
    let (cluster_description, recommendation) = describe(head, coverage);

    let top_phrases = theirs
        .get(head)
        .or_else(|| mine.get(head))
        .map(|c| c.top_phrases(weights.top_phrases))
        .unwrap_or_default();

    Some(ClusterResult {
        cluster_topic: head.to_string(),
        my_total_frequency: my_total,
        competitor_total_frequency: comp_total,
        gap_score: gap,
        weighted_gap_score: round2(gap as f64 * weights.gap_multiplier),
        semantic_score: semantic_score(comp_total, total_comp_freq, weights.semantic_boost),
        competitive_dominance_score: dominance_score(my_total, comp_total),
        dominance_type: DominanceType::from_totals(my_total, comp_total),
        severity_level: SeverityLevel::from_gap(gap),
        is_missing_cluster: coverage == Coverage::Missing,
        cluster_description,
        recommendation,
        top_phrases,
    })
}

/// Score every head word present in either map and sort by gap, largest
/// first. Heads are visited in alphabetical order so equal gaps keep a
/// deterministic order under the stable sort. Not truncated.
pub fn score_clusters(
    mine: &ClusterMap,
    theirs: &ClusterMap,
    weights: &GapWeights,
) -> Vec<ClusterResult> {
    let total_comp_freq = total_frequency(theirs);
    let heads: BTreeSet<&String> = mine.keys().chain(theirs.keys()).collect();
    let heads_seen = heads.len();

    let mut results: Vec<ClusterResult> = heads
        .into_iter()
        .filter_map(|head| score_head(head, mine, theirs, total_comp_freq, weights))
        .collect();

    results.sort_by(|a, b| b.gap_score.cmp(&a.gap_score));

    debug!(
        heads_seen,
        qualifying = results.len(),
        total_comp_freq,
        "Scored clusters"
    );

    results
}
