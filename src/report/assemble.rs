// Report assembly: executive summary, aggregate indices and truncation.
//
// The two indices are means over every qualifying cluster, computed before
// the row list is cut down to the top N. The per-report totals describe the
// rows that are actually reported.

use tracing::info;

use crate::scoring::gap::round2;

use super::models::{AuditReport, ClusterResult, SeverityLevel};

pub const NO_GAPS_SUMMARY: &str = "No significant semantic gaps detected.";
pub const COMPETITIVE_SUMMARY: &str =
    "Semantic positioning is competitive with targeted optimization opportunities.";

/// Default number of clusters in a report.
pub const MAX_CLUSTERS: usize = 25;

/// One-sentence verdict over the scored rows (sorted by gap, largest first).
pub fn executive_summary(rows: &[ClusterResult]) -> String {
    if rows.is_empty() {
        return NO_GAPS_SUMMARY.to_string();
    }

    let critical: Vec<&str> = rows
        .iter()
        .filter(|r| r.severity_level == SeverityLevel::Critical)
        .take(3)
        .map(|r| r.cluster_topic.as_str())
        .collect();

    if critical.is_empty() {
        COMPETITIVE_SUMMARY.to_string()
    } else {
        format!(
            "Critical semantic gaps detected in {}. Immediate expansion recommended.",
            critical.join(", ")
        )
    }
}

/// Arithmetic mean rounded to 2 decimals; 0 for no values.
pub fn mean_rounded<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        round2(sum / count as f64)
    }
}

/// Build the final report from the full, sorted list of scored rows.
pub fn assemble_report(mut rows: Vec<ClusterResult>, max_clusters: usize) -> AuditReport {
    let executive_summary = executive_summary(&rows);
    let semantic_authority_index = mean_rounded(rows.iter().map(|r| r.semantic_score));
    let competitive_dominance_index =
        mean_rounded(rows.iter().map(|r| r.competitive_dominance_score));

    let qualifying = rows.len();
    rows.truncate(max_clusters);

    let total_missing_clusters = rows.iter().filter(|r| r.is_missing_cluster).count();
    let high_severity_clusters = rows
        .iter()
        .filter(|r| {
            matches!(
                r.severity_level,
                SeverityLevel::Critical | SeverityLevel::High
            )
        })
        .count();
    let total_weighted_gap_score = round2(rows.iter().map(|r| r.weighted_gap_score).sum());

    info!(
        qualifying,
        reported = rows.len(),
        missing = total_missing_clusters,
        semantic_authority_index,
        competitive_dominance_index,
        "Assembled audit report"
    );

    AuditReport {
        executive_summary,
        semantic_authority_index,
        competitive_dominance_index,
        total_clusters: rows.len(),
        total_missing_clusters,
        high_severity_clusters,
        total_weighted_gap_score,
        concept_clusters: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::models::DominanceType;

    fn row(topic: &str, gap: i64, semantic: f64, dominance: f64) -> ClusterResult {
        ClusterResult {
            cluster_topic: topic.to_string(),
            my_total_frequency: 0,
            competitor_total_frequency: gap.max(0) as u32,
            gap_score: gap,
            weighted_gap_score: round2(gap as f64 * 1.2),
            semantic_score: semantic,
            competitive_dominance_score: dominance,
            dominance_type: DominanceType::CompetitorDominant,
            severity_level: SeverityLevel::from_gap(gap),
            is_missing_cluster: true,
            cluster_description: String::new(),
            recommendation: String::new(),
            top_phrases: Vec::new(),
        }
    }

    #[test]
    fn test_summary_no_rows() {
        assert_eq!(executive_summary(&[]), NO_GAPS_SUMMARY);
    }

    #[test]
    fn test_summary_names_first_three_critical() {
        let rows = vec![
            row("payment", 60, 10.0, 100.0),
            row("webhook", 40, 10.0, 100.0),
            row("billing", 30, 10.0, 100.0),
            row("invoice", 27, 10.0, 100.0),
            row("refund", 8, 10.0, 100.0),
        ];
        assert_eq!(
            executive_summary(&rows),
            "Critical semantic gaps detected in payment, webhook, billing. Immediate expansion recommended."
        );
    }

    #[test]
    fn test_summary_without_critical() {
        let rows = vec![row("webhook", 13, 10.0, 100.0)];
        assert_eq!(executive_summary(&rows), COMPETITIVE_SUMMARY);
    }

    #[test]
    fn test_mean_rounded() {
        assert_eq!(mean_rounded(Vec::new()), 0.0);
        assert_eq!(mean_rounded(vec![10.0, 20.0, 25.0]), 18.33);
    }

    #[test]
    fn test_indices_use_all_rows_before_truncation() {
        let rows = vec![
            row("payment", 30, 90.0, 100.0),
            row("webhook", 20, 30.0, 50.0),
            row("billing", 10, 0.0, 0.0),
        ];
        let report = assemble_report(rows, 1);
        assert_eq!(report.concept_clusters.len(), 1);
        assert_eq!(report.semantic_authority_index, 40.0);
        assert_eq!(report.competitive_dominance_index, 50.0);
        assert_eq!(report.total_clusters, 1);
        assert_eq!(report.high_severity_clusters, 1);
        assert_eq!(report.total_weighted_gap_score, 36.0);
    }

    #[test]
    fn test_empty_report() {
        let report = assemble_report(Vec::new(), MAX_CLUSTERS);
        assert_eq!(report.executive_summary, NO_GAPS_SUMMARY);
        assert_eq!(report.semantic_authority_index, 0.0);
        assert_eq!(report.competitive_dominance_index, 0.0);
        assert!(report.concept_clusters.is_empty());
        assert_eq!(report.total_weighted_gap_score, 0.0);
    }
}
