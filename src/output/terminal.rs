// Colored terminal rendering of an audit report.
//
// Severity badges, dominance indicators and a bar for each cluster's
// semantic score. Used by `--format text`; JSON stays the default.

use std::fmt::Write;

use colored::Colorize;

use crate::report::models::{AuditReport, DominanceType, SeverityLevel};

use super::truncate_chars;

const BAR_WIDTH: usize = 20;
const TOPIC_WIDTH: usize = 24;

fn colorize_severity(severity: SeverityLevel) -> colored::ColoredString {
    let label = severity.as_str();
    match severity {
        SeverityLevel::Critical => label.red().bold(),
        SeverityLevel::High => label.bright_red(),
        SeverityLevel::Moderate => label.yellow(),
        SeverityLevel::Low => label.green(),
    }
}

fn dominance_marker(dominance: DominanceType) -> colored::ColoredString {
    match dominance {
        DominanceType::CompetitorDominant => "<<".red(),
        DominanceType::YouDominant => ">>".green(),
        DominanceType::Competitive => "==".dimmed(),
    }
}

/// A fixed-width bar for a 0-100 score.
fn score_bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Render the report as colored text.
pub fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", "=== Topical Gap Audit ===".bold());
    let _ = writeln!(out, "\n  {}", report.executive_summary);
    let _ = writeln!(
        out,
        "\n  Semantic authority index:    {:>6.2}",
        report.semantic_authority_index
    );
    let _ = writeln!(
        out,
        "  Competitive dominance index: {:>6.2}",
        report.competitive_dominance_index
    );

    if report.concept_clusters.is_empty() {
        let _ = writeln!(out, "\n  {}", "No clusters to report.".dimmed());
        return out;
    }

    let _ = writeln!(
        out,
        "\n  {:<24} {:>5} {:>5} {:>5}  {:<9} {:<2}  {}",
        "Cluster".dimmed(),
        "You".dimmed(),
        "Comp".dimmed(),
        "Gap".dimmed(),
        "Severity".dimmed(),
        "".dimmed(),
        "Semantic".dimmed(),
    );
    let _ = writeln!(out, "  {}", "-".repeat(82).dimmed());

    for row in &report.concept_clusters {
        let topic = truncate_chars(&row.cluster_topic, TOPIC_WIDTH - 3);
        let topic = if row.is_missing_cluster {
            topic.bold().to_string()
        } else {
            topic
        };
        let _ = writeln!(
            out,
            "  {:<24} {:>5} {:>5} {:>5}  {:<9} {:<2}  {} {:>6.2}",
            topic,
            row.my_total_frequency,
            row.competitor_total_frequency,
            row.gap_score,
            colorize_severity(row.severity_level),
            dominance_marker(row.dominance_type),
            score_bar(row.semantic_score),
            row.semantic_score,
        );
        if !row.top_phrases.is_empty() {
            let _ = writeln!(out, "  {}", row.top_phrases.join(", ").dimmed());
        }
    }

    let _ = writeln!(out);
    if report.high_severity_clusters > 0 {
        let _ = writeln!(
            out,
            "  {} {} high-severity clusters",
            "!!".red().bold(),
            report.high_severity_clusters
        );
    }
    if report.total_missing_clusters > 0 {
        let _ = writeln!(
            out,
            "  {} {} clusters missing from your page",
            "!".bright_red(),
            report.total_missing_clusters
        );
    }
    let _ = writeln!(
        out,
        "  Total weighted gap score: {:.2}",
        report.total_weighted_gap_score
    );

    out
}

/// Print the report to stdout.
pub fn display_report(report: &AuditReport) {
    print!("{}", render_report(report));
}
