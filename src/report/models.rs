// Report models: the types that make up the audit's JSON output.
//
// Field names are the wire format consumed by dashboards and scripts, so
// they are spelled out in snake_case exactly as serialized.

use serde::{Deserialize, Serialize};

/// How far the competitors are ahead on a cluster, from its gap score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl SeverityLevel {
    /// Thresholds are strict: a gap of exactly 25 is High, 26 is Critical.
    /// Negative gaps (target ahead) fall through to Low.
    pub fn from_gap(gap: i64) -> Self {
        match gap {
            g if g > 25 => SeverityLevel::Critical,
            g if g > 12 => SeverityLevel::High,
            g if g > 5 => SeverityLevel::Moderate,
            _ => SeverityLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::High => "high",
            SeverityLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which side carries more weight in a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominanceType {
    CompetitorDominant,
    YouDominant,
    Competitive,
}

impl DominanceType {
    pub fn from_totals(my_total: u32, comp_total: u32) -> Self {
        match my_total.cmp(&comp_total) {
            std::cmp::Ordering::Less => DominanceType::CompetitorDominant,
            std::cmp::Ordering::Greater => DominanceType::YouDominant,
            std::cmp::Ordering::Equal => DominanceType::Competitive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DominanceType::CompetitorDominant => "competitor_dominant",
            DominanceType::YouDominant => "you_dominant",
            DominanceType::Competitive => "competitive",
        }
    }
}

impl std::fmt::Display for DominanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scored cluster: the join of the target's and the competitors'
/// clusters for a head word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    pub cluster_topic: String,
    pub my_total_frequency: u32,
    pub competitor_total_frequency: u32,
    /// competitor total minus target total; positive means competitors lead
    pub gap_score: i64,
    pub weighted_gap_score: f64,
    /// Share of the competitor corpus, doubled and capped at 100
    pub semantic_score: f64,
    /// 0 = target dominates, 100 = competitors dominate
    pub competitive_dominance_score: f64,
    pub dominance_type: DominanceType,
    pub severity_level: SeverityLevel,
    pub is_missing_cluster: bool,
    pub cluster_description: String,
    pub recommendation: String,
    /// Most frequent competitor phrases in this cluster
    pub top_phrases: Vec<String>,
}

/// The complete audit result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub executive_summary: String,
    /// Mean semantic score over every qualifying cluster (before truncation)
    pub semantic_authority_index: f64,
    /// Mean dominance score over every qualifying cluster (before truncation)
    pub competitive_dominance_index: f64,
    /// Top clusters by gap score
    pub concept_clusters: Vec<ClusterResult>,
    // Totals below cover the reported clusters only
    pub total_clusters: usize,
    pub total_missing_clusters: usize,
    pub high_severity_clusters: usize,
    pub total_weighted_gap_score: f64,
}

/// `{"error": "..."}`, printed whenever no report can be produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// The full error chain, outermost context first.
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::new(format!("{err:#}"))
    }
}
