use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::fetch::http::DEFAULT_USER_AGENT;
use crate::pipeline::audit::AuditSettings;
use crate::report::assemble::MAX_CLUSTERS;
use crate::scoring::gap::GapWeights;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is a valid one.
#[derive(Debug, Clone)]
pub struct Config {
    /// Paragraphs must be longer than this many characters
    pub min_paragraph_length: usize,
    /// Competitor-side cluster total required for a reported row
    pub min_cluster_freq: u32,
    /// Number of rows kept in the report
    pub max_clusters: usize,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// Optional file of extra stop-cluster words, one per line
    pub stoplist_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_paragraph_length: 120,
            min_cluster_freq: GapWeights::default().min_cluster_freq,
            max_clusters: MAX_CLUSTERS,
            fetch_timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            stoplist_path: None,
        }
    }
}

/// Parse an optional numeric env var. Unset or empty means "use the default";
/// anything unparseable is an error.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        _ => Ok(default),
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let timeout_secs = parse_var("TOPICGAP_FETCH_TIMEOUT_SECS", defaults.fetch_timeout.as_secs())?;
        if timeout_secs == 0 {
            anyhow::bail!("TOPICGAP_FETCH_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            min_paragraph_length: parse_var(
                "TOPICGAP_MIN_PARAGRAPH_LENGTH",
                defaults.min_paragraph_length,
            )?,
            min_cluster_freq: parse_var("TOPICGAP_MIN_CLUSTER_FREQ", defaults.min_cluster_freq)?,
            max_clusters: parse_var("TOPICGAP_MAX_CLUSTERS", defaults.max_clusters)?,
            fetch_timeout: Duration::from_secs(timeout_secs),
            user_agent: env::var("TOPICGAP_USER_AGENT")
                .ok()
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            stoplist_path: env::var("TOPICGAP_STOPLIST")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Scoring and report settings derived from this config.
    pub fn audit_settings(&self) -> AuditSettings {
        AuditSettings {
            weights: GapWeights {
                min_cluster_freq: self.min_cluster_freq,
                ..GapWeights::default()
            },
            max_clusters: self.max_clusters,
        }
    }

    /// Read the extra stop-cluster words, if a file is configured.
    pub fn load_stoplist(&self) -> Result<Vec<String>> {
        match &self.stoplist_path {
            Some(path) => read_stoplist(path),
            None => Ok(Vec::new()),
        }
    }
}

/// One word per line; blank lines and `#` comments are skipped.
pub fn read_stoplist(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read stop-list {}", path.display()))?;
    Ok(parse_stoplist(&text))
}

pub fn parse_stoplist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.min_paragraph_length, 120);
        assert_eq!(config.min_cluster_freq, 6);
        assert_eq!(config.max_clusters, 25);
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert!(config.load_stoplist().unwrap().is_empty());
    }

    #[test]
    fn test_audit_settings_carry_threshold() {
        let config = Config {
            min_cluster_freq: 3,
            max_clusters: 10,
            ..Config::default()
        };
        let settings = config.audit_settings();
        assert_eq!(settings.weights.min_cluster_freq, 3);
        assert_eq!(settings.weights.gap_multiplier, 1.2);
        assert_eq!(settings.max_clusters, 10);
    }

    #[test]
    fn test_parse_stoplist() {
        let words = parse_stoplist("# product names\nAcme\n\n  widget  \n");
        assert_eq!(words, vec!["acme", "widget"]);
    }

    #[test]
    fn test_missing_stoplist_is_error() {
        let config = Config {
            stoplist_path: Some(PathBuf::from("/nonexistent/topicgap-stoplist.txt")),
            ..Config::default()
        };
        assert!(config.load_stoplist().is_err());
    }
}
