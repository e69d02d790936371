// Head-word clustering of concepts.
//
// A concept's head is its first token. Concepts sharing a head are grouped
// and their frequencies summed. Heads shorter than 4 characters are dropped
// along with their concepts; their counts are not folded anywhere else.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::extract::ConceptFrequency;

pub const MIN_HEAD_CHARS: usize = 4;

/// Default number of phrases reported per cluster.
pub const TOP_PHRASES: usize = 5;

/// All concepts sharing one head word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptCluster {
    /// Sum of the frequencies of every member concept
    pub total_freq: u32,
    /// Member concepts and their frequencies, in no particular order
    pub concepts: Vec<(String, u32)>,
}

impl ConceptCluster {
    /// The `n` most frequent member concepts, ties broken alphabetically.
    pub fn top_phrases(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, u32)> = self.concepts.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.into_iter().take(n).map(|(c, _)| c.clone()).collect()
    }
}

/// Head word -> cluster.
pub type ClusterMap = HashMap<String, ConceptCluster>;

/// Group a concept frequency map into head-word clusters.
pub fn build_clusters(freq: &ConceptFrequency) -> ClusterMap {
    let mut clusters = ClusterMap::new();

    for (concept, &count) in freq {
        let Some(head) = concept.split_whitespace().next() else {
            continue;
        };
        if head.chars().count() < MIN_HEAD_CHARS {
            continue;
        }

        let cluster = clusters.entry(head.to_string()).or_default();
        cluster.total_freq += count;
        cluster.concepts.push((concept.clone(), count));
    }

    clusters
}

/// Sum of `total_freq` over every cluster in a map.
pub fn total_frequency(clusters: &ClusterMap) -> u64 {
    clusters.values().map(|c| u64::from(c.total_freq)).sum()
}
