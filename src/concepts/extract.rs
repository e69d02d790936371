// Concept extraction: turns paragraphs into counts of normalized noun phrases.
//
// Each noun chunk is reduced to its lemmatized, lowercased, alphabetic,
// non-stop-word tokens. Chunks that end up with 2-5 tokens, contain no
// stop-cluster word and are at least 6 characters long become a "concept".
// Counting is the only side effect; bad input just contributes nothing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::nlp::traits::{LanguageModel, NounChunk};

/// Concept string -> number of occurrences across one corpus.
pub type ConceptFrequency = HashMap<String, u32>;

pub const MIN_CONCEPT_TOKENS: usize = 2;
pub const MAX_CONCEPT_TOKENS: usize = 5;
pub const MIN_CONCEPT_CHARS: usize = 6;

/// Generic words that make poor topic heads or modifiers. A concept
/// containing any of these lemmas is dropped entirely.
pub const STOP_CLUSTER_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "way", "time", "year", "month", "thing",
    "things", "people", "content", "example", "examples", "addition", "tools", "developers",
    "users", "information", "details", "overview", "guide", "section", "topic", "article",
    "page",
];

/// Extracts concept frequencies using a shared language model.
pub struct ConceptExtractor {
    model: Arc<dyn LanguageModel>,
    stop_clusters: HashSet<String>,
}

impl ConceptExtractor {
    /// Create an extractor with the built-in stop-cluster list.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            stop_clusters: STOP_CLUSTER_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add operator-supplied stop-cluster words on top of the built-in list.
    pub fn with_extra_stop_clusters<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_clusters.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    pub fn is_stop_cluster(&self, lemma: &str) -> bool {
        self.stop_clusters.contains(lemma)
    }

    /// Count concepts across all paragraphs of one corpus.
    pub fn extract(&self, paragraphs: &[String]) -> ConceptFrequency {
        let mut freq = ConceptFrequency::new();

        for paragraph in paragraphs {
            for chunk in self.model.noun_chunks(paragraph) {
                if let Some(concept) = self.concept_from_chunk(&chunk) {
                    *freq.entry(concept).or_insert(0) += 1;
                }
            }
        }

        debug!(
            paragraphs = paragraphs.len(),
            distinct_concepts = freq.len(),
            "Extracted concepts"
        );

        freq
    }

    /// Normalize one noun chunk into a concept key, or `None` if it is
    /// rejected by the token-count, stop-cluster or length filters.
    pub fn concept_from_chunk(&self, chunk: &NounChunk) -> Option<String> {
        let tokens: Vec<String> = chunk
            .tokens
            .iter()
            .filter(|t| !t.is_stop && t.is_alpha)
            .map(|t| t.lemma.to_lowercase())
            .collect();

        if !(MIN_CONCEPT_TOKENS..=MAX_CONCEPT_TOKENS).contains(&tokens.len()) {
            return None;
        }
        if tokens.iter().any(|t| self.is_stop_cluster(t)) {
            return None;
        }

        let concept = tokens.join(" ");
        if concept.chars().count() < MIN_CONCEPT_CHARS {
            return None;
        }

        Some(concept)
    }
}

/// Add every count in `from` into `into`. Competitor corpora are merged this
/// way, at the concept level, before clustering.
pub fn merge_frequencies(into: &mut ConceptFrequency, from: ConceptFrequency) {
    for (concept, count) in from {
        *into.entry(concept).or_insert(0) += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::traits::ChunkToken;

    /// Language model stub that returns the same chunks for any text.
    struct FixedChunks(Vec<NounChunk>);

    impl LanguageModel for FixedChunks {
        fn noun_chunks(&self, text: &str) -> Vec<NounChunk> {
            if text.is_empty() {
                Vec::new()
            } else {
                self.0.clone()
            }
        }
    }

    fn token(text: &str, lemma: &str, is_stop: bool) -> ChunkToken {
        ChunkToken {
            text: text.to_string(),
            lemma: lemma.to_string(),
            is_stop,
            is_alpha: text.chars().all(char::is_alphabetic),
        }
    }

    fn chunk(tokens: Vec<ChunkToken>) -> NounChunk {
        NounChunk { tokens }
    }

    fn extractor(chunks: Vec<NounChunk>) -> ConceptExtractor {
        ConceptExtractor::new(Arc::new(FixedChunks(chunks)))
    }

    #[test]
    fn test_concept_normalization() {
        let ex = extractor(vec![]);
        let c = chunk(vec![
            token("The", "the", true),
            token("API", "api", false),
            token("rate", "rate", false),
            token("limits", "limit", false),
        ]);
        assert_eq!(ex.concept_from_chunk(&c).as_deref(), Some("api rate limit"));
    }

    #[test]
    fn test_single_token_rejected() {
        let ex = extractor(vec![]);
        let c = chunk(vec![token("the", "the", true), token("gateway", "gateway", false)]);
        assert_eq!(ex.concept_from_chunk(&c), None);
    }

    #[test]
    fn test_too_many_tokens_rejected() {
        let ex = extractor(vec![]);
        let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
        let c = chunk(words.iter().map(|w| token(w, w, false)).collect());
        assert_eq!(ex.concept_from_chunk(&c), None);
    }

    #[test]
    fn test_non_alpha_tokens_skipped() {
        let ex = extractor(vec![]);
        let c = chunk(vec![
            token("top", "top", false),
            token("10", "10", false),
            token("webhook", "webhook", false),
        ]);
        assert_eq!(ex.concept_from_chunk(&c).as_deref(), Some("top webhook"));
    }

    #[test]
    fn test_stop_cluster_word_rejects_whole_chunk() {
        let ex = extractor(vec![]);
        let c = chunk(vec![
            token("webhook", "webhook", false),
            token("overview", "overview", false),
        ]);
        assert_eq!(ex.concept_from_chunk(&c), None);
    }

    #[test]
    fn test_extra_stop_clusters() {
        let ex = extractor(vec![]).with_extra_stop_clusters(["Gateway "]);
        let c = chunk(vec![token("api", "api", false), token("gateway", "gateway", false)]);
        assert_eq!(ex.concept_from_chunk(&c), None);
        assert!(ex.is_stop_cluster("page"));
    }

    #[test]
    fn test_short_concept_rejected() {
        let ex = extractor(vec![]);
        let c = chunk(vec![token("ab", "ab", false), token("cd", "cd", false)]);
        assert_eq!(ex.concept_from_chunk(&c), None);
    }

    #[test]
    fn test_extract_counts_per_chunk() {
        let ex = extractor(vec![chunk(vec![
            token("webhook", "webhook", false),
            token("retries", "retry", false),
        ])]);
        let paragraphs = vec!["one".to_string(), "two".to_string(), String::new()];
        let freq = ex.extract(&paragraphs);
        assert_eq!(freq.get("webhook retry"), Some(&2));
        assert_eq!(freq.len(), 1);
    }

    #[test]
    fn test_merge_frequencies() {
        let mut a = ConceptFrequency::from([("api gateway".to_string(), 2)]);
        let b = ConceptFrequency::from([
            ("api gateway".to_string(), 3),
            ("webhook retry".to_string(), 1),
        ]);
        merge_frequencies(&mut a, b);
        assert_eq!(a["api gateway"], 5);
        assert_eq!(a["webhook retry"], 1);
    }
}
