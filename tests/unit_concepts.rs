// Unit tests for concept extraction and clustering.
//
// Runs the rule-based chunker end to end over short paragraphs with a small
// explicit stop-word list, so the expected concepts are predictable.

use std::sync::Arc;

use topicgap::concepts::cluster::build_clusters;
use topicgap::concepts::extract::{merge_frequencies, ConceptExtractor, ConceptFrequency};
use topicgap::nlp::chunker::RuleChunker;
use topicgap::nlp::traits::LanguageModel;

fn extractor() -> ConceptExtractor {
    let model: Arc<dyn LanguageModel> = Arc::new(
        RuleChunker::with_stop_words(["the", "a", "an", "and", "of", "our", "we"]).unwrap(),
    );
    ConceptExtractor::new(model)
}

fn paragraphs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

// ============================================================
// Extraction
// ============================================================

#[test]
fn concepts_are_lemmatized_and_counted() {
    let freq = extractor().extract(&paragraphs(&[
        "Webhook signatures protect payment gateways.",
        "The webhook signatures verify the payment gateway.",
    ]));
    assert_eq!(freq.len(), 2);
    assert_eq!(freq["webhook signature"], 2);
    assert_eq!(freq["payment gateway"], 2);
}

#[test]
fn stop_words_are_removed_from_concepts() {
    let freq = extractor().extract(&paragraphs(&["The payment gateway."]));
    assert!(freq.contains_key("payment gateway"));
    assert!(freq.keys().all(|c| !c.split(' ').any(|t| t == "the")));
}

#[test]
fn stop_cluster_word_drops_whole_concept() {
    let freq = extractor().extract(&paragraphs(&[
        "The page layout and the webhook signature.",
    ]));
    assert_eq!(freq.len(), 1);
    assert_eq!(freq["webhook signature"], 1);
}

#[test]
fn people_chunks_are_stop_clusters() {
    let freq = extractor().extract(&paragraphs(&[
        "Modern people analytics platforms help teams.",
        "The people team and the webhook signature.",
    ]));
    assert!(freq
        .keys()
        .all(|c| !c.split(' ').any(|t| t == "people" || t == "person")));
    assert_eq!(freq["webhook signature"], 1);
}

#[test]
fn non_ascii_inflected_words_do_not_panic() {
    let freq = extractor().extract(&paragraphs(&[
        "\u{ACB2}ing platform reviews are popular",
        "\u{ACB2}\u{ACB2}ed caf\u{E9}\u{E9}ing webhook signatures.",
    ]));
    assert!(freq.keys().all(|c| c.split(' ').count() >= 2));
}

#[test]
fn single_token_chunks_are_not_concepts() {
    let freq = extractor().extract(&paragraphs(&["Webhooks."]));
    assert!(freq.is_empty());
}

#[test]
fn chunks_longer_than_five_tokens_are_dropped() {
    let freq = extractor().extract(&paragraphs(&[
        "The webhook signature verification endpoint latency budget.",
    ]));
    assert!(freq.is_empty());
}

#[test]
fn concepts_shorter_than_six_chars_are_dropped() {
    let freq = extractor().extract(&paragraphs(&["Ab cd."]));
    assert!(freq.is_empty());
}

#[test]
fn every_concept_satisfies_shape_invariants() {
    let freq = extractor().extract(&paragraphs(&[
        "The payment gateway handles refunds, chargebacks and webhook retries.",
        "Our webhook delivery system retries failed events with exponential backoff.",
        "Top 10 payment providers offer real-time fraud detection.",
    ]));
    assert!(!freq.is_empty());
    for concept in freq.keys() {
        let tokens: Vec<&str> = concept.split(' ').collect();
        assert!((2..=5).contains(&tokens.len()), "{concept}");
        assert!(concept.chars().count() >= 6, "{concept}");
        assert!(
            tokens.iter().all(|t| t.chars().all(char::is_alphabetic)),
            "{concept}"
        );
        assert_eq!(concept.to_lowercase(), *concept);
    }
}

#[test]
fn extra_stop_clusters_extend_builtin_list() {
    let extractor = extractor().with_extra_stop_clusters(["Payment"]);
    let freq = extractor.extract(&paragraphs(&[
        "Webhook signatures protect payment gateways.",
    ]));
    assert_eq!(freq.len(), 1);
    assert!(freq.contains_key("webhook signature"));
    assert!(extractor.is_stop_cluster("article"));
}

#[test]
fn empty_corpus_yields_nothing() {
    assert!(extractor().extract(&[]).is_empty());
    assert!(extractor().extract(&paragraphs(&["", "   "])).is_empty());
}

// ============================================================
// Clustering
// ============================================================

#[test]
fn cluster_totals_sum_member_frequencies() {
    let freq = extractor().extract(&paragraphs(&[
        "Webhook signatures protect payment gateways.",
        "Webhook retries follow the webhook signature.",
    ]));
    let clusters = build_clusters(&freq);

    for (head, cluster) in &clusters {
        let sum: u32 = cluster.concepts.iter().map(|(_, n)| n).sum();
        assert_eq!(cluster.total_freq, sum, "{head}");
        assert!(head.chars().count() >= 4);
        assert!(cluster
            .concepts
            .iter()
            .all(|(c, _)| c.split(' ').next() == Some(head.as_str())));
    }
    assert_eq!(clusters["webhook"].total_freq, 3);
}

#[test]
fn merged_competitor_corpora_add_up() {
    let extractor = extractor();
    let mut merged = ConceptFrequency::new();
    merge_frequencies(
        &mut merged,
        extractor.extract(&paragraphs(&["Webhook signatures protect payment gateways."])),
    );
    merge_frequencies(
        &mut merged,
        extractor.extract(&paragraphs(&["The payment gateway."])),
    );
    assert_eq!(merged["payment gateway"], 2);
    assert_eq!(merged["webhook signature"], 1);
}
