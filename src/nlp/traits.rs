// Language model trait: the seam between concept extraction and noun-phrase chunking.
//
// The concept extractor only needs noun chunks with a lemma, a stop-word flag
// and an alphabetic flag per token. The default implementation is the
// rule-based English chunker in `chunker.rs`; a statistical tagger could be
// dropped in behind the same trait.

/// One token of a noun chunk, as seen by the concept extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkToken {
    /// Surface form as it appeared in the text
    pub text: String,
    /// Lowercased base form (plural nouns are singularized)
    pub lemma: String,
    /// True when the lowercased surface form is an English stop word
    pub is_stop: bool,
    /// True when the surface form consists only of alphabetic characters
    pub is_alpha: bool,
}

/// A contiguous noun phrase, tokens in text order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NounChunk {
    pub tokens: Vec<ChunkToken>,
}

impl NounChunk {
    /// The chunk's surface text, tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for splitting text into noun chunks. Loaded once per process and
/// shared read-only, hence `Send + Sync`.
pub trait LanguageModel: Send + Sync {
    /// Analyze a piece of text and return its noun chunks in text order.
    /// Empty or unparseable text yields no chunks.
    fn noun_chunks(&self, text: &str) -> Vec<NounChunk>;
}
