// Linguistic analysis: tokenization, word classes, lemmas and noun chunks.

pub mod chunker;
pub mod lemma;
pub mod lexicon;
pub mod tokenize;
pub mod traits;
