// Rule-based English noun-phrase chunker.
//
// Tokens are tagged with a coarse word class from the lexicon, then grouped
// into noun chunks: optional determiners followed by a run of nominal or
// numeric tokens. Possessive 's and intra-word hyphens stay inside a chunk,
// so "the company's real-time API gateways" is a single chunk. Verbs,
// prepositions, conjunctions, pronouns, adverbs and punctuation end a chunk.

use std::collections::HashSet;

use anyhow::Result;
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::lemma::singularize;
use super::lexicon::{classify, WordClass};
use super::tokenize::{tokenize, RawToken, TokenShape};
use super::traits::{ChunkToken, LanguageModel, NounChunk};

/// Role a token plays in chunk construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// May open a chunk, never ends one
    Determiner,
    /// Noun or modifier, the body of a chunk
    Nominal,
    /// Digits inside a chunk ("top 10 tools")
    Numeral,
    /// Possessive 's or an intra-word hyphen; only valid inside a chunk
    Joiner,
    /// Closes any open chunk
    Break,
}

/// The default language model: lexicon-driven chunking with a noun
/// lemmatizer and the `stop-words` English list.
pub struct RuleChunker {
    stop_words: HashSet<String>,
}

impl RuleChunker {
    /// Load the chunker's resources. Fails if the English stop-word list
    /// cannot be loaded, since every concept depends on it.
    pub fn load() -> Result<Self> {
        let words: Vec<String> = get(LANGUAGE::English);
        let chunker = Self::with_stop_words(words)?;
        info!(
            stop_words = chunker.stop_words.len(),
            "Loaded rule-based noun chunker"
        );
        Ok(chunker)
    }

    /// Build a chunker over an explicit stop-word list.
    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if stop_words.is_empty() {
            anyhow::bail!("English stop-word list is empty, cannot initialize the noun chunker");
        }

        Ok(Self { stop_words })
    }

    fn to_chunk_token(&self, raw: &RawToken, role: Role) -> ChunkToken {
        let lower = raw.text.to_lowercase();
        let lemma = if role == Role::Nominal {
            singularize(&lower)
        } else {
            lower.clone()
        };

        ChunkToken {
            is_stop: self.stop_words.contains(&lower),
            is_alpha: !raw.text.is_empty() && raw.text.chars().all(char::is_alphabetic),
            text: raw.text.clone(),
            lemma,
        }
    }
}

impl LanguageModel for RuleChunker {
    fn noun_chunks(&self, text: &str) -> Vec<NounChunk> {
        let tokens = tokenize(text);
        let roles = assign_roles(&tokens);

        chunk_spans(&roles)
            .into_iter()
            .map(|(start, end)| NounChunk {
                tokens: (start..end)
                    .map(|i| self.to_chunk_token(&tokens[i], roles[i]))
                    .collect(),
            })
            .collect()
    }
}

/// Decide each token's role, left to right. A token's role can depend on
/// the previous token (verbs after determiners read as nouns) and on whether
/// a chunk is currently open.
fn assign_roles(tokens: &[RawToken]) -> Vec<Role> {
    let mut roles: Vec<Role> = Vec::with_capacity(tokens.len());
    let mut prev_class: Option<WordClass> = None;

    for (i, token) in tokens.iter().enumerate() {
        let prev_role = roles.last().copied();
        let in_chunk = matches!(
            prev_role,
            Some(Role::Determiner | Role::Nominal | Role::Numeral | Role::Joiner)
        );

        let (role, class) = match token.shape {
            TokenShape::Number => (Role::Numeral, None),
            TokenShape::Clitic => {
                let is_possessive = token.text.len() > 1
                    && token.text[token.text.len() - 1..].eq_ignore_ascii_case("s");
                let role = if is_possessive && matches!(prev_role, Some(Role::Nominal)) {
                    Role::Joiner
                } else {
                    Role::Break
                };
                (role, None)
            }
            TokenShape::Punct => {
                let joins_words = token.text == "-"
                    && !token.space_before
                    && matches!(prev_role, Some(Role::Nominal))
                    && tokens
                        .get(i + 1)
                        .is_some_and(|next| next.shape == TokenShape::Word && !next.space_before);
                (if joins_words { Role::Joiner } else { Role::Break }, None)
            }
            TokenShape::Word => {
                let class = classify(&token.text.to_lowercase());
                let role = match class {
                    WordClass::Determiner => Role::Determiner,
                    WordClass::Nominal => Role::Nominal,
                    // "the use", "a build": a verb right after a determiner or
                    // possessive is a noun
                    WordClass::Verb => {
                        if in_chunk && matches!(prev_role, Some(Role::Determiner | Role::Joiner)) {
                            Role::Nominal
                        } else {
                            Role::Break
                        }
                    }
                    // "caching" is nominal; "is caching" / "we're making" is not
                    WordClass::Gerund => match prev_class {
                        Some(WordClass::Auxiliary | WordClass::Pronoun) => Role::Break,
                        _ if prev_role == Some(Role::Break)
                            && tokens[i - 1].shape == TokenShape::Clitic =>
                        {
                            Role::Break
                        }
                        _ => Role::Nominal,
                    },
                    _ => Role::Break,
                };
                (role, Some(class))
            }
        };

        roles.push(role);
        prev_class = class;
    }

    roles
}

/// Group roles into half-open `[start, end)` chunk spans.
fn chunk_spans(roles: &[Role]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut has_body = false;

    for (i, role) in roles.iter().enumerate() {
        match role {
            Role::Determiner => {
                // A determiner after the chunk body starts a new phrase
                if let Some(s) = start {
                    if has_body {
                        push_span(&mut spans, roles, s, i);
                        start = Some(i);
                        has_body = false;
                    }
                } else {
                    start = Some(i);
                }
            }
            Role::Nominal | Role::Numeral => {
                if start.is_none() {
                    start = Some(i);
                }
                has_body = true;
            }
            Role::Joiner => {}
            Role::Break => {
                if let Some(s) = start.take() {
                    push_span(&mut spans, roles, s, i);
                }
                has_body = false;
            }
        }
    }
    if let Some(s) = start {
        push_span(&mut spans, roles, s, roles.len());
    }

    spans
}

/// Trim trailing determiners and joiners, then keep the span only if it
/// still contains a nominal token.
fn push_span(spans: &mut Vec<(usize, usize)>, roles: &[Role], start: usize, mut end: usize) {
    while end > start && matches!(roles[end - 1], Role::Determiner | Role::Joiner) {
        end -= 1;
    }
    if roles[start..end].contains(&Role::Nominal) {
        spans.push((start, end));
    }
}
