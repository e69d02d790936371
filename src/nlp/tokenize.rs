// Word tokenizer built on Unicode word boundaries (UAX #29).
//
// Whitespace segments are dropped but remembered as `space_before` on the
// following token, which the chunker needs to tell an intra-word hyphen
// ("real-time") from a dash between clauses. English clitics are split off
// the way most taggers expect: "don't" -> "do" + "n't", "API's" -> "API" + "'s".

use unicode_segmentation::UnicodeSegmentation;

/// Coarse shape of a raw token, decided from its characters alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    /// Contains at least one letter
    Word,
    /// Digits (possibly with separators), no letters
    Number,
    /// A split-off clitic such as `'s` or `n't`
    Clitic,
    /// Anything else
    Punct,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub text: String,
    pub shape: TokenShape,
    /// Whether whitespace separated this token from the previous one
    pub space_before: bool,
}

const CLITIC_TAILS: &[&str] = &["s", "t", "re", "ll", "ve", "d", "m"];

/// Split text into tokens. Never fails; empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut space_before = false;

    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            space_before = true;
            continue;
        }

        match split_clitic(segment) {
            Some((stem, clitic)) => {
                tokens.push(RawToken {
                    text: stem.to_string(),
                    shape: shape_of(stem),
                    space_before,
                });
                tokens.push(RawToken {
                    text: clitic.to_string(),
                    shape: TokenShape::Clitic,
                    space_before: false,
                });
            }
            None => tokens.push(RawToken {
                text: segment.to_string(),
                shape: shape_of(segment),
                space_before,
            }),
        }
        space_before = false;
    }

    tokens
}

/// Split a word segment into (stem, clitic) if it ends in a known clitic.
fn split_clitic(segment: &str) -> Option<(&str, &str)> {
    let (idx, apostrophe) = segment
        .char_indices()
        .find(|(_, c)| *c == '\'' || *c == '\u{2019}')?;
    if idx == 0 {
        return None;
    }

    let tail = &segment[idx + apostrophe.len_utf8()..];
    if !CLITIC_TAILS.iter().any(|c| tail.eq_ignore_ascii_case(c)) {
        return None;
    }

    let stem = &segment[..idx];
    // n't belongs to the clitic, not the verb: "doesn't" -> "does" + "n't"
    if tail.eq_ignore_ascii_case("t") && stem.len() > 1 && stem.ends_with(['n', 'N']) {
        let cut = stem.len() - 1;
        return Some((&segment[..cut], &segment[cut..]));
    }

    Some((stem, &segment[idx..]))
}

fn shape_of(text: &str) -> TokenShape {
    if text.chars().any(char::is_alphabetic) {
        TokenShape::Word
    } else if text.chars().any(char::is_numeric) {
        TokenShape::Number
    } else {
        TokenShape::Punct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[RawToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        let tokens = tokenize("Webhooks retry, then fail.");
        assert_eq!(texts(&tokens), vec!["Webhooks", "retry", ",", "then", "fail", "."]);
        assert_eq!(tokens[2].shape, TokenShape::Punct);
        assert!(tokens[1].space_before);
        assert!(!tokens[2].space_before);
    }

    #[test]
    fn test_negation_clitic() {
        let tokens = tokenize("It doesn't scale");
        assert_eq!(texts(&tokens), vec!["It", "does", "n't", "scale"]);
        assert_eq!(tokens[2].shape, TokenShape::Clitic);
    }

    #[test]
    fn test_possessive_clitic() {
        let tokens = tokenize("the company's gateway");
        assert_eq!(texts(&tokens), vec!["the", "company", "'s", "gateway"]);
    }

    #[test]
    fn test_hyphen_spacing() {
        let tokens = tokenize("real-time data");
        assert_eq!(texts(&tokens), vec!["real", "-", "time", "data"]);
        assert!(!tokens[1].space_before);
        assert!(!tokens[2].space_before);
        assert!(tokens[3].space_before);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("version 2024 release");
        assert_eq!(tokens[1].shape, TokenShape::Number);
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }
}
