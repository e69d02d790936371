// Closed-class English word lists and a coarse word-class guesser.
//
// This is not a part-of-speech tagger. It only needs to be good enough to
// find the boundaries of noun phrases: function words and frequent verbs end
// a phrase, everything else is assumed to be nominal (nouns, adjectives,
// proper nouns). Lists are lowercase.

/// Coarse word class used by the chunker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Auxiliary,
    Adverb,
    /// A lexicon verb in base or inflected form (not -ing)
    Verb,
    /// The -ing form of a lexicon verb
    Gerund,
    /// Nouns, adjectives and anything not covered above
    Nominal,
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "no", "every", "each", "all", "both", "either", "neither", "much",
    "many", "few", "several", "such", "another", "what", "which", "whose",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself", "yourself",
    "yourselves", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "mine", "yours", "hers", "ours", "theirs", "something", "anything", "everything", "nothing",
    "someone", "anyone", "everyone", "nobody", "somebody", "anybody", "everybody", "there",
    "here",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "amongst",
    "around", "as", "at", "before", "behind", "below", "beneath", "beside", "besides", "between",
    "beyond", "by", "despite", "down", "during", "except", "for", "from", "in", "inside", "into",
    "like", "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "per", "since",
    "than", "through", "throughout", "till", "to", "toward", "towards", "under", "underneath",
    "unlike", "until", "up", "upon", "versus", "via", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "though",
    "whether", "unless", "whereas", "once",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "done",
    "have", "has", "had", "having", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must", "ought", "ca", "wo", "sha",
];

const ADVERBS: &[&str] = &[
    "not", "never", "always", "often", "also", "very", "too", "just", "only", "even", "still",
    "already", "again", "soon", "now", "then", "quite", "rather", "almost", "perhaps", "maybe",
    "sometimes", "however", "therefore", "thus", "instead", "together", "furthermore",
    "moreover", "else", "ever", "when", "where", "why", "how", "whenever", "wherever", "well",
    "later", "first", "finally", "simply",
];

/// Words ending in -ly that are nouns or attributive adjectives, not adverbs.
const LY_NOMINALS: &[&str] = &[
    "family", "supply", "assembly", "reply", "anomaly", "rally", "ally", "italy", "july",
    "daily", "weekly", "monthly", "quarterly", "yearly", "hourly", "friendly", "early", "costly",
    "lovely", "jelly", "belly", "bully", "holy", "ugly", "silly", "fly", "butterfly", "monopoly",
    "homily", "lily",
];

/// Frequent verbs that are rarely used as nouns. Deliberately excludes
/// noun-heavy verbs ("support", "limit", "test") so compounds like
/// "customer support team" stay in one chunk.
const VERBS: &[&str] = &[
    "accept", "achieve", "add", "affect", "allow", "analyze", "apply", "arrive", "ask", "avoid",
    "become", "begin", "believe", "bring", "buy", "carry", "cause", "choose", "come", "compare",
    "consider", "contain", "continue", "create", "decide", "define", "deliver", "depend",
    "describe", "determine", "develop", "discover", "discuss", "enable", "encourage", "ensure",
    "establish", "evaluate", "exist", "expect", "explain", "explore", "find", "follow", "get",
    "give", "go", "grow", "handle", "happen", "identify", "implement", "improve", "include",
    "indicate", "integrate", "introduce", "involve", "keep", "know", "learn", "leave", "let",
    "leverage", "live", "lose", "maintain", "make", "manage", "mean", "meet", "move", "offer",
    "perform", "prevent", "produce", "protect", "provide", "put", "receive", "reduce",
    "reflect", "remain", "remember", "remove", "replace", "represent", "require", "reveal",
    "say", "see", "seem", "send", "serve", "simplify", "solve", "speak", "spend", "stay",
    "suggest", "take", "talk", "tell", "tend", "think", "try", "understand", "use", "want",
    "write", "configure", "deploy", "fail", "verify", "validate", "expose", "accelerate",
    "optimize",
];

const IRREGULAR_VERB_FORMS: &[&str] = &[
    "made", "got", "gotten", "gave", "given", "took", "taken", "kept", "knew", "known",
    "thought", "led", "chose", "chosen", "became", "began", "begun", "brought", "bought",
    "wrote", "written", "said", "told", "went", "gone", "came", "saw", "seen", "found", "built",
    "sent", "spent", "meant", "left", "lost", "held", "grew", "grown", "ran", "felt",
];

/// Guess the word class of a lowercased word.
pub fn classify(lower: &str) -> WordClass {
    if DETERMINERS.contains(&lower) {
        WordClass::Determiner
    } else if PRONOUNS.contains(&lower) {
        WordClass::Pronoun
    } else if PREPOSITIONS.contains(&lower) {
        WordClass::Preposition
    } else if CONJUNCTIONS.contains(&lower) {
        WordClass::Conjunction
    } else if AUXILIARIES.contains(&lower) {
        WordClass::Auxiliary
    } else if ADVERBS.contains(&lower) {
        WordClass::Adverb
    } else if IRREGULAR_VERB_FORMS.contains(&lower) {
        WordClass::Verb
    } else if let Some(class) = verb_inflection(lower) {
        class
    } else if is_ly_adverb(lower) {
        WordClass::Adverb
    } else {
        WordClass::Nominal
    }
}

fn is_ly_adverb(lower: &str) -> bool {
    lower.len() > 4 && lower.ends_with("ly") && !LY_NOMINALS.contains(&lower)
}

/// Recognize base and regular inflected forms of a lexicon verb.
fn verb_inflection(lower: &str) -> Option<WordClass> {
    if VERBS.contains(&lower) {
        return Some(WordClass::Verb);
    }

    if let Some(stem) = lower.strip_suffix("ing") {
        let is_verb = base_candidates(stem).iter().any(|c| VERBS.contains(&c.as_str()));
        return is_verb.then_some(WordClass::Gerund);
    }

    let mut candidates = Vec::new();
    if let Some(stem) = lower.strip_suffix("ies") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = lower.strip_suffix("es") {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = lower.strip_suffix('s') {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        candidates.extend(base_candidates(stem));
    }
    if let Some(stem) = lower.strip_suffix('d') {
        candidates.push(stem.to_string());
    }

    candidates
        .iter()
        .any(|c| VERBS.contains(&c.as_str()))
        .then_some(WordClass::Verb)
}

/// Possible base forms for a stem left after removing -ed or -ing:
/// the stem itself, the stem plus a silent e, and the stem with a doubled
/// final consonant undone ("stopp" -> "stop").
fn base_candidates(stem: &str) -> Vec<String> {
    let mut out = vec![stem.to_string(), format!("{stem}e")];
    let mut tail = stem.chars().rev();
    if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
        if last == prev {
            out.push(stem[..stem.len() - last.len_utf8()].to_string());
        }
    }
    out
}
