// Noun lemmatizer: reduces English plural nouns to their singular form.
//
// Only nominal tokens are lemmatized; function words never reach a concept.
// Input must already be lowercase.

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("criteria", "criterion"),
    ("analyses", "analysis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("phenomena", "phenomenon"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("quizzes", "quiz"),
    ("caches", "cache"),
    ("niches", "niche"),
    ("headaches", "headache"),
    ("avalanches", "avalanche"),
];

/// Words ending in -s that are not plurals.
const INVARIANT: &[&str] = &[
    "series", "species", "news", "analytics", "physics", "mathematics", "economics", "ethics",
    "logistics", "statistics", "kubernetes", "status", "bus", "gas", "lens", "canvas", "bias",
    "alias", "atlas", "chaos", "dns", "aws", "https", "ios", "macos", "windows", "always",
    "perhaps", "its", "yes", "plus", "bonus", "campus", "virus", "corpus", "thesis", "basis",
    "crisis", "analysis", "diagnosis", "axis", "tennis", "sales", "ops", "devops", "jenkins",
    "redis", "postgres", "whereas",
];

/// Singularize a lowercase word if it looks like a regular English plural.
pub fn singularize(lower: &str) -> String {
    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == lower) {
        return (*singular).to_string();
    }
    if INVARIANT.contains(&lower) || lower.chars().count() <= 3 {
        return lower.to_string();
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower.to_string();
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["sses", "ches", "shes", "xes", "zzes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    match lower.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => lower.to_string(),
    }
}
