// HTML cleanup: paragraph text with page chrome removed.
//
// Text inside script, style, nav, footer and header elements is ignored,
// including whole paragraphs nested inside them. Each <p> contributes the
// concatenation of its remaining text nodes, trimmed.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("static selector"));

const IGNORED_ELEMENTS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Trimmed text of every `<p>` longer than `min_chars` characters.
pub fn extract_paragraphs(html: &str, min_chars: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut paragraphs = Vec::new();

    for p in document.select(&PARAGRAPH_SELECTOR) {
        let mut text = String::new();
        for node in p.descendants() {
            let Some(t) = node.value().as_text() else {
                continue;
            };
            let ignored = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| IGNORED_ELEMENTS.contains(&el.name()))
            });
            if !ignored {
                text.push_str(t);
            }
        }

        let text = text.trim();
        if text.chars().count() > min_chars {
            paragraphs.push(text.to_string());
        }
    }

    paragraphs
}
