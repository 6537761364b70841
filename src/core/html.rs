// src/core/html.rs
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

static ARTICLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("static selector"));

/// Visible text of an element, whitespace collapsed.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of a `<pre>` block with its line structure kept.
fn preformatted_text(el: ElementRef<'_>) -> String {
    let raw = el.text().collect::<String>();
    raw.trim_end_matches('\n').to_string()
}

/// Instructions from the first `<article>` of a puzzle page.
/// One entry per child element; paragraphs get a trailing blank line.
pub fn first_article_text(page: &str) -> Option<String> {
    let doc = Html::parse_document(page);
    let article = doc.select(&ARTICLE).next()?;

    let mut parts = Vec::new();
    for child in article.children().filter_map(ElementRef::wrap) {
        let tag = child.value().name();
        let text = match tag {
            "pre" => preformatted_text(child),
            _     => element_text(child),
        };
        if tag == "p" {
            parts.push(join!(text, "\n"));
        } else {
            parts.push(text);
        }
    }
    if parts.is_empty() { None } else { Some(parts.join("\n")) }
}
