//! Title and description extraction from raw page markup.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector"));

static META_NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name]").expect("meta name selector"));

static META_PROPERTY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property]").expect("meta property selector"));

/// What a bookmark learns from its page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub description: String,
}

/// Best-effort extraction; malformed markup degrades to empty fields.
///
/// - title: text of the first `<title>`, trimmed
/// - description: `<meta name="description">` content, else `og:description`
pub fn extract(markup: &str) -> PageSummary {
    let doc = Html::parse_document(markup);

    let title = doc
        .select(&TITLE_SEL)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let description = meta_content(&doc, &META_NAME_SEL, "name", "description")
        .or_else(|| meta_content(&doc, &META_PROPERTY_SEL, "property", "og:description"))
        .unwrap_or_default();

    PageSummary { title, description }
}

fn meta_content(doc: &Html, selector: &Selector, attr: &str, key: &str) -> Option<String> {
    doc.select(selector)
        .find(|el| attr_eq(el, attr, key))
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
}

fn attr_eq(el: &ElementRef<'_>, attr: &str, expected: &str) -> bool {
    el.value()
        .attr(attr)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
}
