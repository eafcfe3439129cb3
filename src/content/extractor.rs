//! HTML article text extraction
//!
//! Extracts the main article body from news pages using CSS selectors.

use scraper::{Html, Selector};

/// Extract article text from HTML
///
/// Tries selectors in priority order: the portal-specific article
/// containers first, then semantic HTML5 elements, then common content
/// class names, finally falling back to the whole `<body>`. The first
/// selector yielding substantial text (over 200 characters after
/// cleanup) wins.
///
/// # Arguments
/// * `html` - Raw HTML string
/// * `max_chars` - Maximum characters to return
///
/// # Returns
/// Extracted text, whitespace-normalized and truncated at a word
/// boundary. Empty string when the document has no usable text.
pub fn extract_article_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);

    let selectors = [
        "article#dic_area",    // Naver news
        "#articleBodyContents", // Naver news (legacy)
        ".article_body",
        ".article_viewer",
        "#articeBody",         // Naver entertainment (sic)
        "article",
        "main",
        "[role='main']",
        ".post-content",
        ".article-content",
        ".entry-content",
        ".story-body",
        ".article__body",
        ".content-body",
        "#article-body",
        "#content",
    ];

    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = element_text(&element);
                let cleaned = clean_text(&text);
                if cleaned.chars().count() > 200 {
                    return truncate_text(&cleaned, max_chars);
                }
            }
        }
    }

    body_text(&document, max_chars)
}

/// Collect the text nodes of an element, tags stripped
fn element_text(element: &scraper::ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

/// Last resort: all body text
fn body_text(document: &Html, max_chars: usize) -> String {
    if let Ok(body_selector) = Selector::parse("body") {
        if let Some(body) = document.select(&body_selector).next() {
            let cleaned = clean_text(&element_text(&body));
            return truncate_text(&cleaned, max_chars);
        }
    }
    String::new()
}

/// Normalize whitespace: collapse runs, drop blank lines
fn clean_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Truncate to `max_chars` characters at a word boundary. Counts
/// characters, not bytes, so multi-byte article text never splits
/// mid-character.
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(last_space) => format!("{}...", &cut[..last_space]),
        None => format!("{}...", cut),
    }
}
