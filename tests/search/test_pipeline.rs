// tests/search/test_pipeline.rs
// Wire payload through formatting, deduplication and keyword extraction

use serde_json::json;

use newsift::format::NewsFormatter;
use newsift::types::{NewsItem, RawNewsItem};
use newsift::{dedupe, duplicate_count, top_keywords};

/// A provider response the way it comes off the wire: markup in titles,
/// escaped entities, and one story syndicated twice.
fn wire_items() -> Vec<RawNewsItem> {
    let payload = json!({
        "lastBuildDate": "Mon, 06 Jan 2025 10:00:00 +0900",
        "total": 312,
        "start": 1,
        "display": 5,
        "items": [
            {
                "title": "<b>Exchange rate</b> slides to a five month low",
                "originallink": "https://press.example.com/fx-low",
                "link": "https://news.example.com/read/101",
                "description": "Dealers cite &quot;one sided&quot; positioning",
                "pubDate": "Mon, 06 Jan 2025 09:40:00 +0900"
            },
            {
                "title": "Port authority expands container terminal",
                "originallink": "https://press.example.com/port-terminal",
                "link": "https://news.example.com/read/102",
                "description": "Second berth opens in the spring",
                "pubDate": "Mon, 06 Jan 2025 09:30:00 +0900"
            },
            {
                "title": "Exchange rate slides to a five month low",
                "originallink": "",
                "link": "https://news.example.com/read/103",
                "description": "Dealers cite one sided positioning",
                "pubDate": "Mon, 06 Jan 2025 09:10:00 +0900"
            },
            {
                "title": "Airline adds direct flights from Busan",
                "originallink": "https://press.example.com/busan-flights",
                "link": "https://news.example.com/read/104",
                "description": "Twice weekly service starting October",
                "pubDate": "Mon, 06 Jan 2025 09:00:00 +0900"
            },
            {
                "title": "Exhibition of Joseon ceramics opens",
                "originallink": "https://press.example.com/ceramics",
                "link": "https://news.example.com/read/105",
                "description": "Collection loaned from three museums",
                "pubDate": "Mon, 06 Jan 2025 08:50:00 +0900"
            }
        ]
    });

    serde_json::from_value(payload["items"].clone()).unwrap()
}

fn formatted() -> Vec<NewsItem> {
    NewsFormatter::new().format_page(wire_items())
}

#[test]
fn test_formatting_strips_markup_across_the_page() {
    let items = formatted();

    assert_eq!(items.len(), 5);
    assert_eq!(items[0].title, "Exchange rate slides to a five month low");
    assert_eq!(
        items[0].description,
        "Dealers cite \"one sided\" positioning"
    );
    // Untouched fields pass through as-is.
    assert_eq!(items[0].link, "https://news.example.com/read/101");
    assert_eq!(items[0].pub_date, "Mon, 06 Jan 2025 09:40:00 +0900");
}

#[test]
fn test_dedupe_collapses_the_syndicated_story() {
    let items = formatted();

    let unique = dedupe(&items, 0.7);
    assert_eq!(unique.len(), 4);
    assert_eq!(duplicate_count(&items, 0.7), 1);

    // The newest copy survives and order is newest first.
    let titles: Vec<&str> = unique.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Exchange rate slides to a five month low",
            "Port authority expands container terminal",
            "Airline adds direct flights from Busan",
            "Exhibition of Joseon ceramics opens"
        ]
    );
    assert_eq!(unique[0].link, "https://news.example.com/read/101");
}

#[test]
fn test_keywords_reflect_the_repeated_story_terms() {
    let items = formatted();
    let keywords = top_keywords(&items, 3);
    assert_eq!(keywords, vec!["Exchange", "rate", "slides"]);
}

#[test]
fn test_syndicated_copies_keep_distinct_keys() {
    let items = formatted();

    // Same headline, different provider link: still separately
    // addressable for enrichment joins.
    assert_eq!(items[0].title, items[2].title);
    assert_ne!(items[0].key(), items[2].key());

    // The repost has no publisher link, so content fetching falls back
    // to the provider-hosted one.
    assert_eq!(items[2].content_url(), "https://news.example.com/read/103");
    assert_eq!(items[0].content_url(), "https://press.example.com/fx-low");
}
