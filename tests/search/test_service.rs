// tests/search/test_service.rs
// Plain search, request validation, rate limiting, provider failures

use std::sync::Arc;

use newsift::config::NewsConfig;
use newsift::service::NewsService;
use newsift::types::{SearchError, SortMode};

use super::support::{distinct_stories, raw_item, ErrorProvider, ScriptedProvider};

#[tokio::test]
async fn test_search_fetches_exactly_the_requested_count_once() {
    let stories = distinct_stories();
    let mut store = Vec::new();
    store.push(raw_item(stories[0].0, stories[0].1, 0));
    store.push(raw_item(stories[1].0, stories[1].1, 1));
    // An exact repost sits in the page; plain search must keep it.
    store.push(raw_item(stories[0].0, stories[0].1, 2));
    store.push(raw_item(stories[2].0, stories[2].1, 3));
    store.push(raw_item(stories[3].0, stories[3].1, 4));
    store.push(raw_item(stories[4].0, stories[4].1, 5));

    let provider = Arc::new(ScriptedProvider::new(store));
    let service = NewsService::with_provider(provider.clone(), NewsConfig::default());

    let items = service.search("economy", 5, SortMode::Date).await.unwrap();

    assert_eq!(provider.recorded_calls(), vec![(5, 1)]);
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            stories[0].0,
            stories[1].0,
            stories[0].0,
            stories[2].0,
            stories[3].0
        ]
    );
}

#[tokio::test]
async fn test_search_sanitizes_markup_in_titles() {
    let store = vec![raw_item(
        "<b>Chipmaker</b> unveils &quot;2nm&quot; fabrication plant",
        "Construction begins near Pyeongtaek",
        0,
    )];
    let provider = Arc::new(ScriptedProvider::new(store));
    let service = NewsService::with_provider(provider, NewsConfig::default());

    let items = service
        .search("chips", 3, SortMode::Relevance)
        .await
        .unwrap();
    assert_eq!(items[0].title, "Chipmaker unveils \"2nm\" fabrication plant");
}

#[tokio::test]
async fn test_rate_limit_kicks_in_after_burst() {
    let stories = distinct_stories();
    let store: Vec<_> = stories[..4]
        .iter()
        .enumerate()
        .map(|(i, (title, desc))| raw_item(title, desc, i as i64))
        .collect();

    let provider = Arc::new(ScriptedProvider::new(store));
    let config = NewsConfig {
        rate_limit_per_minute: 2,
        ..NewsConfig::default()
    };
    let service = NewsService::with_provider(provider.clone(), config);

    assert!(service.search("a", 2, SortMode::Date).await.is_ok());
    assert!(service.search("b", 2, SortMode::Date).await.is_ok());

    let third = service.search("c", 2, SortMode::Date).await;
    assert!(matches!(
        third,
        Err(SearchError::RateLimited {
            retry_after_secs: 60
        })
    ));
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_rate_limit_applies_per_fetch_round() {
    // Eight reposts force a second round; with one request per minute
    // the second round is refused.
    let mut store = Vec::new();
    for i in 0..8 {
        store.push(raw_item(
            "Ferry service resumes after strike",
            "Morning crossings back on schedule",
            i,
        ));
    }

    let provider = Arc::new(ScriptedProvider::new(store));
    let config = NewsConfig {
        rate_limit_per_minute: 1,
        ..NewsConfig::default()
    };
    let service = NewsService::with_provider(provider.clone(), config);

    let result = service.search_unique("ferry", 2, SortMode::Date, None).await;
    assert!(matches!(result, Err(SearchError::RateLimited { .. })));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_provider_errors_abort_the_search() {
    let service = NewsService::with_provider(Arc::new(ErrorProvider), NewsConfig::default());
    let result = service.search_unique("news", 5, SortMode::Date, None).await;

    match result {
        Err(SearchError::ApiError { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_requests_never_reach_the_provider() {
    let provider = Arc::new(ScriptedProvider::new(Vec::new()));
    let service = NewsService::with_provider(provider.clone(), NewsConfig::default());

    let result = service.search("   ", 5, SortMode::Date).await;
    assert!(matches!(result, Err(SearchError::InvalidQuery { .. })));

    let result = service.search_unique("news", 0, SortMode::Date, None).await;
    assert!(matches!(result, Err(SearchError::InvalidQuery { .. })));

    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_concurrent_searches_share_the_service() {
    let stories = distinct_stories();
    let store: Vec<_> = stories[..6]
        .iter()
        .enumerate()
        .map(|(i, (title, desc))| raw_item(title, desc, i as i64))
        .collect();

    let provider = Arc::new(ScriptedProvider::new(store));
    let service = NewsService::with_provider(provider.clone(), NewsConfig::default());

    let (a, b) = futures::future::join(
        service.search("first", 3, SortMode::Date),
        service.search("second", 3, SortMode::Relevance),
    )
    .await;

    assert_eq!(a.unwrap().len(), 3);
    assert_eq!(b.unwrap().len(), 3);
    assert_eq!(provider.call_count(), 2);
}

#[test]
fn test_provider_name_reports_backing_provider() {
    let service = NewsService::with_provider(Arc::new(ErrorProvider), NewsConfig::default());
    assert_eq!(service.provider_name(), "failing");
}
