// tests/search/support.rs
// Scripted provider and shared fixtures for the search service tests

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Mutex;

use newsift::provider::NewsProvider;
use newsift::types::{RawNewsItem, SearchError, SortMode};

/// Provider backed by a fixed item list. Serves `page_size` items from
/// the 1-based `page_start` offset the way a real paging API would, and
/// records every call it receives.
pub struct ScriptedProvider {
    store: Vec<RawNewsItem>,
    calls: Mutex<Vec<(usize, usize)>>,
}

impl ScriptedProvider {
    pub fn new(store: Vec<RawNewsItem>) -> Self {
        Self {
            store,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Recorded (page_size, page_start) pairs, in call order
    pub fn recorded_calls(&self) -> Vec<(usize, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsProvider for ScriptedProvider {
    async fn fetch_page(
        &self,
        _query: &str,
        page_size: usize,
        page_start: usize,
        _sort: SortMode,
    ) -> Result<Vec<RawNewsItem>, SearchError> {
        self.calls.lock().unwrap().push((page_size, page_start));
        let from = (page_start - 1).min(self.store.len());
        let to = (from + page_size).min(self.store.len());
        Ok(self.store[from..to].to_vec())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Provider that fails every fetch with a backend error
pub struct ErrorProvider;

#[async_trait]
impl NewsProvider for ErrorProvider {
    async fn fetch_page(
        &self,
        _query: &str,
        _page_size: usize,
        _page_start: usize,
        _sort: SortMode,
    ) -> Result<Vec<RawNewsItem>, SearchError> {
        Err(SearchError::ApiError {
            status: 500,
            message: "backend unavailable".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Build a raw item published `minutes_ago` minutes in the past. The
/// title doubles as the link slug so exact copies share a URL, the way
/// syndicated reposts do.
pub fn raw_item(title: &str, description: &str, minutes_ago: i64) -> RawNewsItem {
    let published = Utc::now() - Duration::minutes(minutes_ago);
    let slug = title.to_lowercase().replace(' ', "-");
    RawNewsItem {
        title: title.to_string(),
        description: description.to_string(),
        link: format!("https://news.example.com/read/{}", slug),
        originallink: format!("https://press.example.com/{}", slug),
        pub_date: published.to_rfc2822(),
    }
}

/// Eighteen stories with pairwise-dissimilar titles and descriptions,
/// all comfortably below a 0.7 similarity threshold.
pub fn distinct_stories() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Central bank holds interest rates steady",
            "Policy committee votes seven to two",
        ),
        (
            "Typhoon forces port closures in the south",
            "Shipping lanes shut for a second day",
        ),
        (
            "Chipmaker unveils 2nm fabrication plant",
            "Construction begins near Pyeongtaek",
        ),
        (
            "Football league postpones weekend fixtures",
            "Waterlogged pitches across three cities",
        ),
        (
            "Opera house reopens after renovation",
            "Gala performance scheduled for March",
        ),
        (
            "Wildfire contained near coastal villages",
            "Evacuation orders lifted overnight",
        ),
        (
            "Startup raises funding for battery recycling",
            "Round led by two sovereign funds",
        ),
        (
            "Museum returns looted bronze artifacts",
            "Repatriation ceremony held in Lagos",
        ),
        (
            "Rail workers ratify new wage agreement",
            "Strike threat ends after nine weeks",
        ),
        (
            "Quantum lab claims error correction milestone",
            "Logical qubit outlives physical ones",
        ),
        (
            "Drought pushes olive oil prices to record",
            "Harvest down forty percent in Andalusia",
        ),
        (
            "Satellite constellation completes polar coverage",
            "Final launch lifted off from Vandenberg",
        ),
        (
            "Hospital group merges with regional clinics",
            "Antitrust review expected to take months",
        ),
        (
            "Volcanic ash grounds flights over the strait",
            "Carriers reroute via northern corridors",
        ),
        (
            "Fishing quota talks collapse in Brussels",
            "Delegations blame mackerel allocations",
        ),
        (
            "Architecture prize goes to bamboo pavilion",
            "Jury praised low carbon construction",
        ),
        (
            "Cheese exports hit quarterly high",
            "Demand driven by cafe chains in Asia",
        ),
        (
            "Subway line extension opens to commuters",
            "Twelve stations added on the east side",
        ),
    ]
}
