//! Shared fakes for the integration tests: a scripted search service and a
//! view that records what it was asked to draw.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use typeahead_core::{
    CacheStats, FixedClock, MemoryStore, Notification, NotificationId, NotificationKind,
    PopularQueries, PopularQuery, RankedQuery, Result, SearchCounters, SearchHistoryEntry,
    SearchResponse, SearchService, SearchSession, SearchView, TypeaheadError,
};

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

fn offline(what: &str) -> TypeaheadError {
    TypeaheadError::Network {
        message: format!("{what}: connection refused"),
        cause: None,
    }
}

/// In-memory stand-in for the remote search service.
#[derive(Default)]
pub struct ScriptedService {
    suggestions: Mutex<HashMap<String, Vec<String>>>,
    autocomplete_delays: Mutex<HashMap<String, Duration>>,
    autocomplete_fails: AtomicBool,
    search_status: Mutex<Option<String>>,
    search_delay: Mutex<Duration>,
    search_fails: AtomicBool,
    popular: Mutex<Vec<(String, u64)>>,
    popular_delay: Mutex<Duration>,
    popular_fails: AtomicBool,
    cache: Mutex<CacheStats>,
    cache_fails: AtomicBool,

    pub autocomplete_calls: Mutex<Vec<String>>,
    pub search_calls: Mutex<Vec<String>>,
    pub popular_calls: AtomicUsize,
    pub cache_calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn suggest(&self, query: &str, items: &[&str]) {
        self.suggestions.lock().unwrap().insert(
            query.to_string(),
            items.iter().map(|s| s.to_string()).collect(),
        );
    }

    pub fn delay_autocomplete(&self, query: &str, delay: Duration) {
        self.autocomplete_delays
            .lock()
            .unwrap()
            .insert(query.to_string(), delay);
    }

    pub fn fail_autocomplete(&self, fail: bool) {
        self.autocomplete_fails.store(fail, Ordering::SeqCst);
    }

    pub fn set_search_status(&self, status: &str) {
        *self.search_status.lock().unwrap() = Some(status.to_string());
    }

    pub fn delay_search(&self, delay: Duration) {
        *self.search_delay.lock().unwrap() = delay;
    }

    pub fn fail_search(&self, fail: bool) {
        self.search_fails.store(fail, Ordering::SeqCst);
    }

    pub fn set_popular(&self, items: &[(&str, u64)]) {
        *self.popular.lock().unwrap() = items.iter().map(|(q, c)| (q.to_string(), *c)).collect();
    }

    pub fn delay_popular(&self, delay: Duration) {
        *self.popular_delay.lock().unwrap() = delay;
    }

    pub fn fail_popular(&self, fail: bool) {
        self.popular_fails.store(fail, Ordering::SeqCst);
    }

    pub fn set_cache_stats(&self, cached_queries: u64, error: Option<&str>) {
        *self.cache.lock().unwrap() = CacheStats {
            cached_queries,
            error: error.map(str::to_string),
        };
    }

    pub fn fail_cache(&self, fail: bool) {
        self.cache_fails.store(fail, Ordering::SeqCst);
    }

    pub fn autocomplete_calls(&self) -> Vec<String> {
        self.autocomplete_calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn popular_calls(&self) -> usize {
        self.popular_calls.load(Ordering::SeqCst)
    }

    pub fn cache_calls(&self) -> usize {
        self.cache_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchService for ScriptedService {
    async fn autocomplete(&self, query: &str) -> Result<Vec<String>> {
        self.autocomplete_calls.lock().unwrap().push(query.to_string());
        let delay = self.autocomplete_delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.autocomplete_fails.load(Ordering::SeqCst) {
            return Err(offline("autocomplete"));
        }
        Ok(self
            .suggestions
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.search_calls.lock().unwrap().push(query.to_string());
        let delay = *self.search_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.search_fails.load(Ordering::SeqCst) {
            return Err(offline("search"));
        }
        let status = self
            .search_status
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "success".to_string());
        Ok(SearchResponse { status })
    }

    async fn popular(&self, limit: usize) -> Result<PopularQueries> {
        self.popular_calls.fetch_add(1, Ordering::SeqCst);
        // The ranking is captured when the request is made, not when it returns.
        let snapshot: Vec<PopularQuery> = self
            .popular
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .map(|(query, count)| PopularQuery {
                query: query.clone(),
                count: *count,
            })
            .collect();
        let delay = *self.popular_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.popular_fails.load(Ordering::SeqCst) {
            return Err(offline("popular"));
        }
        Ok(PopularQueries(snapshot))
    }

    async fn cache_stats(&self) -> Result<CacheStats> {
        self.cache_calls.fetch_add(1, Ordering::SeqCst);
        if self.cache_fails.load(Ordering::SeqCst) {
            return Err(offline("stats"));
        }
        Ok(self.cache.lock().unwrap().clone())
    }
}

/// What the recording view currently shows.
#[derive(Debug, Default, Clone)]
pub struct Screen {
    pub input: String,
    pub suggestions: Option<Vec<String>>,
    pub highlighted: Option<usize>,
    pub history: Vec<SearchHistoryEntry>,
    pub counters: Option<SearchCounters>,
    pub popular: Vec<RankedQuery>,
    pub cached_queries: Option<u64>,
    pub notifications: Vec<Notification>,
    pub removed: Vec<NotificationId>,
}

#[derive(Default)]
pub struct RecordingView {
    screen: Mutex<Screen>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn screen(&self) -> Screen {
        self.screen.lock().unwrap().clone()
    }

    pub fn notifications_of(&self, kind: NotificationKind) -> Vec<String> {
        self.screen
            .lock()
            .unwrap()
            .notifications
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl SearchView for RecordingView {
    fn set_input(&self, value: &str) {
        self.screen.lock().unwrap().input = value.to_string();
    }

    fn show_suggestions(&self, suggestions: &[String]) {
        let mut screen = self.screen.lock().unwrap();
        screen.suggestions = Some(suggestions.to_vec());
        screen.highlighted = None;
    }

    fn highlight_suggestion(&self, index: Option<usize>) {
        self.screen.lock().unwrap().highlighted = index;
    }

    fn hide_suggestions(&self) {
        let mut screen = self.screen.lock().unwrap();
        screen.suggestions = None;
        screen.highlighted = None;
    }

    fn render_history(&self, entries: &[SearchHistoryEntry]) {
        self.screen.lock().unwrap().history = entries.to_vec();
    }

    fn render_counters(&self, counters: &SearchCounters) {
        self.screen.lock().unwrap().counters = Some(counters.clone());
    }

    fn render_popular(&self, ranked: &[RankedQuery]) {
        self.screen.lock().unwrap().popular = ranked.to_vec();
    }

    fn render_cached_queries(&self, count: u64) {
        self.screen.lock().unwrap().cached_queries = Some(count);
    }

    fn show_notification(&self, notification: &Notification) {
        self.screen
            .lock()
            .unwrap()
            .notifications
            .push(notification.clone());
    }

    fn remove_notification(&self, id: NotificationId) {
        self.screen.lock().unwrap().removed.push(id);
    }
}

/// A session wired to fakes, with the clock pinned to 2026-10-18.
pub struct Harness {
    pub session: SearchSession,
    pub service: Arc<ScriptedService>,
    pub view: Arc<RecordingView>,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<FixedClock>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self::build(store, |builder| builder)
    }

    pub fn build(
        store: MemoryStore,
        configure: impl FnOnce(typeahead_core::SearchSessionBuilder) -> typeahead_core::SearchSessionBuilder,
    ) -> Self {
        let service = ScriptedService::new();
        let view = RecordingView::new();
        let store = Arc::new(store);
        let clock = Arc::new(FixedClock::on(day(18)));

        let builder = SearchSession::builder(service.clone())
            .view(view.clone())
            .store(store.clone())
            .clock(clock.clone());
        let session = configure(builder).build();

        Self {
            session,
            service,
            view,
            store,
            clock,
        }
    }
}
