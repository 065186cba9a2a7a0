//! Typeahead Core - headless search interaction controller.
//!
//! This crate drives a search box against a remote search service: it
//! debounces keystrokes into autocomplete requests, keeps the suggestion
//! list and its keyboard highlight, runs searches one at a time, keeps a
//! short local history with daily counters, and refreshes the popular
//! queries and cache statistics panels. Rendering is delegated to a
//! [`SearchView`] supplied by the UI binding.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use typeahead_core::{HttpSearchService, JsonFileStore, SearchEvents, SearchSession};
//!
//! #[tokio::main]
//! async fn main() -> typeahead_core::Result<()> {
//!     let service = Arc::new(HttpSearchService::new("http://127.0.0.1:8080/api")?);
//!     let session = SearchSession::builder(service)
//!         .view(Arc::new(MyView::default()))
//!         .store(Arc::new(JsonFileStore::open("state.json")))
//!         .build();
//!
//!     let _polling = session.start().await;
//!     session.on_input_changed("rus".into()).await;
//!     session.on_submit().await;
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod debounce;
pub mod error;
pub mod history;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod refresh;
pub mod service;
pub mod storage;
pub mod view;

mod session;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use debounce::Debouncer;
pub use error::{Result, TypeaheadError};
pub use history::{SearchHistory, EMPTY_HISTORY_MESSAGE};
pub use models::{
    CacheStats, Notification, NotificationId, NotificationKind, PopularQueries, PopularQuery,
    RankedQuery, SearchCounters, SearchHistoryEntry, SearchResponse,
};
pub use navigation::{Key, KeyAction, SuggestionSet};
pub use notify::NotificationCenter;
pub use refresh::{PollingHandle, StatsRefresher};
pub use service::{HttpSearchService, SearchService};
pub use session::{
    SearchEvents, SearchOutcome, SearchSessionBuilder, SkipReason, SuggestionOrdering,
};
pub use storage::{JsonFileStore, KeyValueStore, LoadedState, LocalStore, MemoryStore};
pub use view::{NullView, SearchView};

use session::SessionState;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// One search box's controller, created once per page load.
///
/// Cloning is cheap and every clone drives the same session. Event entry
/// points live on the [`SearchEvents`] implementation.
#[derive(Clone)]
pub struct SearchSession {
    inner: Arc<SessionInner>,
}

/// Shared state behind a [`SearchSession`].
pub(crate) struct SessionInner {
    service: Arc<dyn SearchService>,
    view: Arc<dyn SearchView>,
    clock: Arc<dyn Clock>,
    local: LocalStore,
    refresher: Arc<StatsRefresher>,
    notifications: NotificationCenter,
    /// History, counters, suggestions and input text.
    state: Mutex<SessionState>,
    /// Pending autocomplete fetch.
    suggest_debouncer: Mutex<Debouncer<String>>,
    /// Set while a search is running.
    in_flight: AtomicBool,
    ordering: SuggestionOrdering,
    /// Sequence number of the latest autocomplete request issued.
    suggestion_issued: AtomicU64,
    /// Sequence number of the latest autocomplete response applied.
    suggestion_applied: AtomicU64,
    refresh_interval: Duration,
}

impl SearchSession {
    /// Start configuring a session that talks to `service`.
    pub fn builder(service: Arc<dyn SearchService>) -> SearchSessionBuilder {
        SearchSessionBuilder::new(service)
    }
}
