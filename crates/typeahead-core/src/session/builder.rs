//! Builder for configuring a SearchSession.

use crate::clock::{Clock, SystemClock};
use crate::config::{NetworkConfig, TimingConfig};
use crate::debounce::Debouncer;
use crate::notify::NotificationCenter;
use crate::refresh::StatsRefresher;
use crate::service::SearchService;
use crate::storage::{KeyValueStore, LocalStore, MemoryStore};
use crate::view::{NullView, SearchView};
use crate::{SearchSession, SessionInner};
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::Mutex;

/// How autocomplete responses that arrive out of order are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionOrdering {
    /// Every response renders when it arrives, so a slow stale response can
    /// replace a newer one.
    #[default]
    LastResponseWins,
    /// Responses to requests older than the last applied one are dropped.
    LatestRequestWins,
}

/// Builder for configuring a [`SearchSession`].
///
/// # Example
///
/// ```rust,ignore
/// let session = SearchSession::builder(service)
///     .view(view)
///     .store(Arc::new(JsonFileStore::open(path)))
///     .debounce_delay(Duration::from_millis(150))
///     .build();
/// ```
pub struct SearchSessionBuilder {
    service: Arc<dyn SearchService>,
    view: Arc<dyn SearchView>,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    debounce_delay: Duration,
    refresh_interval: Duration,
    popular_limit: usize,
    ordering: SuggestionOrdering,
    notification_display: Duration,
    notification_exit: Duration,
}

impl SearchSessionBuilder {
    /// Create a builder with default timings, a [`NullView`], an in-memory
    /// store and the system clock.
    pub fn new(service: Arc<dyn SearchService>) -> Self {
        Self {
            service,
            view: Arc::new(NullView),
            store: Arc::new(MemoryStore::new()),
            clock: Arc::new(SystemClock),
            debounce_delay: TimingConfig::DEBOUNCE_DELAY,
            refresh_interval: TimingConfig::REFRESH_INTERVAL,
            popular_limit: NetworkConfig::POPULAR_LIMIT,
            ordering: SuggestionOrdering::default(),
            notification_display: TimingConfig::NOTIFICATION_DISPLAY,
            notification_exit: TimingConfig::NOTIFICATION_EXIT,
        }
    }

    /// Set the view the session renders into.
    pub fn view(mut self, view: Arc<dyn SearchView>) -> Self {
        self.view = view;
        self
    }

    /// Set where history and counters are persisted.
    ///
    /// Default: an in-memory store that does not survive the session.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = store;
        self
    }

    /// Set the clock used for date rollover and history timestamps.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Quiet period before typed input triggers an autocomplete request.
    ///
    /// Default: 300ms
    pub fn debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// Interval of the background popular/cache refresh.
    ///
    /// Default: 30s. Values below 1s are raised to 1s.
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Number of popular queries requested.
    ///
    /// Default: 10
    pub fn popular_limit(mut self, limit: usize) -> Self {
        self.popular_limit = limit;
        self
    }

    /// How out-of-order autocomplete responses are handled.
    pub fn suggestion_ordering(mut self, ordering: SuggestionOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Display window and exit transition of notifications.
    pub fn notification_timing(mut self, display: Duration, exit: Duration) -> Self {
        self.notification_display = display;
        self.notification_exit = exit;
        self
    }

    /// Build the session. Nothing is loaded or fetched until
    /// [`SearchSession::start`] is called.
    pub fn build(self) -> SearchSession {
        let refresher = Arc::new(StatsRefresher::with_limit(
            Arc::clone(&self.service),
            Arc::clone(&self.view),
            self.popular_limit,
        ));
        let notifications = NotificationCenter::with_timing(
            Arc::clone(&self.view),
            self.notification_display,
            self.notification_exit,
        );
        let local = LocalStore::new(self.store, Arc::clone(&self.clock));

        let inner = Arc::new_cyclic(|weak: &Weak<SessionInner>| {
            let weak = weak.clone();
            // Weak so the pending fetch does not keep the session alive.
            let debouncer = Debouncer::from_fn(self.debounce_delay, move |query: String| {
                let weak = weak.clone();
                async move {
                    if let Some(inner) = weak.upgrade() {
                        inner.fetch_suggestions(&query).await;
                    }
                }
            });

            SessionInner {
                service: self.service,
                view: self.view,
                clock: self.clock,
                local,
                refresher,
                notifications,
                state: Mutex::new(Default::default()),
                suggest_debouncer: Mutex::new(debouncer),
                in_flight: AtomicBool::new(false),
                ordering: self.ordering,
                suggestion_issued: AtomicU64::new(0),
                suggestion_applied: AtomicU64::new(0),
                refresh_interval: self.refresh_interval,
            }
        });

        SearchSession { inner }
    }
}
