//! Popular-query ranking and cache statistics refresh.
//!
//! Both panels are refreshed after every successful search and on a fixed
//! interval for as long as the session's [`PollingHandle`] is alive.

use crate::config::{NetworkConfig, TimingConfig};
use crate::models::RankedQuery;
use crate::service::SearchService;
use crate::view::SearchView;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Refreshes the popular-queries and cache-statistics panels.
pub struct StatsRefresher {
    service: Arc<dyn SearchService>,
    view: Arc<dyn SearchView>,
    popular_limit: usize,
    /// Last rendered ranking, used to resolve picks on the popular panel.
    popular: RwLock<Vec<RankedQuery>>,
}

impl StatsRefresher {
    pub fn new(service: Arc<dyn SearchService>, view: Arc<dyn SearchView>) -> Self {
        Self::with_limit(service, view, NetworkConfig::POPULAR_LIMIT)
    }

    pub fn with_limit(
        service: Arc<dyn SearchService>,
        view: Arc<dyn SearchView>,
        popular_limit: usize,
    ) -> Self {
        Self {
            service,
            view,
            popular_limit,
            popular: RwLock::new(Vec::new()),
        }
    }

    /// Fetch and render the popular-query ranking.
    ///
    /// The service's order is the ranking; nothing is re-sorted here. On
    /// failure the previous ranking stays on screen.
    pub async fn refresh_popular(&self) {
        match self.service.popular(self.popular_limit).await {
            Ok(popular) => {
                let ranked = popular.ranked();
                // Render under the guard so the panel and the stored ranking
                // always come from the same response.
                let mut current = self.popular.write().await;
                debug!("Rendering {} popular queries", ranked.len());
                self.view.render_popular(&ranked);
                *current = ranked;
            }
            Err(e) => warn!("Failed to refresh popular queries: {}", e),
        }
    }

    /// Fetch and render the number of cached queries; renders 0 on failure.
    pub async fn update_cache_stats(&self) {
        match self.service.cache_stats().await {
            Ok(stats) => {
                if let Some(error) = &stats.error {
                    warn!("Cache stats reported an error: {}", error);
                }
                self.view.render_cached_queries(stats.cached_queries);
            }
            Err(e) => {
                warn!("Failed to update cache stats: {}", e);
                self.view.render_cached_queries(0);
            }
        }
    }

    /// Refresh both panels concurrently and wait for both.
    pub async fn refresh_all(&self) {
        tokio::join!(self.refresh_popular(), self.update_cache_stats());
    }

    /// The most recently rendered ranking.
    pub async fn popular(&self) -> Vec<RankedQuery> {
        self.popular.read().await.clone()
    }

    /// Query text at a 1-based rank of the rendered ranking.
    pub async fn query_at_rank(&self, rank: usize) -> Option<String> {
        self.popular
            .read()
            .await
            .iter()
            .find(|r| r.rank == rank)
            .map(|r| r.query.clone())
    }

    /// Refresh both panels every `period`, starting one period from now.
    ///
    /// Periods below [`TimingConfig::MIN_REFRESH_INTERVAL`] are raised to it.
    /// Refreshes run inside the polling task, so stopping the handle also
    /// cancels one that is in flight.
    pub fn spawn_polling(self: &Arc<Self>, period: Duration) -> PollingHandle {
        let period = if period < TimingConfig::MIN_REFRESH_INTERVAL {
            warn!(
                "Refresh interval {:?} too short, using {:?}",
                period,
                TimingConfig::MIN_REFRESH_INTERVAL
            );
            TimingConfig::MIN_REFRESH_INTERVAL
        } else {
            period
        };

        let refresher = Arc::clone(self);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                debug!("Periodic stats refresh");
                refresher.refresh_all().await;
            }
        });
        PollingHandle { task: Some(task) }
    }
}

/// Handle to the periodic refresh task. Dropping it stops the polling.
pub struct PollingHandle {
    task: Option<JoinHandle<()>>,
}

impl PollingHandle {
    /// Stop polling.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
