//! Trailing-edge debouncing for async actions.
//!
//! A [`Debouncer`] owns one scheduled task at a time. Every call aborts the
//! pending task and schedules a fresh one, so only the last argument of a
//! burst reaches the action, `wait` after the burst went quiet.

use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Action invoked once the input has been quiet for the debounce window.
pub type DebouncedAction<T> = Arc<dyn Fn(T) -> BoxFuture<'static, ()> + Send + Sync>;

/// Collapses bursts of calls into one trailing invocation.
///
/// Cancelling only affects scheduling: once the wait elapsed the action runs
/// in its own task and later calls do not interrupt it.
pub struct Debouncer<T> {
    wait: Duration,
    action: DebouncedAction<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(wait: Duration, action: DebouncedAction<T>) -> Self {
        Self {
            wait,
            action,
            pending: None,
        }
    }

    /// Create a debouncer from a closure returning a future.
    pub fn from_fn<F, Fut>(wait: Duration, f: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        Self::new(wait, Arc::new(move |arg| f(arg).boxed()))
    }

    /// Schedule `action(arg)` after the wait, replacing any pending call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&mut self, arg: T) {
        self.cancel();

        let wait = self.wait;
        let action = Arc::clone(&self.action);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            // Detach the action so aborting this handle can no longer reach it.
            tokio::spawn(action(arg));
        }));
    }

    /// Drop the pending call, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                trace!("Cancelling pending debounced call");
            }
            handle.abort();
        }
    }

    /// Whether a call is still waiting out its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
