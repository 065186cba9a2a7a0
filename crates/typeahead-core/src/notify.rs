//! Transient success/error toasts.

use crate::config::TimingConfig;
use crate::models::{Notification, NotificationId, NotificationKind};
use crate::view::SearchView;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Shows notifications and removes each one after its display window.
///
/// Notifications are independent: several may be on screen at once and
/// nothing is queued or de-duplicated.
pub struct NotificationCenter {
    view: Arc<dyn SearchView>,
    next_id: AtomicU64,
    display: Duration,
    exit: Duration,
}

impl NotificationCenter {
    pub fn new(view: Arc<dyn SearchView>) -> Self {
        Self::with_timing(
            view,
            TimingConfig::NOTIFICATION_DISPLAY,
            TimingConfig::NOTIFICATION_EXIT,
        )
    }

    pub fn with_timing(view: Arc<dyn SearchView>, display: Duration, exit: Duration) -> Self {
        Self {
            view,
            next_id: AtomicU64::new(1),
            display,
            exit,
        }
    }

    /// Show `message` and schedule its removal.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let notification = Notification {
            id: NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            message: message.into(),
            kind,
        };
        let id = notification.id;

        debug!("Notification {} ({}): {}", id, kind.as_str(), notification.message);
        self.view.show_notification(&notification);

        let view = Arc::clone(&self.view);
        let (display, exit) = (self.display, self.exit);
        tokio::spawn(async move {
            tokio::time::sleep(display).await;
            view.notification_leaving(id);
            tokio::time::sleep(exit).await;
            view.remove_notification(id);
        });

        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, NotificationKind::Error)
    }
}
