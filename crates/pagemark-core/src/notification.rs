//! Toast notifications.
//!
//! The controller reports outcomes through the [`Notifier`] trait. Delivery is
//! fire-and-forget: notifiers never report errors back. [`ToastQueue`] is the
//! in-process implementation, holding the stack of visible toasts.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Outcome a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// The logo update went through.
    Success,
    /// The logo update was rejected.
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for this notification.
    pub id: u64,
    /// The notification kind.
    pub kind: NotificationKind,
    /// Optional title/heading for the notification.
    pub title: Option<String>,
    /// The main message to display.
    pub message: String,
    /// Duration in milliseconds before auto-dismiss (None = manual dismiss only).
    pub duration_ms: Option<u64>,
}

impl Notification {
    /// Create a new notification with a unique ID.
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);

        Self {
            id: COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            title: None,
            message: message.into(),
            duration_ms: Some(5000),
        }
    }

    /// Create a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    /// Create an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let mut notification = Self::new(NotificationKind::Error, message);
        notification.duration_ms = Some(8000);
        notification
    }

    /// Set the title for this notification.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the auto-dismiss duration; `None` keeps it until dismissed.
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: Option<u64>) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Sink for user-facing notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show a notification.
    fn notify(&self, notification: Notification);
}

/// In-process toast stack.
///
/// Clones share the same stack. Notifications with a duration are removed
/// after it elapses when a tokio runtime is available; otherwise they stay
/// until [`ToastQueue::dismiss`] is called.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl ToastQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the stack.
    pub fn push(&self, notification: Notification) {
        let id = notification.id;
        let duration_ms = notification.duration_ms;

        debug!("Toast {} ({}): {}", id, notification.kind, notification.message);
        self.lock().push(notification);

        if let Some(duration) = duration_ms
            && let Ok(handle) = tokio::runtime::Handle::try_current()
        {
            let queue = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(Duration::from_millis(duration)).await;
                queue.dismiss(id);
            });
        }
    }

    /// Remove a notification by ID.
    pub fn dismiss(&self, id: u64) {
        self.lock().retain(|n| n.id != id);
        trace!("Toast {} dismissed", id);
    }

    /// Clear all notifications.
    pub fn clear_all(&self) {
        self.lock().clear();
    }

    /// Snapshot of the visible notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Number of visible notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no notifications are visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}
