//! Page logo controller.
//!
//! Turns picker selections into logo updates: the selection is normalized into
//! a [`LogoDescriptor`], the store update runs as a spawned task, and once it
//! settles the outcome is reported as a toast and the picker closes.
//!
//! Updates are never awaited by the caller and never de-duplicated. Two
//! overlapping updates run independently and settle in whatever order the
//! store completes them.

use std::fmt;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::NotificationConfig;
use crate::error::Result;
use crate::logo::LogoDescriptor;
use crate::notification::{Notification, Notifier};
use crate::picker::Picker;
use crate::selection::{PickerSelection, normalize_selection};
use crate::store::PageStore;

/// Title of the toast shown after a successful update.
pub const SUCCESS_TITLE: &str = "Success!";
/// Message of the toast shown after a successful update.
pub const SUCCESS_MESSAGE: &str = "Logo Updated successfully.";
/// Title of the toast shown after a failed update.
pub const ERROR_TITLE: &str = "Error!";
/// Message of the toast shown after a failed update.
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// How a logo update settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The store accepted the new logo.
    Updated,
    /// The store rejected the new logo.
    Failed,
}

/// Orchestrates logo updates for one page.
#[derive(Clone)]
pub struct PageLogoController {
    store: Arc<dyn PageStore>,
    notifier: Arc<dyn Notifier>,
    picker: Picker,
    runtime: Handle,
    notifications: NotificationConfig,
}

impl PageLogoController {
    /// Create a controller spawning its updates on `runtime`.
    pub fn new(store: Arc<dyn PageStore>, notifier: Arc<dyn Notifier>, runtime: Handle) -> Self {
        Self {
            store,
            notifier,
            picker: Picker::new(),
            runtime,
            notifications: NotificationConfig::default(),
        }
    }

    /// Use the given toast durations.
    #[must_use]
    pub fn with_notification_config(mut self, notifications: NotificationConfig) -> Self {
        self.notifications = notifications;
        self
    }

    /// Share an existing picker handle instead of owning a fresh one.
    #[must_use]
    pub fn with_picker(mut self, picker: Picker) -> Self {
        self.picker = picker;
        self
    }

    /// The picker visibility handle.
    #[must_use]
    pub const fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Open or close the picker from a user toggle.
    pub fn toggle_picker(&self, open: bool) {
        self.picker.toggle(open);
    }

    /// Current logo as held by the store.
    pub async fn current_logo(&self) -> Result<LogoDescriptor> {
        self.store.logo_props().await
    }

    /// Handle a selection emitted by the picker.
    ///
    /// Returns the spawned update, or `None` if the selection could not be
    /// normalized. In that case an error toast is shown, the picker closes and
    /// the store is left untouched.
    pub fn handle_selection(
        &self,
        selection: PickerSelection,
    ) -> Option<JoinHandle<UpdateOutcome>> {
        match normalize_selection(selection) {
            Ok(descriptor) => Some(self.update_logo(descriptor)),
            Err(e) => {
                warn!("Ignoring picker selection: {}", e);
                self.notifier.notify(error_notification(&self.notifications));
                self.picker.close();
                None
            }
        }
    }

    /// Submit a new logo to the store.
    ///
    /// The update runs on the controller's runtime; the returned handle may be
    /// dropped. Once the store settles, exactly one success or error toast is
    /// emitted and the picker closes. Store errors do not escape.
    pub fn update_logo(&self, descriptor: LogoDescriptor) -> JoinHandle<UpdateOutcome> {
        let store = Arc::clone(&self.store);
        let notifier = Arc::clone(&self.notifier);
        let picker = self.picker.clone();
        let notifications = self.notifications.clone();

        debug!("Spawning logo update (in use: {:?})", descriptor.in_use);

        self.runtime.spawn(async move {
            let outcome = match store.update_logo(descriptor).await {
                Ok(()) => {
                    notifier.notify(success_notification(&notifications));
                    UpdateOutcome::Updated
                }
                Err(e) => {
                    debug!("Logo update rejected: {}", e);
                    notifier.notify(error_notification(&notifications));
                    UpdateOutcome::Failed
                }
            };
            picker.close();
            debug!("Logo update settled: {:?}", outcome);
            outcome
        })
    }
}

impl fmt::Debug for PageLogoController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLogoController")
            .field("picker", &self.picker.state())
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}

fn success_notification(config: &NotificationConfig) -> Notification {
    Notification::success(SUCCESS_MESSAGE)
        .with_title(SUCCESS_TITLE)
        .with_duration(config.success_duration_ms)
}

fn error_notification(config: &NotificationConfig) -> Notification {
    Notification::error(ERROR_MESSAGE)
        .with_title(ERROR_TITLE)
        .with_duration(config.error_duration_ms)
}
