//! Picker visibility state.
//!
//! The picker is either open or closed. The user toggles it directly; a logo
//! update closes it once the update settles. State lives in a tokio `watch`
//! channel so update tasks can close it and views can observe changes.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::trace;

/// Visibility of the emoji/icon picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    /// Picker is hidden.
    #[default]
    Closed,
    /// Picker is shown.
    Open,
}

impl PickerState {
    /// Whether the picker is shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<bool> for PickerState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

impl fmt::Display for PickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// Which tab the picker opens on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PickerTab {
    /// Emoji grid.
    Emoji,
    /// Icon grid.
    #[default]
    Icon,
}

/// Shared handle to the picker's visibility.
///
/// Cloning the handle shares the same underlying state.
#[derive(Debug, Clone)]
pub struct Picker {
    state: Arc<watch::Sender<PickerState>>,
}

impl Picker {
    /// Create a closed picker.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PickerState::Closed);
        Self {
            state: Arc::new(tx),
        }
    }

    /// Current visibility.
    #[must_use]
    pub fn state(&self) -> PickerState {
        *self.state.borrow()
    }

    /// Whether the picker is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Set visibility from a user toggle.
    pub fn toggle(&self, open: bool) {
        self.set(PickerState::from(open));
    }

    /// Close the picker.
    pub fn close(&self) {
        self.set(PickerState::Closed);
    }

    /// Subscribe to visibility changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PickerState> {
        self.state.subscribe()
    }

    fn set(&self, next: PickerState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            trace!("Picker {} -> {}", current, next);
            *current = next;
            true
        });
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let picker = Picker::new();
        assert_eq!(picker.state(), PickerState::Closed);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_toggle_open_and_closed() {
        let picker = Picker::new();
        picker.toggle(true);
        assert!(picker.is_open());
        picker.toggle(false);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_close_from_open() {
        let picker = Picker::new();
        picker.toggle(true);
        picker.close();
        assert_eq!(picker.state(), PickerState::Closed);
    }

    #[test]
    fn test_clones_share_state() {
        let picker = Picker::new();
        let other = picker.clone();
        other.toggle(true);
        assert!(picker.is_open());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let picker = Picker::new();
        let mut rx = picker.subscribe();

        picker.toggle(true);
        rx.changed().await.unwrap_or_default();
        assert_eq!(*rx.borrow_and_update(), PickerState::Open);

        // Setting the same state again does not notify.
        picker.toggle(true);
        assert!(!rx.has_changed().unwrap_or(true));
    }

    #[test]
    fn test_state_from_bool() {
        assert_eq!(PickerState::from(true), PickerState::Open);
        assert_eq!(PickerState::from(false), PickerState::Closed);
        assert_eq!(PickerState::Open.to_string(), "open");
    }
}
