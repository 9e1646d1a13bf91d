//! `PageMark` Core Library
//!
//! This crate provides the page logo flow of a project-management page header:
//! - Normalizing emoji/icon picker selections into persisted logo descriptors
//! - Submitting logo updates to a page store and reporting the outcome as toasts
//! - Tracking picker visibility across updates
//! - Deriving the header's title, logo display and save button state
//! - Application configuration and logging setup
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`] with the crate's [`Error`]. Logo
//! update failures are the exception: the controller recovers them itself and
//! only reports them to the user.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pagemark_core::{InMemoryPageStore, Page, PageLogoController, PickerSelection, ToastQueue};
//!
//! let store = Arc::new(InMemoryPageStore::new(Page::new("page-1", Some("Roadmap"))));
//! let toasts = ToastQueue::new();
//! let controller = PageLogoController::new(store, Arc::new(toasts.clone()), handle);
//! controller.handle_selection(selection);
//! ```

pub mod config;
pub mod controller;
pub mod emoji;
pub mod error;
pub mod header;
pub mod logging;
pub mod logo;
pub mod notification;
pub mod picker;
pub mod selection;
pub mod store;

pub use config::{AppConfig, ConfigManager, DEFAULT_ICON_COLOR, NotificationConfig, PickerConfig};
pub use controller::{
    ERROR_MESSAGE, ERROR_TITLE, PageLogoController, SUCCESS_MESSAGE, SUCCESS_TITLE, UpdateOutcome,
};
pub use emoji::{CODEPOINT_SEPARATOR, convert_hex_emoji_to_decimal, emoji_code_to_unicode};
pub use error::{Error, Result};
pub use header::{
    HeaderView, SAVE_LABEL, SAVING_LABEL, SaveStatus, UNTITLED_PAGE, page_title,
    save_button_visible,
};
pub use logging::{LogRotation, LoggingConfig, LoggingError, LoggingGuard};
pub use logo::{EmojiLogo, IconLogo, LogoDescriptor, LogoDisplay, LogoKind};
pub use notification::{Notification, NotificationKind, Notifier, ToastQueue};
pub use picker::{Picker, PickerState, PickerTab};
pub use selection::{EmojiSelection, PickerSelection, normalize_selection};
pub use store::{InMemoryPageStore, Page, PageStore};
