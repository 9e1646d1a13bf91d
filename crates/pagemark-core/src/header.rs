//! Derived header state for the page detail view.
//!
//! Pure functions over the page entity: the title shown in the header, the
//! save button's label and visibility, and the picker defaults.

use serde::{Deserialize, Serialize};

use crate::config::PickerConfig;
use crate::logo::{LogoDescriptor, LogoDisplay};
use crate::picker::PickerTab;
use crate::store::Page;

/// Title shown for pages without a usable name.
pub const UNTITLED_PAGE: &str = "Untitled";

/// Save button label while idle.
pub const SAVE_LABEL: &str = "Save changes";

/// Save button label while a save is in flight.
pub const SAVING_LABEL: &str = "Saving";

/// Title to display for a page name.
#[must_use]
pub fn page_title(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => UNTITLED_PAGE,
    }
}

/// Content save state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    /// Nothing pending.
    #[default]
    Idle,
    /// A save is in flight.
    Submitting,
    /// The last save completed.
    Saved,
}

impl SaveStatus {
    /// Whether a save is in flight.
    #[must_use]
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Label for the save button.
    #[must_use]
    pub const fn save_button_label(self) -> &'static str {
        if self.is_submitting() {
            SAVING_LABEL
        } else {
            SAVE_LABEL
        }
    }
}

/// Whether the save button is shown.
///
/// Hidden for read-only pages and while the version history overlay is open.
#[must_use]
pub const fn save_button_visible(content_editable: bool, version_overlay_active: bool) -> bool {
    content_editable && !version_overlay_active
}

/// Everything the header renders for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Page title.
    pub title: String,
    /// Logo to draw next to the title.
    pub logo: LogoDisplay,
    /// Tab the picker opens on.
    pub picker_tab: PickerTab,
    /// Icon color the picker preselects.
    pub default_icon_color: String,
    /// Whether the save button is shown.
    pub show_save_button: bool,
    /// Whether the save button shows a spinner.
    pub save_loading: bool,
    /// Save button label.
    pub save_label: &'static str,
}

impl HeaderView {
    /// Derive the header for a page.
    #[must_use]
    pub fn from_page(page: &Page, version_overlay_active: bool, picker: &PickerConfig) -> Self {
        let logo: &LogoDescriptor = &page.logo_props;
        Self {
            title: page_title(page.name.as_deref()).to_string(),
            logo: logo.display(),
            picker_tab: picker.tab_for(logo),
            default_icon_color: picker.icon_color_for(logo).to_string(),
            show_save_button: save_button_visible(
                page.is_content_editable,
                version_overlay_active,
            ),
            save_loading: page.save_status.is_submitting(),
            save_label: page.save_status.save_button_label(),
        }
    }
}
