//! Page logo descriptor.
//!
//! A [`LogoDescriptor`] is the persisted description of a page's visual marker.
//! It carries an emoji slot and an icon slot; `in_use` says which one is
//! meaningful, and consumers ignore the other.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::emoji::emoji_code_to_unicode;
use crate::picker::PickerTab;

/// Which logo variant a descriptor renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogoKind {
    /// A Unicode emoji (optionally backed by an image).
    Emoji,
    /// A named icon with a color.
    Icon,
}

impl fmt::Display for LogoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emoji => write!(f, "emoji"),
            Self::Icon => write!(f, "icon"),
        }
    }
}

/// Emoji variant data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmojiLogo {
    /// Decimal codepoint sequence, `-` separated (e.g. `"128512"`).
    #[serde(default)]
    pub value: String,
    /// External image reference for the emoji, if the picker provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Icon variant data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconLogo {
    /// Icon name in the icon set.
    #[serde(default)]
    pub name: String,
    /// Icon color, usually a hex string such as `#6d7b8a`.
    #[serde(default)]
    pub color: String,
}

impl IconLogo {
    /// Create an icon logo.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Persisted representation of a page's logo (`logo_props`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoDescriptor {
    /// The active variant, or `None` when the logo has been cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_use: Option<LogoKind>,
    /// Emoji slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<EmojiLogo>,
    /// Icon slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconLogo>,
}

impl LogoDescriptor {
    /// A descriptor rendering the given emoji.
    #[must_use]
    pub const fn from_emoji(emoji: EmojiLogo) -> Self {
        Self {
            in_use: Some(LogoKind::Emoji),
            emoji: Some(emoji),
            icon: None,
        }
    }

    /// A descriptor rendering the given icon.
    #[must_use]
    pub const fn from_icon(icon: IconLogo) -> Self {
        Self {
            in_use: Some(LogoKind::Icon),
            emoji: None,
            icon: Some(icon),
        }
    }

    /// A descriptor with no active variant.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            in_use: None,
            emoji: None,
            icon: None,
        }
    }

    /// Whether a variant is active.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.in_use.is_some()
    }

    /// The emoji data, only if emoji is the active variant.
    #[must_use]
    pub fn active_emoji(&self) -> Option<&EmojiLogo> {
        match self.in_use {
            Some(LogoKind::Emoji) => self.emoji.as_ref(),
            _ => None,
        }
    }

    /// The icon data, only if icon is the active variant.
    #[must_use]
    pub fn active_icon(&self) -> Option<&IconLogo> {
        match self.in_use {
            Some(LogoKind::Icon) => self.icon.as_ref(),
            _ => None,
        }
    }

    /// Decide what to render for this descriptor.
    ///
    /// Falls back to the generic page icon when nothing is active or the
    /// active variant carries no usable data.
    #[must_use]
    pub fn display(&self) -> LogoDisplay {
        if let Some(emoji) = self.active_emoji() {
            let glyph = emoji_code_to_unicode(&emoji.value).unwrap_or_default();
            if glyph.is_empty() && emoji.url.is_none() {
                return LogoDisplay::Fallback;
            }
            return LogoDisplay::Emoji {
                glyph,
                url: emoji.url.clone(),
            };
        }

        if let Some(icon) = self.active_icon()
            && !icon.name.is_empty()
        {
            return LogoDisplay::Icon {
                name: icon.name.clone(),
                color: icon.color.clone(),
            };
        }

        LogoDisplay::Fallback
    }

    /// The picker tab to open by default: emoji when an emoji is active,
    /// icon otherwise.
    #[must_use]
    pub const fn default_picker_tab(&self) -> PickerTab {
        match self.in_use {
            Some(LogoKind::Emoji) => PickerTab::Emoji,
            _ => PickerTab::Icon,
        }
    }

    /// The color the icon tab should preselect, if an icon is active.
    #[must_use]
    pub fn default_icon_color(&self) -> Option<&str> {
        self.active_icon().map(|icon| icon.color.as_str())
    }
}

/// What the header should draw for a page logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoDisplay {
    /// Emoji glyph, with an optional image to prefer over the glyph.
    Emoji {
        /// Decoded glyph string.
        glyph: String,
        /// Image reference.
        url: Option<String>,
    },
    /// Named icon.
    Icon {
        /// Icon name.
        name: String,
        /// Icon color.
        color: String,
    },
    /// Generic page icon.
    Fallback,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn rocket() -> IconLogo {
        IconLogo::new("rocket", "#ff5733")
    }

    #[test]
    fn test_cleared_serializes_empty() {
        let json = serde_json::to_string(&LogoDescriptor::cleared()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_icon_wire_shape() {
        let value = serde_json::to_value(LogoDescriptor::from_icon(rocket())).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "in_use": "icon",
                "icon": { "name": "rocket", "color": "#ff5733" }
            })
        );
    }

    #[test]
    fn test_emoji_wire_shape_omits_missing_url() {
        let descriptor = LogoDescriptor::from_emoji(EmojiLogo {
            value: "128512".to_string(),
            url: None,
        });
        let value = serde_json::to_value(descriptor).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "in_use": "emoji", "emoji": { "value": "128512" } })
        );
    }

    #[test]
    fn test_deserialize_ignores_inactive_slot() {
        let json = r##"{
            "in_use": "icon",
            "emoji": { "value": "128512" },
            "icon": { "name": "book", "color": "#000000" }
        }"##;
        let descriptor: LogoDescriptor = serde_json::from_str(json).unwrap();
        assert!(descriptor.active_emoji().is_none());
        assert_eq!(descriptor.active_icon().unwrap().name, "book");
    }

    #[test]
    fn test_display_emoji() {
        let descriptor = LogoDescriptor::from_emoji(EmojiLogo {
            value: "128512".to_string(),
            url: Some("https://cdn.example.com/1f600.png".to_string()),
        });
        assert_eq!(
            descriptor.display(),
            LogoDisplay::Emoji {
                glyph: "😀".to_string(),
                url: Some("https://cdn.example.com/1f600.png".to_string()),
            }
        );
    }

    #[test]
    fn test_display_icon_round_trip() {
        let descriptor = LogoDescriptor::from_icon(rocket());
        assert_eq!(
            descriptor.display(),
            LogoDisplay::Icon {
                name: "rocket".to_string(),
                color: "#ff5733".to_string(),
            }
        );
        assert_eq!(descriptor.default_icon_color(), Some("#ff5733"));
    }

    #[test]
    fn test_display_fallbacks() {
        assert_eq!(LogoDescriptor::cleared().display(), LogoDisplay::Fallback);

        let broken = LogoDescriptor::from_emoji(EmojiLogo {
            value: "not-a-number".to_string(),
            url: None,
        });
        assert_eq!(broken.display(), LogoDisplay::Fallback);

        let unnamed = LogoDescriptor::from_icon(IconLogo::default());
        assert_eq!(unnamed.display(), LogoDisplay::Fallback);
    }

    #[test]
    fn test_default_picker_tab() {
        let emoji = LogoDescriptor::from_emoji(EmojiLogo::default());
        assert_eq!(emoji.default_picker_tab(), PickerTab::Emoji);
        assert_eq!(
            LogoDescriptor::from_icon(rocket()).default_picker_tab(),
            PickerTab::Icon
        );
        assert_eq!(LogoDescriptor::cleared().default_picker_tab(), PickerTab::Icon);
    }

    #[test]
    fn test_default_icon_color_only_for_active_icon() {
        let mut descriptor = LogoDescriptor::from_emoji(EmojiLogo::default());
        descriptor.icon = Some(rocket());
        assert_eq!(descriptor.default_icon_color(), None);
    }

    #[test]
    fn test_logo_kind_display() {
        assert_eq!(LogoKind::Emoji.to_string(), "emoji");
        assert_eq!(LogoKind::Icon.to_string(), "icon");
    }
}
