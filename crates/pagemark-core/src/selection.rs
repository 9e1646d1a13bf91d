//! Raw picker selections and their normalization into logo descriptors.

use serde::{Deserialize, Serialize};

use crate::emoji::convert_hex_emoji_to_decimal;
use crate::error::Result;
use crate::logo::{EmojiLogo, IconLogo, LogoDescriptor, LogoKind};

/// Emoji payload as reported by the emoji picker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmojiSelection {
    /// Hex codepoint sequence, e.g. `1f600` or `1f468-200d-1f469`.
    pub unified: String,
    /// Image the picker rendered for this emoji.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl EmojiSelection {
    /// Create an emoji selection without an image.
    pub fn new(unified: impl Into<String>) -> Self {
        Self {
            unified: unified.into(),
            image_url: None,
        }
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// A selection event emitted by the emoji/icon picker.
///
/// Deserializes from the picker's `{ "type": ..., "value": ... }` shape. A
/// missing, null or unknown `type` is a cleared selection and its `value` is
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "lowercase",
    try_from = "RawSelection"
)]
pub enum PickerSelection {
    /// An emoji was chosen.
    Emoji(EmojiSelection),
    /// An icon was chosen; the payload is stored as-is.
    Icon(IconLogo),
    /// The selection was cleared.
    Cleared,
}

/// Picker event as it arrives on the wire, before the type is resolved.
#[derive(Debug, Deserialize)]
struct RawSelection {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    value: Option<serde_json::Value>,
}

impl TryFrom<RawSelection> for PickerSelection {
    type Error = serde_json::Error;

    fn try_from(raw: RawSelection) -> std::result::Result<Self, Self::Error> {
        let value = raw.value.unwrap_or(serde_json::Value::Null);
        match raw.kind.as_deref() {
            Some("emoji") => serde_json::from_value(value).map(Self::Emoji),
            Some("icon") => serde_json::from_value(value).map(Self::Icon),
            _ => Ok(Self::Cleared),
        }
    }
}

impl PickerSelection {
    /// The logo kind this selection activates.
    #[must_use]
    pub const fn kind(&self) -> Option<LogoKind> {
        match self {
            Self::Emoji(_) => Some(LogoKind::Emoji),
            Self::Icon(_) => Some(LogoKind::Icon),
            Self::Cleared => None,
        }
    }
}

/// Normalize a picker selection into the descriptor persisted on the page.
///
/// Emoji codepoints are converted from hex to decimal, icons pass through
/// unchanged, and a cleared selection produces a descriptor with nothing in use.
pub fn normalize_selection(selection: PickerSelection) -> Result<LogoDescriptor> {
    match selection {
        PickerSelection::Emoji(emoji) => Ok(LogoDescriptor::from_emoji(EmojiLogo {
            value: convert_hex_emoji_to_decimal(&emoji.unified)?,
            url: emoji.image_url,
        })),
        PickerSelection::Icon(icon) => Ok(LogoDescriptor::from_icon(icon)),
        PickerSelection::Cleared => Ok(LogoDescriptor::cleared()),
    }
}

impl TryFrom<PickerSelection> for LogoDescriptor {
    type Error = crate::error::Error;

    fn try_from(selection: PickerSelection) -> Result<Self> {
        normalize_selection(selection)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_emoji_selection_converts_to_decimal() {
        let descriptor = normalize_selection(PickerSelection::Emoji(
            EmojiSelection::new("1f600").with_image_url("https://cdn.example.com/1f600.png"),
        ))
        .unwrap();

        assert_eq!(descriptor.in_use, Some(LogoKind::Emoji));
        let emoji = descriptor.emoji.unwrap();
        assert_eq!(emoji.value, "128512");
        assert_eq!(
            emoji.url.as_deref(),
            Some("https://cdn.example.com/1f600.png")
        );
        assert!(descriptor.icon.is_none());
    }

    #[test]
    fn test_icon_selection_passes_through() {
        let icon = IconLogo::new("book-open", "#3a86ff");
        let descriptor = normalize_selection(PickerSelection::Icon(icon.clone())).unwrap();
        assert_eq!(descriptor, LogoDescriptor::from_icon(icon));
    }

    #[test]
    fn test_cleared_selection_has_nothing_in_use() {
        let descriptor = normalize_selection(PickerSelection::Cleared).unwrap();
        assert!(descriptor.in_use.is_none());
        assert!(descriptor.emoji.is_none());
        assert!(descriptor.icon.is_none());
    }

    #[test]
    fn test_invalid_emoji_is_rejected() {
        let err = normalize_selection(PickerSelection::Emoji(EmojiSelection::new("nope")))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCodepoint(_)));
    }

    #[test]
    fn test_deserialize_picker_emoji_event() {
        let json =
            r#"{"type":"emoji","value":{"unified":"1f680","imageUrl":"https://x/1f680.png"}}"#;
        let selection: PickerSelection = serde_json::from_str(json).unwrap();
        assert_eq!(
            selection,
            PickerSelection::Emoji(
                EmojiSelection::new("1f680").with_image_url("https://x/1f680.png")
            )
        );
    }

    #[test]
    fn test_deserialize_picker_icon_event() {
        let json = r##"{"type":"icon","value":{"name":"rocket","color":"#ff5733"}}"##;
        let selection: PickerSelection = serde_json::from_str(json).unwrap();
        assert_eq!(
            selection,
            PickerSelection::Icon(IconLogo::new("rocket", "#ff5733"))
        );
        assert_eq!(selection.kind(), Some(LogoKind::Icon));
    }

    #[test]
    fn test_unknown_type_is_cleared() {
        let selection: PickerSelection = serde_json::from_str(r#"{"type":"none"}"#).unwrap();
        assert_eq!(selection, PickerSelection::Cleared);
        assert_eq!(selection.kind(), None);
    }

    #[test]
    fn test_missing_type_is_cleared() {
        let selection: PickerSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(selection, PickerSelection::Cleared);
    }

    #[test]
    fn test_null_type_is_cleared() {
        let selection: PickerSelection = serde_json::from_str(r#"{"type":null}"#).unwrap();
        assert_eq!(selection, PickerSelection::Cleared);
    }

    #[test]
    fn test_unknown_type_ignores_value() {
        let selection: PickerSelection =
            serde_json::from_str(r#"{"type":"none","value":{}}"#).unwrap();
        assert_eq!(selection, PickerSelection::Cleared);
    }

    #[test]
    fn test_emoji_without_value_is_rejected() {
        assert!(serde_json::from_str::<PickerSelection>(r#"{"type":"emoji"}"#).is_err());
    }

    #[test]
    fn test_cleared_serializes_to_readable_shape() {
        let json = serde_json::to_string(&PickerSelection::Cleared).unwrap();
        assert_eq!(json, r#"{"type":"cleared"}"#);
        let back: PickerSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PickerSelection::Cleared);
    }

    #[test]
    fn test_try_from_matches_normalize() {
        let descriptor = LogoDescriptor::try_from(PickerSelection::Emoji(EmojiSelection::new(
            "1f44d-1f3fd",
        )))
        .unwrap();
        assert_eq!(descriptor.emoji.unwrap().value, "128077-127997");
    }
}
