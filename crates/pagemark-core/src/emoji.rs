//! Emoji codepoint conversion helpers.
//!
//! Emoji pickers report an emoji by its "unified" form: one or more hexadecimal
//! Unicode codepoints joined by `-` (for example `1f600`, or `1f468-200d-1f469`
//! for a ZWJ sequence). Pages persist the same sequence in decimal, keeping the
//! `-` separators, so that `1f600` is stored as `128512`.

use crate::error::{Error, Result};

/// Separator between codepoints in both the hex and decimal forms.
pub const CODEPOINT_SEPARATOR: char = '-';

/// Convert a hex "unified" emoji string into its decimal representation.
///
/// Each `-`-separated segment is converted independently. An empty input
/// yields an empty string.
///
/// # Examples
///
/// ```
/// use pagemark_core::convert_hex_emoji_to_decimal;
///
/// assert_eq!(convert_hex_emoji_to_decimal("1f600").unwrap(), "128512");
/// assert_eq!(
///     convert_hex_emoji_to_decimal("1f468-200d-1f469").unwrap(),
///     "128104-8205-128105"
/// );
/// ```
pub fn convert_hex_emoji_to_decimal(unified: &str) -> Result<String> {
    if unified.is_empty() {
        return Ok(String::new());
    }

    let decimals = unified
        .split(CODEPOINT_SEPARATOR)
        .map(|segment| parse_codepoint(segment, 16).map(|c| u32::from(c).to_string()))
        .collect::<Result<Vec<_>>>()?;

    Ok(decimals.join("-"))
}

/// Decode a decimal codepoint sequence back into the emoji glyph.
///
/// This is the inverse of [`convert_hex_emoji_to_decimal`] followed by
/// rendering: `"128512"` becomes `"😀"`.
pub fn emoji_code_to_unicode(decimal: &str) -> Result<String> {
    if decimal.is_empty() {
        return Ok(String::new());
    }

    decimal
        .split(CODEPOINT_SEPARATOR)
        .map(|segment| parse_codepoint(segment, 10))
        .collect()
}

/// Segments must be bare digits: no whitespace and no sign.
fn parse_codepoint(segment: &str, radix: u32) -> Result<char> {
    if segment.is_empty() || !segment.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::InvalidCodepoint(format!(
            "'{segment}' is not a base-{radix} number"
        )));
    }

    let value = u32::from_str_radix(segment, radix)
        .map_err(|e| Error::InvalidCodepoint(format!("'{segment}': {e}")))?;

    char::from_u32(value).ok_or_else(|| {
        Error::InvalidCodepoint(format!("'{segment}' is not a Unicode scalar value"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_single_codepoint_to_decimal() {
        assert_eq!(convert_hex_emoji_to_decimal("1f600").unwrap(), "128512");
    }

    #[test]
    fn test_uppercase_hex_is_accepted() {
        assert_eq!(convert_hex_emoji_to_decimal("1F680").unwrap(), "128640");
    }

    #[test]
    fn test_sequence_keeps_separators() {
        assert_eq!(
            convert_hex_emoji_to_decimal("1f468-200d-1f469").unwrap(),
            "128104-8205-128105"
        );
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert_eq!(convert_hex_emoji_to_decimal("").unwrap(), "");
        assert_eq!(emoji_code_to_unicode("").unwrap(), "");
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        let err = convert_hex_emoji_to_decimal("xyz").unwrap_err();
        assert!(matches!(err, Error::InvalidCodepoint(_)));
    }

    #[test]
    fn test_dangling_separator_is_rejected() {
        assert!(convert_hex_emoji_to_decimal("1f600-").is_err());
    }

    #[test]
    fn test_padded_or_signed_segments_are_rejected() {
        for input in [" 1f600", "1f600 ", "1f468- 200d", "+1f600"] {
            let err = convert_hex_emoji_to_decimal(input).unwrap_err();
            assert!(matches!(err, Error::InvalidCodepoint(_)), "{input:?}");
        }
        assert!(emoji_code_to_unicode(" 128512").is_err());
    }

    #[test]
    fn test_surrogate_is_rejected() {
        // U+D800 is a surrogate and never a valid scalar value.
        let err = convert_hex_emoji_to_decimal("d800").unwrap_err();
        assert!(err.to_string().contains("Unicode scalar"));
    }

    #[test]
    fn test_decimal_decodes_to_glyph() {
        assert_eq!(emoji_code_to_unicode("128512").unwrap(), "😀");
    }

    #[test]
    fn test_sequence_decodes_to_joined_glyph() {
        let glyph = emoji_code_to_unicode("128104-8205-128105").unwrap();
        assert_eq!(glyph, "\u{1f468}\u{200d}\u{1f469}");
    }

    #[test]
    fn test_hex_to_glyph_through_decimal() {
        let decimal = convert_hex_emoji_to_decimal("2764-fe0f").unwrap();
        assert_eq!(emoji_code_to_unicode(&decimal).unwrap(), "\u{2764}\u{fe0f}");
    }
}
