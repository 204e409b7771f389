//! Module with the process-wide placeholder character.
//!
//! The placeholder is only used by [`crate::GapStrategy::Textual`], which replaces matched text by
//! the placeholder to find the gaps. It must be a character that does not occur in the input.
//!
//! Changing the placeholder while other threads compute gaps with it leads to unpredictable gaps.

use std::sync::{PoisonError, RwLock};

use crate::{Result, TapspanError, TapspanErrorKind};

/// The default placeholder, a rarely used symbol (U+03A9, GREEK CAPITAL LETTER OMEGA).
pub const DEFAULT_PLACEHOLDER: char = '\u{3a9}';

static PLACEHOLDER: RwLock<char> = RwLock::new(DEFAULT_PLACEHOLDER);

/// Sets the process-wide placeholder character.
///
/// Whitespace and ASCII alphanumeric characters are rejected because they occur in ordinary
/// input.
pub fn configure_placeholder_character(placeholder: char) -> Result<()> {
    let placeholder = validate_placeholder(placeholder)?;
    *PLACEHOLDER.write().unwrap_or_else(PoisonError::into_inner) = placeholder;
    Ok(())
}

/// Returns the process-wide placeholder character.
pub fn placeholder_character() -> char {
    *PLACEHOLDER.read().unwrap_or_else(PoisonError::into_inner)
}

/// Restores the default placeholder character.
pub fn reset_placeholder_character() {
    *PLACEHOLDER.write().unwrap_or_else(PoisonError::into_inner) = DEFAULT_PLACEHOLDER;
}

pub(crate) fn validate_placeholder(placeholder: char) -> Result<char> {
    if placeholder.is_whitespace() || placeholder.is_ascii_alphanumeric() {
        return Err(TapspanError::new(TapspanErrorKind::InvalidPlaceholder(
            placeholder,
        )));
    }
    Ok(placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_placeholder() {
        assert!(validate_placeholder(DEFAULT_PLACEHOLDER).is_ok());
        assert!(validate_placeholder('\u{fffc}').is_ok());
        assert!(validate_placeholder(' ').is_err());
        assert!(validate_placeholder('a').is_err());
        assert!(validate_placeholder('7').is_err());
    }

    // The only test that touches the process-wide placeholder.
    #[test]
    fn test_configure_placeholder() {
        assert!(configure_placeholder_character('\n').is_err());
        assert_eq!(placeholder_character(), DEFAULT_PLACEHOLDER);
        configure_placeholder_character('\u{fffc}').unwrap();
        assert_eq!(placeholder_character(), '\u{fffc}');
        reset_placeholder_character();
        assert_eq!(placeholder_character(), DEFAULT_PLACEHOLDER);
    }
}
