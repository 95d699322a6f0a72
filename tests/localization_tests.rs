//! # Localization Tests
//!
//! This module contains unit tests for the localization functionality,
//! testing message retrieval in every supported language.

use shoplinks::localization::{LocalizationManager, SUPPORTED_LANGUAGES};

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "welcome-title",
        "welcome-description",
        "welcome-examples",
        "welcome-final",
        "query-too-short",
        "choose-market",
        "unsupported-message",
    ];

    fn setup_localization() -> LocalizationManager {
        LocalizationManager::new().expect("Failed to create localization manager")
    }

    #[test]
    fn test_every_key_translated() {
        let manager = setup_localization();

        for language in SUPPORTED_LANGUAGES {
            for key in KEYS {
                let message = manager.get_message_in_language(key, language);
                assert!(!message.is_empty());
                assert!(
                    !message.starts_with("Missing"),
                    "{key} missing in {language}: {message}"
                );
            }
        }
    }

    #[test]
    fn test_get_message_nonexistent_key() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("nonexistent-key", "en");
        assert!(message.starts_with("Missing translation:"));
    }

    #[test]
    fn test_get_message_unsupported_language() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("query-too-short", "unsupported");
        // Should fall back to English
        assert_eq!(message, manager.get_message_in_language("query-too-short", "en"));
    }

    #[test]
    fn test_arabic_localization() {
        let manager = setup_localization();

        let message = manager.t_lang("query-too-short", Some("ar"));
        assert_eq!(message, "❗ اكتب اسم منتج أوضح.");
    }

    #[test]
    fn test_french_localization() {
        let manager = setup_localization();

        let message = manager.t_lang("choose-market", Some("fr-FR"));
        let english_message = manager.t_lang("choose-market", Some("en"));
        assert_ne!(message, english_message);
        assert!(message.contains("Amazon"));
    }
}
