//! # Configuration Tests
//!
//! Tests for loading and validating the startup configuration.

use shoplinks::config::BotConfig;
use shoplinks::errors::ConfigError;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<BotConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(|key| vars.get(key).cloned())
    }

    const MINIMAL: &[(&str, &str)] = &[("TELEGRAM_BOT_TOKEN", "123:abc"), ("AFFILIATE_TAG", "yourtag-20")];

    /// Defaults apply when only the required variables are set
    #[test]
    fn test_minimal_configuration() {
        let config = load(MINIMAL).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.affiliate_tag, "yourtag-20");
        assert_eq!(config.catalog.len(), 3);
        assert!(config.stop_words.contains("amazon"));
        assert_eq!(config.default_locale, "en");
    }

    /// The bot token is mandatory
    #[test]
    fn test_missing_token() {
        let err = load(&[("AFFILIATE_TAG", "yourtag-20")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVariable("TELEGRAM_BOT_TOKEN")));
    }

    /// The affiliate tag is mandatory and must not be blank
    #[test]
    fn test_missing_or_blank_tag() {
        let err = load(&[("TELEGRAM_BOT_TOKEN", "123:abc")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVariable("AFFILIATE_TAG")));

        let err = load(&[("TELEGRAM_BOT_TOKEN", "123:abc"), ("AFFILIATE_TAG", "   ")]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVariable("AFFILIATE_TAG")));
    }

    /// Tags that would break the URL are refused at startup
    #[test]
    fn test_unsafe_tag() {
        let err = load(&[("TELEGRAM_BOT_TOKEN", "123:abc"), ("AFFILIATE_TAG", "tag&ref=x")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAffiliateTag { .. }));
    }

    /// Stop words can be overridden with a comma-separated list
    #[test]
    fn test_stop_words_override() {
        let mut vars: Vec<(&str, &str)> = MINIMAL.to_vec();
        vars.push(("STOP_WORDS", "Deal, sale"));
        let config = load(&vars).unwrap();

        assert_eq!(config.stop_words.len(), 2);
        assert!(config.stop_words.contains("deal"));
        assert!(!config.stop_words.contains("amazon"));
    }

    /// Unsupported default locales are refused
    #[test]
    fn test_default_locale() {
        let mut vars: Vec<(&str, &str)> = MINIMAL.to_vec();
        vars.push(("DEFAULT_LOCALE", "AR"));
        assert_eq!(load(&vars).unwrap().default_locale, "ar");

        let mut vars: Vec<(&str, &str)> = MINIMAL.to_vec();
        vars.push(("DEFAULT_LOCALE", "de"));
        assert!(matches!(load(&vars), Err(ConfigError::UnsupportedLocale(l)) if l == "de"));
    }

    /// A market file replaces the built-in catalog
    #[test]
    fn test_markets_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{ "label": "Amazon DE", "template": "https://www.amazon.de/s?k={query}&tag={tag}" }]"#,
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let mut vars: Vec<(&str, &str)> = MINIMAL.to_vec();
        vars.push(("MARKETS_FILE", &path));
        let config = load(&vars).unwrap();

        assert_eq!(config.catalog.len(), 1);
        assert_eq!(config.catalog.iter().next().unwrap().label, "Amazon DE");
    }

    /// A market file with a broken template stops startup
    #[test]
    fn test_markets_file_with_malformed_template() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{ "label": "Amazon DE", "template": "https://www.amazon.de/s?k={query}" }]"#)
            .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let mut vars: Vec<(&str, &str)> = MINIMAL.to_vec();
        vars.push(("MARKETS_FILE", &path));
        assert!(matches!(load(&vars), Err(ConfigError::MissingPlaceholder { .. })));
    }

    /// A missing market file stops startup
    #[test]
    fn test_markets_file_not_found() {
        let mut vars: Vec<(&str, &str)> = MINIMAL.to_vec();
        vars.push(("MARKETS_FILE", "/nonexistent/markets.json"));
        assert!(matches!(load(&vars), Err(ConfigError::CatalogRead { .. })));
    }
}
