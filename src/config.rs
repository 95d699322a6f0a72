//! # Configuration Module
//!
//! Static bot configuration, built once at startup from environment
//! variables and shared read-only by every message handler.

use std::fmt;
use std::path::Path;
use tracing::info;

use crate::errors::ConfigError;
use crate::localization::SUPPORTED_LANGUAGES;
use crate::market_catalog::MarketCatalog;
use crate::stop_words::StopWordSet;

pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const AFFILIATE_TAG_VAR: &str = "AFFILIATE_TAG";
pub const MARKETS_FILE_VAR: &str = "MARKETS_FILE";
pub const STOP_WORDS_VAR: &str = "STOP_WORDS";
pub const DEFAULT_LOCALE_VAR: &str = "DEFAULT_LOCALE";

pub const DEFAULT_LOCALE: &str = "en";

/// Minimum trimmed length (in characters) of a query worth searching for
pub const MIN_QUERY_LENGTH: usize = 3;

/// Everything the bot needs to answer messages
#[derive(Clone)]
pub struct BotConfig {
    /// Telegram bot credential
    pub bot_token: String,
    /// Affiliate tag applied to every generated URL
    pub affiliate_tag: String,
    /// Storefronts, in button order
    pub catalog: MarketCatalog,
    /// Tokens removed from queries
    pub stop_words: StopWordSet,
    /// Reply language when the user's own language is unsupported
    pub default_locale: String,
}

impl BotConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = required(&lookup, TOKEN_VAR)?;
        let affiliate_tag = required(&lookup, AFFILIATE_TAG_VAR)?;
        validate_affiliate_tag(&affiliate_tag)?;

        let catalog = match optional(&lookup, MARKETS_FILE_VAR) {
            Some(path) => MarketCatalog::load_from_file(Path::new(&path))?,
            None => MarketCatalog::default(),
        };

        let stop_words = match optional(&lookup, STOP_WORDS_VAR) {
            Some(list) => StopWordSet::from_comma_separated(&list),
            None => StopWordSet::default(),
        };

        let default_locale = optional(&lookup, DEFAULT_LOCALE_VAR)
            .map(|l| l.to_lowercase())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        if !SUPPORTED_LANGUAGES.contains(&default_locale.as_str()) {
            return Err(ConfigError::UnsupportedLocale(default_locale));
        }

        info!(
            markets = catalog.len(),
            stop_words = stop_words.len(),
            default_locale = %default_locale,
            "Configuration loaded"
        );

        Ok(Self {
            bot_token,
            affiliate_tag,
            catalog,
            stop_words,
            default_locale,
        })
    }
}

// The token stays out of logs and panic messages
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("affiliate_tag", &self.affiliate_tag)
            .field("catalog", &self.catalog)
            .field("stop_words", &self.stop_words)
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or(ConfigError::MissingVariable(key))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyVariable(key));
    }
    Ok(value.to_string())
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Affiliate tags are inserted into URLs verbatim, so only URL-safe
/// characters are accepted. A tag of dots alone would read as a path segment.
pub fn validate_affiliate_tag(tag: &str) -> Result<(), ConfigError> {
    let valid = tag.chars().any(|c| c.is_ascii_alphanumeric())
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidAffiliateTag { tag: tag.to_string() })
    }
}
