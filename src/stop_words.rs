//! # Stop Words Module
//!
//! Marketing and filler terms that are removed from a query before it is
//! used as a search term.

use std::collections::HashSet;

/// Stop words used when no `STOP_WORDS` override is configured
pub const DEFAULT_STOP_WORDS: &[&str] = &["buy", "cheap", "best", "price", "amazon", "online", "shop"];

/// Immutable set of lowercase stop-word tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Build a set from arbitrary tokens. Tokens are trimmed and lower-cased;
    /// blank tokens are ignored.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a comma-separated list, e.g. `"buy, cheap,best"`
    pub fn from_comma_separated(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Whether `token` is a stop word. Comparison is case-insensitive.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS.iter())
    }
}
