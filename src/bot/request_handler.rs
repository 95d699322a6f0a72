//! Request Handler module: decides how to answer a text message
//!
//! Everything here is pure, so the routing rules can be tested without a
//! Telegram connection. `message_handler` turns the decisions into replies.

use crate::config::{BotConfig, MIN_QUERY_LENGTH};
use crate::link_builder::{build_links, LinkEntry};
use crate::query_normalizer::normalize;

/// What an incoming text message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomingText<'a> {
    /// `/start` or `/help`
    Welcome,
    /// Any other bot command; commands never reach the query path
    IgnoredCommand(&'a str),
    /// Free text to search for
    Query(&'a str),
}

/// Reply to send for an incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    /// Welcome text with example queries
    Welcome,
    /// Ask for a clearer product name
    QueryTooShort,
    /// Market prompt with one button per link
    MarketLinks(Vec<LinkEntry>),
    /// Hint that only text queries are understood
    UnsupportedMessage,
    /// Send nothing
    NoReply,
}

/// Outcome of a product query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryReply {
    /// Text too short to be a product name
    Rejected,
    /// One link per market, in catalog order
    LinksReady(Vec<LinkEntry>),
}

/// Route a text message
///
/// Commands may carry a bot mention (`/start@shop_bot`) and a payload
/// (`/start ref123`); both are ignored. Like Telegram's command entities,
/// a command only counts when `/` is the very first character.
pub fn classify_text(text: &str) -> IncomingText<'_> {
    let Some(command) = text.strip_prefix('/') else {
        return IncomingText::Query(text);
    };

    let name = command
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .split('@')
        .next()
        .unwrap_or_default();

    match name.to_lowercase().as_str() {
        "start" | "help" => IncomingText::Welcome,
        _ => IncomingText::IgnoredCommand(name),
    }
}

/// Whether a query is long enough to search for
pub fn is_query_long_enough(text: &str) -> bool {
    text.trim().chars().count() >= MIN_QUERY_LENGTH
}

/// Answer a free-text product query
pub fn handle_query(text: &str, config: &BotConfig) -> QueryReply {
    if !is_query_long_enough(text) {
        return QueryReply::Rejected;
    }

    let normalized = normalize(text.trim(), &config.stop_words);
    QueryReply::LinksReady(build_links(&normalized, &config.catalog, &config.affiliate_tag))
}

/// Decide the reply for a message; `text` is `None` for photos, stickers
/// and other non-text messages
pub fn decide_reply(text: Option<&str>, config: &BotConfig) -> BotReply {
    let Some(text) = text else {
        return BotReply::UnsupportedMessage;
    };

    match classify_text(text) {
        IncomingText::Welcome => BotReply::Welcome,
        IncomingText::IgnoredCommand(_) => BotReply::NoReply,
        IncomingText::Query(query) => match handle_query(query, config) {
            QueryReply::Rejected => BotReply::QueryTooShort,
            QueryReply::LinksReady(links) => BotReply::MarketLinks(links),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_commands() {
        assert_eq!(classify_text("/start"), IncomingText::Welcome);
        assert_eq!(classify_text("/help"), IncomingText::Welcome);
        assert_eq!(classify_text("/start@shop_bot"), IncomingText::Welcome);
        assert_eq!(classify_text("/start ref123"), IncomingText::Welcome);
        assert_eq!(classify_text("/settings"), IncomingText::IgnoredCommand("settings"));
        assert_eq!(classify_text("/"), IncomingText::IgnoredCommand(""));
    }

    #[test]
    fn test_leading_space_is_not_a_command() {
        assert_eq!(classify_text("  /start"), IncomingText::Query("  /start"));
        assert_eq!(classify_text("\n/help"), IncomingText::Query("\n/help"));
    }

    #[test]
    fn test_classify_free_text() {
        assert_eq!(classify_text("iphone 13 case"), IncomingText::Query("iphone 13 case"));
        assert_eq!(classify_text("usb a/c cable"), IncomingText::Query("usb a/c cable"));
    }

    #[test]
    fn test_query_length_counts_characters() {
        assert!(!is_query_long_enough(" hi "));
        assert!(!is_query_long_enough("\n\t"));
        assert!(is_query_long_enough("tv!"));
        // Two-byte characters count once each
        assert!(!is_query_long_enough("éé"));
        assert!(is_query_long_enough("ééé"));
    }
}
