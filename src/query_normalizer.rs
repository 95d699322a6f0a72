//! # Query Normalizer Module
//!
//! Turns raw user text into a URL-safe search term.
//!
//! ## Algorithm
//!
//! 1. Lower-case the input
//! 2. Replace every character outside `[a-z0-9 ]` with a space
//! 3. Split on whitespace, so runs of removed characters never yield empty tokens
//! 4. Drop stop words, keeping the relative order of the remaining tokens
//! 5. Join with single spaces and form-encode (spaces become `+`)
//!
//! The function is total: unknown characters are dropped, never rejected, and
//! a query made only of stop words or punctuation normalizes to `""`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;
use url::form_urlencoded;

use crate::stop_words::StopWordSet;

lazy_static! {
    static ref NON_QUERY_CHARS: Regex =
        Regex::new(r"[^a-z0-9 ]").expect("Query character pattern should be valid");
}

/// Normalize `raw` into a form-encoded search term
///
/// # Examples
///
/// ```rust
/// use shoplinks::query_normalizer::normalize;
/// use shoplinks::stop_words::StopWordSet;
///
/// let stop_words = StopWordSet::new(["buy", "cheap", "online"]);
/// assert_eq!(normalize("Buy Cheap iPhone 13 Case Online", &stop_words), "iphone+13+case");
/// ```
pub fn normalize(raw: &str, stop_words: &StopWordSet) -> String {
    let lowered = raw.to_lowercase();
    let stripped = NON_QUERY_CHARS.replace_all(&lowered, " ");

    let tokens: Vec<&str> = stripped
        .split_whitespace()
        .filter(|token| !stop_words.contains(token))
        .collect();

    let encoded = encode_query(&tokens.join(" "));
    trace!(
        input_length = raw.len(),
        tokens = tokens.len(),
        normalized = %encoded,
        "Normalized query"
    );
    encoded
}

/// Form-encode a search term (`application/x-www-form-urlencoded` rules)
pub fn encode_query(term: &str) -> String {
    form_urlencoded::byte_serialize(term.as_bytes()).collect()
}

/// Decode a form-encoded search term back into plain text
pub fn decode_query(encoded: &str) -> String {
    form_urlencoded::parse(format!("q={encoded}").as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_of_punctuation_collapse() {
        let stop_words = StopWordSet::new(Vec::<&str>::new());
        assert_eq!(normalize("usb-c -- cable!!!", &stop_words), "usb+c+cable");
    }

    #[test]
    fn test_non_ascii_letters_are_dropped() {
        let stop_words = StopWordSet::new(Vec::<&str>::new());
        assert_eq!(normalize("café crème 2", &stop_words), "caf+cr+me+2");
        assert_eq!(normalize("سماعات", &stop_words), "");
    }

    #[test]
    fn test_decode_query() {
        assert_eq!(decode_query("iphone+13+case"), "iphone 13 case");
        assert_eq!(decode_query(""), "");
    }
}
