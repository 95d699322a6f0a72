//! # Market Catalog Module
//!
//! Ordered list of storefronts, each with a display label and a URL template.
//! Templates use `{query}` for the search term and `{tag}` for the affiliate
//! tag. They are parsed and validated once at startup: the scheme and host
//! are literal, slots only appear in the path, query or fragment, and the
//! template is already in the canonical form `url::Url` would produce.
//! Rendering afterwards cannot fail.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::ConfigError;

pub const QUERY_PLACEHOLDER: &str = "{query}";
pub const TAG_PLACEHOLDER: &str = "{tag}";

// Built-in storefronts, in display order
pub const DEFAULT_MARKETS: &[(&str, &str)] = &[
    ("🇺🇸 Amazon US", "https://www.amazon.com/s?k={query}&tag={tag}"),
    ("🇦🇪 Amazon AE", "https://www.amazon.ae/s?k={query}&tag={tag}"),
    ("🇸🇦 Amazon SA", "https://www.amazon.sa/s?k={query}&tag={tag}"),
];

// Values substituted when checking that a template resolves to a URL
const SAMPLE_QUERY: &str = "sample+query";
const SAMPLE_TAG: &str = "sample-20";

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex =
        Regex::new(r"\{([^{}]*)\}").expect("Placeholder pattern should be valid");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Query,
    Tag,
}

/// A parsed URL template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    raw: String,
    segments: Vec<Segment>,
    // Literal text before the first slot, parsed
    base: Url,
}

impl UrlTemplate {
    /// Parse and validate a template for the market called `label`
    pub fn parse(label: &str, raw: &str) -> Result<Self, ConfigError> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for caps in PLACEHOLDER_REGEX.captures_iter(raw) {
            let Some(whole) = caps.get(0) else { continue };
            push_literal(&mut segments, label, &raw[last_end..whole.start()])?;

            match &caps[1] {
                "query" => segments.push(Segment::Query),
                "tag" => segments.push(Segment::Tag),
                other => {
                    return Err(ConfigError::UnknownPlaceholder {
                        label: label.to_string(),
                        name: other.to_string(),
                    })
                }
            }
            last_end = whole.end();
        }
        push_literal(&mut segments, label, &raw[last_end..])?;

        for (segment, placeholder) in [(Segment::Query, QUERY_PLACEHOLDER), (Segment::Tag, TAG_PLACEHOLDER)] {
            if !segments.contains(&segment) {
                return Err(ConfigError::MissingPlaceholder {
                    label: label.to_string(),
                    placeholder,
                });
            }
        }

        let base = parse_literal_prefix(label, &segments)?;
        let template = Self {
            raw: raw.to_string(),
            segments,
            base,
        };
        template.check_canonical(label)?;
        Ok(template)
    }

    /// Substitute the search term and the affiliate tag
    pub fn render(&self, query: &str, tag: &str) -> String {
        let mut url = String::with_capacity(self.raw.len() + query.len() + tag.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Query => url.push_str(query),
                Segment::Tag => url.push_str(tag),
            }
        }
        url
    }

    /// Substitute both slots and return the resulting URL
    ///
    /// `query` must come from `normalize` and `tag` must be a validated
    /// affiliate tag. With such values the literal scheme and host make
    /// parsing infallible; should it fail anyway, the literal prefix is
    /// returned so the market keeps its button.
    pub fn render_url(&self, query: &str, tag: &str) -> Url {
        let rendered = self.render(query, tag);
        match Url::parse(&rendered) {
            Ok(url) => url,
            Err(e) => {
                warn!(url = %rendered, error = %e, "Rendered market URL did not parse, using template base");
                self.base.clone()
            }
        }
    }

    /// The template as it was configured
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    // Parsing must not rewrite the template, or buttons would differ from
    // the configured URL
    fn check_canonical(&self, label: &str) -> Result<(), ConfigError> {
        let rendered = self.render(SAMPLE_QUERY, SAMPLE_TAG);
        let url = Url::parse(&rendered).map_err(|e| invalid_url(label, e.to_string()))?;
        if url.as_str() != rendered {
            return Err(invalid_url(
                label,
                format!("not in canonical form, would be rewritten to {:?}", url.as_str()),
            ));
        }
        Ok(())
    }
}

fn invalid_url(label: &str, reason: String) -> ConfigError {
    ConfigError::InvalidTemplateUrl {
        label: label.to_string(),
        reason,
    }
}

// The text before the first slot must hold the whole scheme and authority
fn parse_literal_prefix(label: &str, segments: &[Segment]) -> Result<Url, ConfigError> {
    let prefix = match segments.first() {
        Some(Segment::Literal(text)) => text.as_str(),
        _ => "",
    };

    let authority_closed = prefix
        .split_once("://")
        .is_some_and(|(_, rest)| rest.contains(['/', '?', '#']));
    if !authority_closed {
        return Err(invalid_url(
            label,
            "placeholders must come after the scheme and host".to_string(),
        ));
    }

    let base = Url::parse(prefix).map_err(|e| invalid_url(label, e.to_string()))?;
    match base.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid_url(label, format!("unsupported scheme {scheme:?}"))),
    }
    if base.host_str().is_none() {
        return Err(invalid_url(label, "missing host".to_string()));
    }
    Ok(base)
}

fn push_literal(segments: &mut Vec<Segment>, label: &str, text: &str) -> Result<(), ConfigError> {
    if text.contains(['{', '}']) {
        return Err(ConfigError::UnbalancedBrace {
            label: label.to_string(),
        });
    }
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
    Ok(())
}

/// One storefront
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketEntry {
    pub label: String,
    pub template: UrlTemplate,
}

/// Market definition as written in a `MARKETS_FILE`
#[derive(Debug, Clone, Deserialize)]
struct MarketDefinition {
    label: String,
    template: String,
}

/// Ordered, validated list of storefronts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketCatalog {
    entries: Vec<MarketEntry>,
}

impl MarketCatalog {
    /// Build a catalog from `(label, template)` pairs, keeping their order
    pub fn new<I, L, T>(markets: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (L, T)>,
        L: AsRef<str>,
        T: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (label, template) in markets {
            let label = label.as_ref().trim();
            if label.is_empty() {
                return Err(ConfigError::EmptyMarketLabel);
            }
            if !seen.insert(label.to_string()) {
                return Err(ConfigError::DuplicateMarketLabel(label.to_string()));
            }

            let template = UrlTemplate::parse(label, template.as_ref())?;
            debug!(market = %label, template = %template.as_str(), "Market template validated");
            entries.push(MarketEntry {
                label: label.to_string(),
                template,
            });
        }

        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{ "label": ..., "template": ... }` objects
    pub fn from_json_str(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let definitions: Vec<MarketDefinition> =
            serde_json::from_str(json).map_err(|source| ConfigError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(definitions.into_iter().map(|d| (d.label, d.template)))
    }

    /// Load a catalog file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json, path)?;
        info!(path = %path.display(), markets = catalog.len(), "Loaded market catalog");
        Ok(catalog)
    }

    /// Markets in display order
    pub fn iter(&self) -> impl Iterator<Item = &MarketEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MarketCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_MARKETS.iter().copied()).expect("Built-in market catalog should be valid")
    }
}
