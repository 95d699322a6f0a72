//! # Error Types Module
//!
//! Startup configuration errors. Every variant is fatal: the bot refuses to
//! start serving until the configuration is fixed.

use std::path::PathBuf;

/// Errors detected while loading and validating the bot configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("{0} must be set")]
    MissingVariable(&'static str),
    /// A required environment variable is set but blank
    #[error("{0} must not be empty")]
    EmptyVariable(&'static str),
    /// The affiliate tag contains characters that are not URL-safe
    #[error("invalid affiliate tag {tag:?}: only ASCII letters, digits, '-', '_' and '.' are allowed")]
    InvalidAffiliateTag { tag: String },
    /// The market catalog has no entries
    #[error("market catalog is empty")]
    EmptyCatalog,
    /// Two markets share the same label
    #[error("duplicate market label {0:?}")]
    DuplicateMarketLabel(String),
    /// A market label is blank
    #[error("market label must not be empty")]
    EmptyMarketLabel,
    /// A URL template lacks one of the required slots
    #[error("template for market {label:?} is missing the {placeholder} placeholder")]
    MissingPlaceholder {
        label: String,
        placeholder: &'static str,
    },
    /// A URL template references a slot that does not exist
    #[error("template for market {label:?} uses unknown placeholder {{{name}}}")]
    UnknownPlaceholder { label: String, name: String },
    /// A URL template has a `{` or `}` without its counterpart
    #[error("template for market {label:?} has an unbalanced brace")]
    UnbalancedBrace { label: String },
    /// A URL template does not resolve to an http(s) URL
    #[error("template for market {label:?} is not a valid URL: {reason}")]
    InvalidTemplateUrl { label: String, reason: String },
    /// The catalog file could not be read
    #[error("failed to read market catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not a JSON array of markets
    #[error("failed to parse market catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The configured default locale has no translation bundle
    #[error("unsupported locale {0:?}")]
    UnsupportedLocale(String),
}
