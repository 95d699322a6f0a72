//! # Link Builder Module
//!
//! Expands a normalized query into one affiliate link per storefront.

use url::Url;

use crate::market_catalog::MarketCatalog;

/// A resolved storefront link, ready to be shown as a button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: String,
    pub url: Url,
}

/// Build one link per catalog entry, in catalog order
///
/// Pure templating: the output always has exactly `catalog.len()` entries
/// and no URL is fetched or checked for reachability.
///
/// # Examples
///
/// ```rust
/// use shoplinks::link_builder::build_links;
/// use shoplinks::market_catalog::MarketCatalog;
///
/// let links = build_links("wireless+earbuds", &MarketCatalog::default(), "mytag-20");
/// assert_eq!(links.len(), 3);
/// assert_eq!(links[0].url.as_str(), "https://www.amazon.com/s?k=wireless+earbuds&tag=mytag-20");
/// ```
pub fn build_links(normalized_query: &str, catalog: &MarketCatalog, tag: &str) -> Vec<LinkEntry> {
    catalog
        .iter()
        .map(|market| LinkEntry {
            label: market.label.clone(),
            url: market.template.render_url(normalized_query, tag),
        })
        .collect()
}
