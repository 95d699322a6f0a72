//! # Shoplinks Telegram Bot
//!
//! A Telegram bot that turns free-text product queries into affiliate search
//! links for several regional storefronts of the same shop.

pub mod bot;
pub mod config;
pub mod errors;
pub mod link_builder;
pub mod localization;
pub mod market_catalog;
pub mod query_normalizer;
pub mod stop_words;
