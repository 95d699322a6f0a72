//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `request_handler`: Pure routing and query decisions, independent of Telegram
//! - `message_handler`: Handles incoming messages and sends the replies
//! - `ui_builder`: Creates keyboards and formats messages

pub mod message_handler;
pub mod request_handler;
pub mod ui_builder;

use anyhow::Result;

use crate::config::BotConfig;
use crate::localization::LocalizationManager;

// Re-export main handler function for use in main.rs
pub use message_handler::message_handler;

// Re-export the pure decision layer
pub use request_handler::{classify_text, decide_reply, handle_query, BotReply, IncomingText, QueryReply};

/// Read-only state shared by every message handler
pub struct BotContext {
    pub config: BotConfig,
    pub localization: LocalizationManager,
}

impl BotContext {
    pub fn new(config: BotConfig) -> Result<Self> {
        let localization = LocalizationManager::with_default_language(&config.default_locale)?;
        Ok(Self { config, localization })
    }
}
