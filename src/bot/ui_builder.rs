//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::link_builder::LinkEntry;
use crate::localization::LocalizationManager;

/// Sample queries shown in the welcome message
pub const WELCOME_EXAMPLES: &[&str] = &["wireless earbuds", "iphone 13 case"];

/// Welcome text for `/start` and `/help` (Telegram HTML)
pub fn format_welcome_message(localization: &LocalizationManager, language_code: Option<&str>) -> String {
    let examples = WELCOME_EXAMPLES
        .iter()
        .map(|example| format!("<code>{example}</code>"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n{}\n{}\n\n{}",
        localization.t_lang("welcome-title", language_code),
        localization.t_lang("welcome-description", language_code),
        localization.t_lang("welcome-examples", language_code),
        examples,
        localization.t_lang("welcome-final", language_code)
    )
}

/// Inline keyboard with one URL button per row, in link order
pub fn create_market_keyboard(links: &[LinkEntry]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        links
            .iter()
            .map(|link| vec![InlineKeyboardButton::url(link.label.clone(), link.url.clone())]),
    )
}
