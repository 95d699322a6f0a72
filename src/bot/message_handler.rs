//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, info};

use super::request_handler::{decide_reply, BotReply};
use super::ui_builder::{create_market_keyboard, format_welcome_message};
use super::BotContext;

async fn send_reply(bot: &Bot, msg: &Message, reply: BotReply, ctx: &BotContext) -> Result<()> {
    // Extract user's language code from Telegram
    let language_code = msg
        .from
        .as_ref()
        .and_then(|user| user.language_code.as_deref());

    match reply {
        BotReply::Welcome => {
            let welcome_message = format_welcome_message(&ctx.localization, language_code);
            bot.send_message(msg.chat.id, welcome_message)
                .parse_mode(ParseMode::Html)
                .await?;
        }
        BotReply::QueryTooShort => {
            debug!(user_id = %msg.chat.id, "Query too short, asking for a clearer product name");
            bot.send_message(
                msg.chat.id,
                ctx.localization.t_lang("query-too-short", language_code),
            )
            .await?;
        }
        BotReply::MarketLinks(links) => {
            info!(user_id = %msg.chat.id, links = links.len(), "Sending market links");
            bot.send_message(
                msg.chat.id,
                ctx.localization.t_lang("choose-market", language_code),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(create_market_keyboard(&links))
            .await?;
        }
        BotReply::UnsupportedMessage => {
            debug!(user_id = %msg.chat.id, "Received unsupported message type from user");
            bot.send_message(
                msg.chat.id,
                ctx.localization.t_lang("unsupported-message", language_code),
            )
            .parse_mode(ParseMode::Html)
            .await?;
        }
        BotReply::NoReply => {
            debug!(user_id = %msg.chat.id, "Ignoring unknown command");
        }
    }

    Ok(())
}

pub async fn message_handler(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> Result<()> {
    if let Some(text) = msg.text() {
        debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");
    }

    let reply = decide_reply(msg.text(), &ctx.config);
    send_reply(&bot, &msg, reply, &ctx).await
}
