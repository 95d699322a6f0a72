use anyhow::Result;
use shoplinks::bot::{self, BotContext};
use shoplinks::config::BotConfig;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging (LOG_FORMAT=json for structured output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting Shoplinks Telegram Bot");

    // Invalid configuration is fatal: never start serving with a broken catalog
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let bot = Bot::new(config.bot_token.clone());
    let ctx = Arc::new(BotContext::new(config)?);

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let ctx = Arc::clone(&ctx);
        move |bot: Bot, msg: Message| {
            let ctx = Arc::clone(&ctx);
            async move { bot::message_handler(bot, msg, ctx).await }
        }
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
