//! Component factory: builds BotComponents and the handler chain from config.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::{Bot as CoreBot, Handler};
use crate::handlers::{BasicCommandsHandler, LoggingHandler};
use crate::telegram::TelegramBotAdapter;

/// Transport dependencies shared by the chain's handlers.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    /// Transport used by handlers; the teloxide adapter in production, a mock in tests.
    pub bot: Arc<dyn CoreBot>,
    /// Filled by the runner from get_me() before polling starts.
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Creates the teloxide bot (with optional custom API URL) and the handler-facing transport.
/// `bot_override` replaces the transport handlers talk to.
#[instrument(skip(config, bot_override))]
pub async fn build_bot_components(
    config: &BotConfig,
    bot_override: Option<Arc<dyn CoreBot>>,
) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token().to_string());
        match config.telegram_api_url() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => {
                    info!(url = %url_str, "Using custom Telegram API URL");
                    bot.set_api_url(url)
                }
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    };

    let bot: Arc<dyn CoreBot> = match bot_override {
        Some(bot) => bot,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };

    Ok(BotComponents {
        teloxide_bot,
        bot,
        bot_username: Arc::new(RwLock::new(None)),
    })
}

/// Builds the handler chain: logging → basic commands → the service handler.
pub fn build_handler_chain(
    config: &BotConfig,
    components: &BotComponents,
    handler: Arc<dyn Handler>,
) -> HandlerChain {
    let basic_commands = Arc::new(BasicCommandsHandler::new(
        components.bot.clone(),
        config.greetings().clone(),
        components.bot_username.clone(),
    ));
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(basic_commands)
        .add_handler(handler)
}
