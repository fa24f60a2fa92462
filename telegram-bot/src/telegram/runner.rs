//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// Calls get_me() first and stores the bot's username in `bot_username` (used for @mentions
/// and command suffixes). Each message runs through the chain in its own task; chain errors
/// are logged and never stop the loop. Returns when the REPL exits (Ctrl-C).
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    let bot_user_id = match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
            Some(me.user.id.0)
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; mentions will not be detected");
            None
        }
    };

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper::new(&msg)
                .with_bot_user_id(bot_user_id)
                .to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                "Received update"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    info!("Bot stopped");
    Ok(())
}
