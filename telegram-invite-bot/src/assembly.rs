//! Assembly: builds the invite handler from config and bot components, and runs the bot.

use std::sync::Arc;

use anyhow::Result;
use telegram_bot::{
    build_bot_only, run_bot, Bot, BotComponents, BotConfig, Handler, HandlerChain,
};
use tracing::info;

use crate::config::InviteConfig;
use crate::handlers::InviteHandler;

/// Name used for the default log file.
pub const SERVICE_NAME: &str = "telegram-invite-bot";

const ADDED_TO_CHAT_MESSAGE: &str = "Bot added to new chat!\nUse /chatinfo to see details about this chat\nUse /invite to get an invite link";

pub fn build_invite_handler(invite_cfg: InviteConfig, components: &BotComponents) -> Arc<InviteHandler> {
    info!(
        target_chat = %invite_cfg.chat,
        expire_days = invite_cfg.expire_days,
        member_limit = invite_cfg.member_limit,
        "Building invite handler"
    );
    Arc::new(InviteHandler::new(
        components.bot_username.clone(),
        components.bot.clone(),
        invite_cfg,
    ))
}

/// Runs the bot with the invite handler. Load config with `telegram_bot::load_config` and
/// `InviteConfig::from_env` before calling.
pub async fn run_bot_with_invites(config: BotConfig, invite_cfg: InviteConfig) -> Result<()> {
    let config = config.with_added_to_chat_message(ADDED_TO_CHAT_MESSAGE);
    run_bot(config, move |_, components| {
        build_invite_handler(invite_cfg, &components) as Arc<dyn Handler>
    })
    .await
}

/// Same pipeline as [`run_bot_with_invites`] without the REPL; `bot_override` replaces the
/// transport. Returns the handler chain for driving with fake messages in tests.
pub async fn build_invite_bot_only(
    config: BotConfig,
    invite_cfg: InviteConfig,
    bot_override: Option<Arc<dyn Bot>>,
) -> Result<(HandlerChain, BotComponents)> {
    let config = config.with_added_to_chat_message(ADDED_TO_CHAT_MESSAGE);
    build_bot_only(config, bot_override, move |_, components| {
        build_invite_handler(invite_cfg, &components) as Arc<dyn Handler>
    })
    .await
}
