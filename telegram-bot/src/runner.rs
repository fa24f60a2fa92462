use std::sync::Arc;

use anyhow::Result;
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, build_handler_chain, BotComponents};
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot, Handler};
use crate::telegram::run_repl;

/// Main entry: validate config, init logging, build components, create the service handler via
/// the factory, then run the REPL until shutdown.
#[instrument(skip(config, make_handler))]
pub async fn run_bot<F>(config: BotConfig, make_handler: F) -> Result<()>
where
    F: FnOnce(&BotConfig, BotComponents) -> Arc<dyn Handler>,
{
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(log_file = %config.log_file(), "Initializing bot");

    let components = build_bot_components(&config, None).await?;
    let handler = make_handler(&config, components.clone());
    let handler_chain = build_handler_chain(&config, &components, handler);

    info!("Bot started successfully");

    run_repl(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot_username.clone(),
    )
    .await
}

/// Builds components and handler chain without starting the REPL or logging. Used by
/// integration tests that inject a mock bot and drive the chain with fake messages.
pub async fn build_bot_only<F>(
    config: BotConfig,
    bot_override: Option<Arc<dyn Bot>>,
    make_handler: F,
) -> Result<(HandlerChain, BotComponents)>
where
    F: FnOnce(&BotConfig, BotComponents) -> Arc<dyn Handler>,
{
    config.validate()?;
    let components = build_bot_components(&config, bot_override).await?;
    let handler = make_handler(&config, components.clone());
    let handler_chain = build_handler_chain(&config, &components, handler);
    Ok((handler_chain, components))
}
