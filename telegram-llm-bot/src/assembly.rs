//! Assembly: builds the chat handler from LLM config and bot components, and runs the bot.

use std::sync::Arc;

use anyhow::Result;
use llm_client::{LlmClient, LlmConfig, OpenAILlmClient};
use openai_client::mask_token;
use prompt::DEFAULT_SYSTEM_MESSAGE;
use telegram_bot::{
    build_bot_only, run_bot, Bot, BotComponents, BotConfig, ConversationStore, EstimateTokenizer,
    Handler, HandlerChain,
};
use tracing::{info, warn};

use crate::handlers::ChatHandler;

/// Name used for the default log file.
pub const SERVICE_NAME: &str = "telegram-llm-bot";

/// Builds the chat handler: OpenAI client, per-chat conversation store, and the transport
/// from `components`.
pub fn build_chat_handler(llm_cfg: &dyn LlmConfig, components: &BotComponents) -> Arc<ChatHandler> {
    let system_prompt = match llm_cfg.system_prompt() {
        Some(s) => {
            let prefix: String = s.chars().take(50).collect();
            info!(len = s.len(), prefix = %prefix, "Using custom system prompt from env");
            s.to_string()
        }
        None => {
            warn!("No LLM_SYSTEM_PROMPT/SYSTEM_PROMPT in env; using default (plain text, no Markdown)");
            DEFAULT_SYSTEM_MESSAGE.to_string()
        }
    };

    info!(
        base_url = %llm_cfg.base_url(),
        model = %llm_cfg.model(),
        api_key = %mask_token(llm_cfg.api_key()),
        max_context_tokens = llm_cfg.max_context_tokens(),
        timeout_secs = llm_cfg.timeout().as_secs(),
        max_retries = llm_cfg.max_retries(),
        "Building chat handler"
    );

    let llm_client: Arc<dyn LlmClient> = Arc::new(
        OpenAILlmClient::with_base_url(llm_cfg.api_key().to_string(), llm_cfg.base_url().to_string())
            .with_model(llm_cfg.model().to_string())
            .with_timeout(llm_cfg.timeout())
            .with_max_retries(llm_cfg.max_retries()),
    );

    let store = Arc::new(ConversationStore::new(
        system_prompt,
        llm_cfg.max_context_tokens(),
        Arc::new(EstimateTokenizer),
    ));

    Arc::new(ChatHandler::new(
        components.bot_username.clone(),
        llm_client,
        components.bot.clone(),
        store,
        llm_cfg.completion_params(),
    ))
}

/// Runs the bot with the chat handler. Load config with `telegram_bot::load_config` and
/// `EnvLlmConfig::from_env` before calling.
pub async fn run_bot_with_llm<C>(config: BotConfig, llm_cfg: C) -> Result<()>
where
    C: LlmConfig + 'static,
{
    run_bot(config, move |_, components| {
        build_chat_handler(&llm_cfg, &components) as Arc<dyn Handler>
    })
    .await
}

/// Same pipeline as [`run_bot_with_llm`] without the REPL; `bot_override` replaces the transport.
/// Returns the handler chain for driving with fake messages in tests.
pub async fn build_llm_bot_only<C>(
    config: BotConfig,
    llm_cfg: C,
    bot_override: Option<Arc<dyn Bot>>,
) -> Result<(HandlerChain, BotComponents)>
where
    C: LlmConfig + 'static,
{
    build_bot_only(config, bot_override, move |_, components| {
        build_chat_handler(&llm_cfg, &components) as Arc<dyn Handler>
    })
    .await
}
