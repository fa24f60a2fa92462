//! Tests for the chat service assembly: config → chain with a mock transport, no REPL.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::mock_bot::MockBot;
use common::{group_message, private_message};
use llm_client::{CompletionParams, LlmConfig};
use serial_test::serial;
use telegram_bot::{Bot, BotConfig, HandlerResponse};
use telegram_llm_bot::build_llm_bot_only;

struct TestLlmConfig;

impl LlmConfig for TestLlmConfig {
    fn api_key(&self) -> &str {
        "sk-test-key-1234567890"
    }
    fn base_url(&self) -> &str {
        "http://127.0.0.1:9/v1"
    }
    fn model(&self) -> &str {
        "gpt-test"
    }
    fn system_prompt(&self) -> Option<&str> {
        None
    }
    fn completion_params(&self) -> CompletionParams {
        CompletionParams::default()
    }
    fn max_context_tokens(&self) -> usize {
        1000
    }
    fn timeout(&self) -> Duration {
        Duration::from_millis(200)
    }
    fn max_retries(&self) -> u32 {
        0
    }
}

fn config() -> BotConfig {
    std::env::remove_var("TELEGRAM_API_URL");
    std::env::remove_var("TELOXIDE_API_URL");
    std::env::remove_var("WELCOME_MESSAGE");
    BotConfig::load(Some("123:token".to_string()), "telegram-llm-bot").unwrap()
}

/// **Test: the assembled chain answers /start via the basic command handler.**
#[tokio::test]
#[serial]
async fn test_chain_answers_start() {
    let bot = Arc::new(MockBot::new());
    let (chain, _) = build_llm_bot_only(config(), TestLlmConfig, Some(bot.clone() as Arc<dyn Bot>))
        .await
        .unwrap();

    let response = chain.handle(&private_message(1, "/start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply("Hi! I'm working!".to_string()));
    assert_eq!(bot.texts(), vec!["Hi! I'm working!"]);
}

/// **Test: the assembled chain ignores unaddressed group chatter.**
#[tokio::test]
#[serial]
async fn test_chain_ignores_group_chatter() {
    let bot = Arc::new(MockBot::new());
    let (chain, _) = build_llm_bot_only(config(), TestLlmConfig, Some(bot.clone() as Arc<dyn Bot>))
        .await
        .unwrap();

    let response = chain.handle(&group_message(-5, "hello all")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert!(bot.texts().is_empty());
}

/// **Test: /reset through the full chain confirms.**
#[tokio::test]
#[serial]
async fn test_chain_reset() {
    let bot = Arc::new(MockBot::new());
    let (chain, _) = build_llm_bot_only(config(), TestLlmConfig, Some(bot.clone() as Arc<dyn Bot>))
        .await
        .unwrap();

    chain.handle(&private_message(1, "/reset")).await.unwrap();

    assert_eq!(bot.texts(), vec![telegram_llm_bot::MSG_HISTORY_CLEARED]);
}
