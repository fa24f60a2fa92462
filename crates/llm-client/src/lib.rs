//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait, the tagged [`Completion`] result and an OpenAI implementation.
//! Transport-agnostic; used by the chat handler of `telegram-llm-bot`.
//!
//! Failures are values, not errors: a completion either yields text, was rejected by the
//! provider's content filter, or failed for any other reason (including timeouts).

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig};
pub use openai_llm::OpenAILlmClient;

/// Sampling parameters for one completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 800,
            top_p: 0.95,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// Outcome of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Generated reply text.
    Text(String),
    /// The provider's moderation rejected the prompt or the answer.
    ContentFiltered,
    /// Any other failure, with a detail string for logs.
    ServiceError(String),
}

/// LLM client interface: request a completion for an ordered list of messages.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `messages` (already including the system message) and returns the tagged outcome.
    async fn complete(&self, messages: Vec<ChatMessage>, params: &CompletionParams) -> Completion;
}

/// Runs `attempt` under `timeout`; a timed-out attempt is retried up to `max_retries` times.
///
/// Non-timeout outcomes (including `ServiceError`) are returned as-is without retrying.
pub async fn complete_with_timeout<F, Fut>(
    timeout: Duration,
    max_retries: u32,
    mut attempt: F,
) -> Completion
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Completion>,
{
    let attempts = max_retries.saturating_add(1);
    for n in 1..=attempts {
        match tokio::time::timeout(timeout, attempt()).await {
            Ok(outcome) => return outcome,
            Err(_) => warn!(
                attempt = n,
                attempts,
                timeout_ms = timeout.as_millis() as u64,
                "LLM completion timed out"
            ),
        }
    }
    Completion::ServiceError(format!(
        "completion timed out after {} attempt(s) of {:?}",
        attempts, timeout
    ))
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> anyhow::Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
