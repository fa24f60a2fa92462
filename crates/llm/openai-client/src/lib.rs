//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for chat completion with sampling options.
//! Classifies moderation rejections (HTTP `content_filter` errors and
//! `finish_reason: content_filter`) separately from other failures, and provides
//! token masking for safe logging.

use async_openai::error::OpenAIError;
use async_openai::types::{CreateChatCompletionRequestArgs, FinishReason};
use async_openai::Client;
use std::sync::Arc;
use thiserror::Error;
use tracing;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key for logs as `head(7) + "***" + tail(4)`.
/// Keys of 11 bytes or fewer, and keys with non-ASCII bytes, become `"***"`.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Sampling options sent with every chat completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

/// Failure of a chat completion call.
#[derive(Error, Debug)]
pub enum ChatCompletionError {
    /// The provider's moderation rejected the prompt or the generated answer.
    #[error("content filtered: {0}")]
    ContentFiltered(String),

    #[error("OpenAI API error: {0}")]
    Api(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("No response from OpenAI")]
    EmptyResponse,
}

const CONTENT_FILTER_MARKERS: [&str; 2] = ["content_filter", "content management policy"];

fn mentions_content_filter(text: &str) -> bool {
    let lower = text.to_lowercase();
    CONTENT_FILTER_MARKERS.iter().any(|m| lower.contains(m))
}

/// Maps an async-openai error onto [`ChatCompletionError`], detecting moderation rejections.
pub fn classify_error(error: OpenAIError) -> ChatCompletionError {
    match error {
        OpenAIError::ApiError(api) => {
            let code = format!("{:?}", api.code);
            if mentions_content_filter(&code) || mentions_content_filter(&api.message) {
                ChatCompletionError::ContentFiltered(api.message)
            } else {
                ChatCompletionError::Api(api.message)
            }
        }
        OpenAIError::InvalidArgument(msg) => ChatCompletionError::InvalidRequest(msg),
        other => ChatCompletionError::Api(other.to_string()),
    }
}

/// OpenAI chat client. Wraps async-openai client and keeps the masked key for request logs.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    masked_key: String,
}

impl OpenAIClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        let masked_key = mask_token(&api_key);
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            masked_key,
        }
    }

    /// Builds a client with a custom base URL (proxies, compatible endpoints, test servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let masked_key = mask_token(&api_key);
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            masked_key,
        }
    }

    /// Sends a chat completion request and returns the first choice's text.
    ///
    /// Logs masked API key, request JSON (debug) and token usage. A first choice finishing with
    /// `content_filter` is reported as [`ChatCompletionError::ContentFiltered`].
    #[allow(deprecated)]
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        options: &SamplingOptions,
    ) -> Result<String, ChatCompletionError> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %self.masked_key,
            temperature = options.temperature,
            max_tokens = options.max_tokens,
            "OpenAI chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(options.temperature)
            .max_tokens(options.max_tokens)
            .top_p(options.top_p)
            .frequency_penalty(options.frequency_penalty)
            .presence_penalty(options.presence_penalty)
            .build()
            .map_err(classify_error)?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(classify_error)?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(ChatCompletionError::EmptyResponse)?;

        if matches!(choice.finish_reason, Some(FinishReason::ContentFilter)) {
            tracing::warn!("OpenAI chat_completion finished with content_filter");
            return Err(ChatCompletionError::ContentFiltered(
                "completion stopped by content filter".to_string(),
            ));
        }

        Ok(choice.message.content.unwrap_or_default())
    }
}
