//! LlmClient backed by openai-client: converts messages, applies sampling params, maps errors to [`Completion`].

use async_trait::async_trait;
use openai_client::{ChatCompletionError, SamplingOptions};
use prompt::ChatMessage;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use super::{chat_message_to_openai, complete_with_timeout, Completion, CompletionParams, LlmClient};

/// Default request timeout for one completion attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// LlmClient implementation on top of [`openai_client::OpenAIClient`].
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    timeout: Duration,
    max_retries: u32,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self::from_client(openai_client::OpenAIClient::new(api_key))
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::from_client(openai_client::OpenAIClient::with_base_url(api_key, base_url))
    }

    fn from_client(client: openai_client::OpenAIClient) -> Self {
        Self {
            client,
            model: "gpt-3.5-turbo".to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: 1,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn sampling_options(params: &CompletionParams) -> SamplingOptions {
    SamplingOptions {
        temperature: params.temperature,
        max_tokens: params.max_tokens,
        top_p: params.top_p,
        frequency_penalty: params.frequency_penalty,
        presence_penalty: params.presence_penalty,
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages, params), fields(model = %self.model, message_count = messages.len()))]
    async fn complete(&self, messages: Vec<ChatMessage>, params: &CompletionParams) -> Completion {
        let mut openai_messages = Vec::with_capacity(messages.len());
        for msg in &messages {
            match chat_message_to_openai(msg) {
                Ok(m) => openai_messages.push(m),
                Err(e) => {
                    error!(error = %e, "Failed to build OpenAI request message");
                    return Completion::ServiceError(e.to_string());
                }
            }
        }
        let options = sampling_options(params);

        let outcome = complete_with_timeout(self.timeout, self.max_retries, || {
            let client = self.client.clone();
            let model = self.model.clone();
            let request_messages = openai_messages.clone();
            async move {
                match client.chat_completion(&model, request_messages, &options).await {
                    Ok(text) => Completion::Text(text),
                    Err(ChatCompletionError::ContentFiltered(detail)) => {
                        warn!(detail = %detail, "Completion rejected by content filter");
                        Completion::ContentFiltered
                    }
                    Err(e) => Completion::ServiceError(e.to_string()),
                }
            }
        })
        .await;

        match &outcome {
            Completion::Text(text) => info!(reply_len = text.len(), "LLM completion succeeded"),
            Completion::ContentFiltered => info!("LLM completion content filtered"),
            Completion::ServiceError(detail) => error!(detail = %detail, "LLM completion failed"),
        }
        outcome
    }
}
