//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::CompletionParams;

/// Default token budget of the conversation window sent with each request.
pub const DEFAULT_MAX_CONTEXT_TOKENS: usize = 1000;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn system_prompt(&self) -> Option<&str>;
    fn completion_params(&self) -> CompletionParams;
    fn max_context_tokens(&self) -> usize;
    fn timeout(&self) -> Duration;
    fn max_retries(&self) -> u32;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    pub llm_system_prompt: Option<String>,
    pub llm_params: CompletionParams,
    pub llm_max_context_tokens: usize,
    pub llm_timeout_secs: u64,
    pub llm_max_retries: u32,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn system_prompt(&self) -> Option<&str> {
        self.llm_system_prompt.as_deref()
    }
    fn completion_params(&self) -> CompletionParams {
        self.llm_params
    }
    fn max_context_tokens(&self) -> usize {
        self.llm_max_context_tokens
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
    fn max_retries(&self) -> u32 {
        self.llm_max_retries
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl EnvLlmConfig {
    /// Load from environment variables. `OPENAI_API_KEY` is required.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .context("OPENAI_API_KEY not set")?;
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let llm_model = env::var("MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let llm_system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .or_else(|_| env::var("SYSTEM_PROMPT"))
            .ok()
            .filter(|s| !s.trim().is_empty());

        let defaults = CompletionParams::default();
        let llm_params = CompletionParams {
            temperature: env_or("LLM_TEMPERATURE", defaults.temperature),
            max_tokens: env_or("LLM_MAX_TOKENS", defaults.max_tokens),
            top_p: env_or("LLM_TOP_P", defaults.top_p),
            frequency_penalty: env_or("LLM_FREQUENCY_PENALTY", defaults.frequency_penalty),
            presence_penalty: env_or("LLM_PRESENCE_PENALTY", defaults.presence_penalty),
        };

        Ok(Self {
            openai_api_key,
            openai_base_url,
            llm_model,
            llm_system_prompt,
            llm_params,
            llm_max_context_tokens: env_or("LLM_MAX_CONTEXT_TOKENS", DEFAULT_MAX_CONTEXT_TOKENS),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", 60),
            llm_max_retries: env_or("LLM_MAX_RETRIES", 1),
        })
    }
}
