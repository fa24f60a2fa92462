//! BotConfig: BaseConfig + Greetings. Use load() for env-based loading.

use anyhow::Result;
use std::env;

use super::BaseConfig;

pub const DEFAULT_WELCOME_MESSAGE: &str = "Hi! I'm working!";
pub const DEFAULT_ADDED_TO_CHAT_MESSAGE: &str =
    "Bot added to new chat!\nUse /chatinfo to see details about this chat";

/// Fixed texts sent by the basic command handler.
#[derive(Debug, Clone)]
pub struct Greetings {
    /// Reply to /start and /help (WELCOME_MESSAGE).
    pub welcome: String,
    /// Sent when the bot is added to a chat.
    pub added_to_chat: String,
}

impl Default for Greetings {
    fn default() -> Self {
        Self {
            welcome: DEFAULT_WELCOME_MESSAGE.to_string(),
            added_to_chat: DEFAULT_ADDED_TO_CHAT_MESSAGE.to_string(),
        }
    }
}

impl Greetings {
    pub fn from_env() -> Self {
        let mut greetings = Self::default();
        if let Ok(welcome) = env::var("WELCOME_MESSAGE") {
            if !welcome.trim().is_empty() {
                greetings.welcome = welcome;
            }
        }
        greetings
    }
}

/// Bot config: BaseConfig + greetings. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub greetings: Greetings,
}

impl BotConfig {
    /// Load config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>, service: &str) -> Result<Self> {
        let base = BaseConfig::load(token, service)?;
        Ok(Self {
            base,
            greetings: Greetings::from_env(),
        })
    }

    /// Replaces the added-to-chat notice (services announce themselves differently).
    pub fn with_added_to_chat_message(mut self, text: impl Into<String>) -> Self {
        self.greetings.added_to_chat = text.into();
        self
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn greetings(&self) -> &Greetings {
        &self.greetings
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
