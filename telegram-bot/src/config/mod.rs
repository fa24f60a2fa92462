//! Bot configuration: BaseConfig (Telegram connection + log file) and Greetings (fixed reply texts).
//! Service-specific settings (LLM, invite target) live in their own crates.

mod base;
mod bot_config;


pub use base::BaseConfig;
pub use bot_config::{
    BotConfig, Greetings, DEFAULT_ADDED_TO_CHAT_MESSAGE, DEFAULT_WELCOME_MESSAGE,
};
