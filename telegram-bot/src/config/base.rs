//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::Result;
use std::env;

use crate::core::DbotError;

/// Reads the first of `names` that is set and non-empty.
pub(crate) fn env_first(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|v| !v.trim().is_empty())
}

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN or TELEGRAM_BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE; defaults to `logs/<service>.log`
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// `service` names the default log file.
    pub fn load(token: Option<String>, service: &str) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| env_first(&["BOT_TOKEN", "TELEGRAM_BOT_TOKEN"]))
            .ok_or_else(|| DbotError::ConfigMissing("BOT_TOKEN".to_string()))?;
        let telegram_api_url = env_first(&["TELEGRAM_API_URL", "TELOXIDE_API_URL"]);
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| format!("logs/{}.log", service));

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
