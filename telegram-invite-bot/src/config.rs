//! Invite target and link limits, loaded from env.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use telegram_bot::{ChatTarget, DbotError};

pub const DEFAULT_EXPIRE_DAYS: i64 = 30;
pub const DEFAULT_MEMBER_LIMIT: u32 = 1;

/// INVITE_CHAT_ID (required), INVITE_EXPIRE_DAYS, INVITE_MEMBER_LIMIT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteConfig {
    /// Group the links invite into: numeric id or public `@username`.
    pub chat: ChatTarget,
    /// Lifetime of batch links.
    pub expire_days: i64,
    /// Joins allowed per batch link.
    pub member_limit: u32,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl InviteConfig {
    pub fn new(chat: impl Into<ChatTarget>) -> Self {
        Self {
            chat: chat.into(),
            expire_days: DEFAULT_EXPIRE_DAYS,
            member_limit: DEFAULT_MEMBER_LIMIT,
        }
    }

    pub fn from_env() -> Result<Self> {
        let raw = env::var("INVITE_CHAT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| DbotError::ConfigMissing("INVITE_CHAT_ID".to_string()))?;
        let chat = raw
            .parse::<ChatTarget>()
            .context("INVITE_CHAT_ID must be a chat id or @username")?;

        let expire_days = env_or("INVITE_EXPIRE_DAYS", DEFAULT_EXPIRE_DAYS).clamp(1, 3650);
        let member_limit = env_or("INVITE_MEMBER_LIMIT", DEFAULT_MEMBER_LIMIT).clamp(1, 99_999);

        Ok(Self {
            chat,
            expire_days,
            member_limit,
        })
    }

    /// Caption sent with the CSV report.
    pub fn report_caption(&self) -> String {
        let uses = if self.member_limit == 1 {
            "once".to_string()
        } else {
            format!("{} times", self.member_limit)
        };
        format!(
            "Here are your invite links. Each link expires in {} days and can be used {}.",
            self.expire_days, uses
        )
    }
}
