//! Bot abstraction for the messaging transport.
//!
//! [`Bot`] is transport-agnostic; `crate::telegram::TelegramBotAdapter` implements it via teloxide.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::{DbotError, Result};
use super::types::{Chat, ChatInfo, Message};

/// Options for a generated chat invite link. `None` fields mean "no limit".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteLinkOptions {
    pub name: Option<String>,
    pub expire_at: Option<DateTime<Utc>>,
    pub member_limit: Option<u32>,
}

/// Chat addressed by numeric id or by public `@username` (channels and public supergroups).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTarget {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatTarget {
    fn from(id: i64) -> Self {
        ChatTarget::Id(id)
    }
}

impl FromStr for ChatTarget {
    type Err = DbotError;

    /// Accepts a signed integer id or `@name` (letters, digits, underscores).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Ok(ChatTarget::Id(id));
        }
        match s.strip_prefix('@') {
            Some(name)
                if !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
            {
                Ok(ChatTarget::Username(s.to_string()))
            }
            _ => Err(DbotError::Config(format!(
                "expected a numeric chat id or @username, got {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatTarget::Id(id) => write!(f, "{}", id),
            ChatTarget::Username(name) => f.write_str(name),
        }
    }
}

/// Abstraction for the messaging transport. Implementations map to a concrete API (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat, quoting it when the transport allows).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;

    /// Sends `bytes` as a named document with an optional caption, optionally replying to a message id.
    async fn send_document(
        &self,
        chat: &Chat,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
        reply_to_message_id: Option<&str>,
    ) -> Result<()>;

    /// Downloads the file identified by `file_id` and returns its bytes.
    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>>;

    /// Creates an invite link for `chat` and returns its URL.
    async fn create_invite_link(&self, chat: &ChatTarget, options: &InviteLinkOptions) -> Result<String>;

    /// Looks up chat details.
    async fn get_chat_info(&self, chat_id: i64) -> Result<ChatInfo>;
}

/// Parses a transport message id string into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }

    #[test]
    fn chat_target_parses_id_and_username() {
        assert_eq!(" -1001234 ".parse::<ChatTarget>().unwrap(), ChatTarget::Id(-1001234));
        assert_eq!(
            "@my_channel".parse::<ChatTarget>().unwrap(),
            ChatTarget::Username("@my_channel".to_string())
        );
        assert_eq!(ChatTarget::Username("@my_channel".to_string()).to_string(), "@my_channel");
    }

    #[test]
    fn chat_target_rejects_other_text() {
        for raw in ["", "@", "mygroup", "@bad name", "12abc"] {
            let err = raw.parse::<ChatTarget>().unwrap_err();
            assert!(matches!(err, DbotError::Config(_)), "{:?}", raw);
        }
    }

    #[test]
    fn invite_options_default_has_no_limits() {
        let opts = InviteLinkOptions::default();
        assert!(opts.name.is_none() && opts.expire_at.is_none() && opts.member_limit.is_none());
    }
}
