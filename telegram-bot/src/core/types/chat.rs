//! Chat identity types for core messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of conversation a message arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Private => "private",
            ChatType::Group => "group",
            ChatType::Supergroup => "supergroup",
            ChatType::Channel => "channel",
        }
    }

    /// Group or supergroup.
    pub fn is_group(&self) -> bool {
        matches!(self, ChatType::Group | ChatType::Supergroup)
    }
}

impl fmt::Display for ChatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: ChatType,
    pub title: Option<String>,
    pub username: Option<String>,
}

impl Chat {
    pub fn private(id: i64) -> Self {
        Self {
            id,
            chat_type: ChatType::Private,
            title: None,
            username: None,
        }
    }

    pub fn group(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            chat_type: ChatType::Group,
            title: Some(title.into()),
            username: None,
        }
    }
}

/// Details of a chat as reported by the transport (used by `/chatinfo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatInfo {
    pub id: i64,
    pub chat_type: ChatType,
    pub title: Option<String>,
    pub username: Option<String>,
    pub description: Option<String>,
}

impl From<&Chat> for ChatInfo {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id,
            chat_type: chat.chat_type,
            title: chat.title.clone(),
            username: chat.username.clone(),
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_type_displays_lowercase() {
        assert_eq!(ChatType::Supergroup.to_string(), "supergroup");
        assert_eq!(ChatType::Private.to_string(), "private");
        assert!(ChatType::Group.is_group());
        assert!(!ChatType::Channel.is_group());
    }
}
