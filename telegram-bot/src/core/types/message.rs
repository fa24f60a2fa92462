//! Message and direction types for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Direction of the message (from user or from bot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// File attached to a message; `file_id` is the transport's handle used for downloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub file_id: String,
    pub file_name: Option<String>,
}

/// A single message with user, chat, content, and optional reply context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text of the message, or the caption for media messages.
    pub content: String,
    pub message_type: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
    pub reply_to_message_id: Option<String>,
    /// Whether the replied-to message was sent by the bot; only meaningful when `reply_to_message_id` is set.
    pub reply_to_message_from_bot: bool,
    /// Content of the replied-to message; passed to the model so it knows what the user is replying to.
    pub reply_to_message_content: Option<String>,
    pub caption: Option<String>,
    pub document: Option<Document>,
    /// Users that just joined the chat (service message); empty for ordinary messages.
    pub new_chat_members: Vec<User>,
}

impl Message {
    /// Incoming text message with no reply context, attachment, or membership change.
    pub fn new_incoming(id: impl Into<String>, user: User, chat: Chat, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            content: content.into(),
            message_type: "text".to_string(),
            direction: MessageDirection::Incoming,
            created_at: Utc::now(),
            reply_to_message_id: None,
            reply_to_message_from_bot: false,
            reply_to_message_content: None,
            caption: None,
            document: None,
            new_chat_members: Vec::new(),
        }
    }

    /// Text content, or `None` when it is blank.
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.content.trim();
        (!trimmed.is_empty()).then_some(self.content.as_str())
    }
}
