//! # Prompt
//!
//! Role-tagged chat messages shared by the conversation window and the LLM client.
//!
//! ## Format
//!
//! - [`ChatMessage`] maps one-to-one onto an element of the OpenAI `messages` array.
//! - [`join_contents`] is the serialized form a tokenizer counts when enforcing a budget.

use std::fmt;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    /// Lowercase API name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_system(&self) -> bool {
        self.role == MessageRole::System
    }
}

/// Default system instruction when no persona is configured.
/// Plain text only, since replies are sent to Telegram without a parse mode.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant chatting on Telegram. \
Reply in plain text without Markdown or other formatting symbols (such as *, _, `, #).";

/// Joins message contents with single spaces, in order.
///
/// This is the text a tokenizer counts when checking a conversation against its token budget.
pub fn join_contents(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
