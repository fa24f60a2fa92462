//! Mock implementation of [`telegram_bot::Bot`] for integration tests.
//!
//! Records every outgoing call so tests can assert on reply texts without hitting Telegram.

use async_trait::async_trait;
use std::sync::Mutex;
use telegram_bot::{
    Bot, Chat, ChatInfo, ChatTarget, DbotError, InviteLinkOptions, Message, Result,
};

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Sent {
    Message { chat_id: i64, text: String },
    Reply { chat_id: i64, message_id: String, text: String },
}

/// Mock Bot that records sends; `get_chat_info` returns `chat_info` or a transport error when unset.
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<Sent>>,
    pub chat_info: Option<ChatInfo>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chat_info(info: ChatInfo) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            chat_info: Some(info),
        }
    }

    /// Texts of every send and reply, in order.
    pub fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|s| match s {
                Sent::Message { text, .. } | Sent::Reply { text, .. } => text.clone(),
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Message {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Reply {
            chat_id: message.chat.id,
            message_id: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_document(
        &self,
        _chat: &Chat,
        _file_name: &str,
        _bytes: Vec<u8>,
        _caption: Option<&str>,
        _reply_to_message_id: Option<&str>,
    ) -> Result<()> {
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        Err(DbotError::Bot(format!("no file {}", file_id)))
    }

    async fn create_invite_link(&self, _chat: &ChatTarget, _options: &InviteLinkOptions) -> Result<String> {
        Ok("https://t.me/+mock".to_string())
    }

    async fn get_chat_info(&self, _chat_id: i64) -> Result<ChatInfo> {
        self.chat_info
            .clone()
            .ok_or_else(|| DbotError::Bot("chat not found".to_string()))
    }
}
