//! Mock [`telegram_bot::Bot`] recording replies and sends.

use async_trait::async_trait;
use std::sync::Mutex;
use telegram_bot::{
    Bot, Chat, ChatInfo, ChatTarget, DbotError, InviteLinkOptions, Message, Result,
};

/// `(chat_id, text)` of every outgoing text.
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<(i64, String)>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(_, t)| t.clone()).collect()
    }

    #[allow(dead_code)]
    pub fn texts_for(&self, chat_id: i64) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == chat_id)
            .map(|(_, t)| t.clone())
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_document(
        &self,
        _chat: &Chat,
        _file_name: &str,
        _bytes: Vec<u8>,
        _caption: Option<&str>,
        _reply_to_message_id: Option<&str>,
    ) -> Result<()> {
        Err(DbotError::Bot("documents not supported by mock".to_string()))
    }

    async fn download_file(&self, _file_id: &str) -> Result<Vec<u8>> {
        Err(DbotError::Bot("downloads not supported by mock".to_string()))
    }

    async fn create_invite_link(&self, _chat: &ChatTarget, _options: &InviteLinkOptions) -> Result<String> {
        Err(DbotError::Bot("invite links not supported by mock".to_string()))
    }

    async fn get_chat_info(&self, chat_id: i64) -> Result<ChatInfo> {
        Err(DbotError::Bot(format!("chat {} not found", chat_id)))
    }
}
