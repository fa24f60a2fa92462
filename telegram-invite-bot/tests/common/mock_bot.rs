#![allow(dead_code)]

//! Mock [`telegram_bot::Bot`] for the invite service: serves files by id, issues numbered
//! links (failing for names containing a configured marker or over Telegram's 32-character
//! name limit) and records everything sent.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use telegram_bot::{
    Bot, Chat, ChatInfo, ChatTarget, DbotError, InviteLinkOptions, Message, Result,
};

#[derive(Debug, Clone)]
pub struct SentDocument {
    pub chat_id: i64,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub caption: Option<String>,
    pub reply_to_message_id: Option<String>,
}

#[derive(Default)]
pub struct MockBot {
    pub files: HashMap<String, Vec<u8>>,
    /// Link creation fails when the link name contains this text.
    pub fail_marker: Option<String>,
    pub invites: Mutex<Vec<(ChatTarget, InviteLinkOptions)>>,
    pub replies: Mutex<Vec<String>>,
    pub documents: Mutex<Vec<SentDocument>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file_id: &str, bytes: &[u8]) -> Self {
        self.files.insert(file_id.to_string(), bytes.to_vec());
        self
    }

    pub fn failing_for(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn documents(&self) -> Vec<SentDocument> {
        self.documents.lock().unwrap().clone()
    }

    pub fn invites(&self) -> Vec<(ChatTarget, InviteLinkOptions)> {
        self.invites.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn reply_to(&self, _message: &Message, text: &str) -> Result<()> {
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_document(
        &self,
        chat: &Chat,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
        reply_to_message_id: Option<&str>,
    ) -> Result<()> {
        self.documents.lock().unwrap().push(SentDocument {
            chat_id: chat.id,
            file_name: file_name.to_string(),
            bytes,
            caption: caption.map(str::to_string),
            reply_to_message_id: reply_to_message_id.map(str::to_string),
        });
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        self.files
            .get(file_id)
            .cloned()
            .ok_or_else(|| DbotError::Bot(format!("file {} not found", file_id)))
    }

    async fn create_invite_link(&self, chat: &ChatTarget, options: &InviteLinkOptions) -> Result<String> {
        let name = options.name.clone().unwrap_or_default();
        if name.chars().count() > 32 {
            return Err(DbotError::Bot("Bad Request: invite link name is too long".to_string()));
        }
        if let Some(marker) = &self.fail_marker {
            if name.contains(marker.as_str()) {
                return Err(DbotError::Bot("Bad Request: not enough rights".to_string()));
            }
        }
        let mut invites = self.invites.lock().unwrap();
        invites.push((chat.clone(), options.clone()));
        Ok(format!("https://t.me/+link{}", invites.len()))
    }

    async fn get_chat_info(&self, chat_id: i64) -> Result<ChatInfo> {
        Err(DbotError::Bot(format!("chat {} not found", chat_id)))
    }
}
