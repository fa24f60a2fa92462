//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::net::Download;
use teloxide::payloads::setters::*;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile, MessageId, Recipient, ReplyParameters};
use tracing::{debug, instrument};

use super::adapters::chat_type_of;
use crate::core::{
    parse_message_id, Bot as CoreBot, Chat, ChatInfo, ChatTarget, DbotError, InviteLinkOptions,
    Message, Result,
};

fn transport_err(e: impl std::fmt::Display) -> DbotError {
    DbotError::Bot(e.to_string())
}

fn recipient(target: &ChatTarget) -> Recipient {
    match target {
        ChatTarget::Id(id) => Recipient::Id(ChatId(*id)),
        ChatTarget::Username(name) => Recipient::ChannelUsername(name.clone()),
    }
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(transport_err)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(message.chat.id), text.to_string());
        if let Ok(id) = parse_message_id(&message.id) {
            request = request.reply_parameters(ReplyParameters::new(MessageId(id)));
        }
        request.await.map_err(transport_err)?;
        Ok(())
    }

    #[instrument(skip(self, chat, bytes, caption))]
    async fn send_document(
        &self,
        chat: &Chat,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
        reply_to_message_id: Option<&str>,
    ) -> Result<()> {
        let size = bytes.len();
        let file = InputFile::memory(bytes).file_name(file_name.to_string());
        let mut request = self.bot.send_document(ChatId(chat.id), file);
        if let Some(caption) = caption {
            request = request.caption(caption.to_string());
        }
        if let Some(id) = reply_to_message_id {
            request = request.reply_parameters(ReplyParameters::new(MessageId(parse_message_id(id)?)));
        }
        request.await.map_err(transport_err)?;
        debug!(chat_id = chat.id, size, "Document sent");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(transport_err)?;
        let mut buf = Vec::new();
        self.bot
            .download_file(&file.path, &mut buf)
            .await
            .map_err(transport_err)?;
        debug!(size = buf.len(), "File downloaded");
        Ok(buf)
    }

    #[instrument(skip(self, chat, options), fields(chat = %chat))]
    async fn create_invite_link(&self, chat: &ChatTarget, options: &InviteLinkOptions) -> Result<String> {
        let mut request = self
            .bot
            .create_chat_invite_link(recipient(chat))
            .creates_join_request(false);
        if let Some(name) = &options.name {
            request = request.name(name.clone());
        }
        if let Some(expire_at) = options.expire_at {
            request = request.expire_date(expire_at);
        }
        if let Some(limit) = options.member_limit {
            request = request.member_limit(limit);
        }
        let link = request.await.map_err(transport_err)?;
        Ok(link.invite_link)
    }

    async fn get_chat_info(&self, chat_id: i64) -> Result<ChatInfo> {
        let chat = self.bot.get_chat(ChatId(chat_id)).await.map_err(transport_err)?;
        Ok(ChatInfo {
            id: chat_id,
            chat_type: chat_type_of(chat.is_private(), chat.is_group(), chat.is_supergroup()),
            title: chat.title().map(str::to_string),
            username: chat.username().map(str::to_string),
            description: chat.description().map(str::to_string),
        })
    }
}
