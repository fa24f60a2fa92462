//! Adapters from Telegram (teloxide) types to core types.

use crate::core::{
    Chat, ChatType, Document, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
            is_bot: self.0.is_bot,
        }
    }
}

/// Maps a teloxide chat to the core chat kind.
pub(crate) fn chat_type_of(private: bool, group: bool, supergroup: bool) -> ChatType {
    if private {
        ChatType::Private
    } else if supergroup {
        ChatType::Supergroup
    } else if group {
        ChatType::Group
    } else {
        ChatType::Channel
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// When the bot's own user id is known, "reply to the bot" means a reply to that user;
/// otherwise any bot author counts.
pub struct TelegramMessageWrapper<'a> {
    pub message: &'a teloxide::types::Message,
    pub bot_user_id: Option<u64>,
}

impl<'a> TelegramMessageWrapper<'a> {
    pub fn new(message: &'a teloxide::types::Message) -> Self {
        Self {
            message,
            bot_user_id: None,
        }
    }

    pub fn with_bot_user_id(mut self, bot_user_id: Option<u64>) -> Self {
        self.bot_user_id = bot_user_id;
        self
    }

    fn chat(&self) -> Chat {
        let chat = &self.message.chat;
        Chat {
            id: chat.id.0,
            chat_type: chat_type_of(chat.is_private(), chat.is_group(), chat.is_supergroup()),
            title: chat.title().map(str::to_string),
            username: chat.username().map(str::to_string),
        }
    }

    /// Returns the id of the replied-to message if present.
    fn get_reply_to_message_id(&self) -> Option<String> {
        self.message.reply_to_message().map(|msg| msg.id.to_string())
    }

    /// Returns true if the replied-to message was sent by this bot.
    fn get_reply_to_message_from_bot(&self) -> bool {
        self.message
            .reply_to_message()
            .and_then(|m| m.from.as_ref())
            .map(|u| u.is_bot && self.bot_user_id.map_or(true, |id| u.id.0 == id))
            .unwrap_or(false)
    }

    /// Returns the text (or caption) of the replied-to message if present.
    fn get_reply_to_message_content(&self) -> Option<String> {
        self.message
            .reply_to_message()
            .and_then(|m| m.text().or_else(|| m.caption()))
            .map(|s| s.to_string())
    }

    fn get_document(&self) -> Option<Document> {
        self.message.document().map(|doc| Document {
            file_id: doc.file.id.0.clone(),
            file_name: doc.file_name.clone(),
        })
    }

    fn message_type(&self) -> &'static str {
        if self.message.document().is_some() {
            "document"
        } else if self.message.new_chat_members().is_some() {
            "new_chat_members"
        } else if self.message.text().is_some() {
            "text"
        } else {
            "other"
        }
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.message;
        let caption = msg.caption().map(str::to_string);
        let content = msg
            .text()
            .map(str::to_string)
            .or_else(|| caption.clone())
            .unwrap_or_default();
        Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::anonymous),
            chat: self.chat(),
            content,
            message_type: self.message_type().to_string(),
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
            reply_to_message_id: self.get_reply_to_message_id(),
            reply_to_message_from_bot: self.get_reply_to_message_from_bot(),
            reply_to_message_content: self.get_reply_to_message_content(),
            caption,
            document: self.get_document(),
            new_chat_members: msg
                .new_chat_members()
                .map(|members| {
                    members
                        .iter()
                        .map(|u| TelegramUserWrapper(u).to_core())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
