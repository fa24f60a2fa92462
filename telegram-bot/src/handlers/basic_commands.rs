//! `/start`, `/help`, `/chatinfo` and the added-to-chat notice.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::command::parse_command;
use crate::config::Greetings;
use crate::core::{Bot, ChatInfo, Handler, HandlerResponse, Message, Result};

/// Renders chat details for `/chatinfo`.
pub fn format_chat_info(info: &ChatInfo) -> String {
    let mut text = format!(
        "Chat Information:\nChat ID: {}\nChat Type: {}",
        info.id, info.chat_type
    );
    if let Some(title) = &info.title {
        text.push_str(&format!("\nChat Title: {}", title));
    }
    if let Some(username) = &info.username {
        text.push_str(&format!("\nChat Username: @{}", username));
    }
    if let Some(description) = &info.description {
        text.push_str(&format!("\nDescription: {}", description));
    }
    text
}

/// Answers the commands every service supports. Unknown commands and ordinary messages
/// continue down the chain.
pub struct BasicCommandsHandler {
    bot: Arc<dyn Bot>,
    greetings: Greetings,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl BasicCommandsHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        greetings: Greetings,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            bot,
            greetings,
            bot_username,
        }
    }

    async fn chat_info(&self, message: &Message) -> ChatInfo {
        match self.bot.get_chat_info(message.chat.id).await {
            Ok(info) => info,
            Err(e) => {
                warn!(error = %e, chat_id = message.chat.id, "get_chat_info failed, using message chat");
                ChatInfo::from(&message.chat)
            }
        }
    }

    fn bot_was_added(&self, message: &Message, username: Option<&str>) -> bool {
        message.new_chat_members.iter().any(|member| {
            member.is_bot
                && match (username, member.username.as_deref()) {
                    (Some(ours), Some(theirs)) => ours.eq_ignore_ascii_case(theirs),
                    _ => false,
                }
        })
    }
}

#[async_trait]
impl Handler for BasicCommandsHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();

        if self.bot_was_added(message, username.as_deref()) {
            info!(chat_id = message.chat.id, "Bot added to chat");
            let text = self.greetings.added_to_chat.clone();
            self.bot.send_message(&message.chat, &text).await?;
            return Ok(HandlerResponse::Reply(text));
        }

        let Some(command) = parse_command(&message.content, username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };

        let text = match command.name.as_str() {
            "start" | "help" => self.greetings.welcome.clone(),
            "chatinfo" => format_chat_info(&self.chat_info(message).await),
            _ => return Ok(HandlerResponse::Continue),
        };
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
