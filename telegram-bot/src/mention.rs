//! Shared pure functions for response eligibility, @-mention detection and question extraction.
//!
//! The chat service answers every private message, and in groups only messages that @mention
//! the bot or reply to one of its messages.

use crate::core::{ChatType, Message};

/// Default prompt when the user only @mentions the bot with no text; use as `empty_mention_default` for [`get_question`].
pub const DEFAULT_EMPTY_MENTION_PROMPT: &str =
    "The user only @mentioned you with no specific question. Please greet them briefly and invite them to ask.";

/// Facts about an incoming message that decide whether the bot should answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    pub chat_type: ChatType,
    pub text: String,
    pub mentions_bot_username: bool,
    pub is_reply_to_bot: bool,
}

impl Eligibility {
    /// Derives eligibility facts from a core message. Mentions are only detected when the
    /// bot's username is known.
    pub fn from_message(message: &Message, bot_username: Option<&str>) -> Self {
        let mentions_bot_username = bot_username
            .map(|username| is_bot_mentioned(&message.content, username))
            .unwrap_or(false);
        Self {
            chat_type: message.chat.chat_type,
            text: message.content.clone(),
            mentions_bot_username,
            is_reply_to_bot: message.reply_to_message_id.is_some()
                && message.reply_to_message_from_bot,
        }
    }
}

/// Private chats are always answered; elsewhere only @mentions and replies to the bot.
#[inline]
pub fn is_eligible(e: &Eligibility) -> bool {
    e.chat_type == ChatType::Private || e.mentions_bot_username || e.is_reply_to_bot
}

/// Returns true if `text` contains a @mention of the given bot username.
#[inline]
pub fn is_bot_mentioned(text: &str, bot_username: &str) -> bool {
    !bot_username.is_empty() && text.contains(&format!("@{}", bot_username))
}

/// Strips the bot @mention from `text` and returns the trimmed string.
#[inline]
pub fn extract_question(text: &str, bot_username: &str) -> String {
    if bot_username.is_empty() {
        return text.trim().to_string();
    }
    text.replace(&format!("@{}", bot_username), "")
        .trim()
        .to_string()
}

/// Resolves the user question for an eligible message.
///
/// - The bot mention (if any) is stripped.
/// - A bare @mention yields `empty_mention_default` when given, else `None`.
/// - Empty text otherwise yields `None`.
pub fn get_question(
    message: &Message,
    bot_username: Option<&str>,
    empty_mention_default: Option<&str>,
) -> Option<String> {
    let username = bot_username.unwrap_or("");
    let mentioned = is_bot_mentioned(&message.content, username);
    let question = extract_question(&message.content, username);
    if !question.is_empty() {
        return Some(question);
    }
    if mentioned {
        return empty_mention_default.map(str::to_string);
    }
    None
}
