//! Chat handler: answers eligible messages with an LLM completion over the chat's history.
//!
//! A turn works on a draft copy of the chat's context. The draft only replaces the stored
//! context when the completion produced text, so rejected or failed turns leave no trace.

use std::sync::Arc;

use async_trait::async_trait;
use llm_client::{Completion, CompletionParams, LlmClient};
use prompt::ChatMessage;
use telegram_bot::mention::{get_question, is_eligible, Eligibility, DEFAULT_EMPTY_MENTION_PROMPT};
use telegram_bot::{
    parse_command, Bot as CoreBot, ConversationStore, Handler, HandlerResponse, Message, Result,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

/// Reply to `/reset`.
pub const MSG_HISTORY_CLEARED: &str = "Conversation history cleared.";
/// Reply when the completion service failed.
pub const MSG_REQUEST_FAILED: &str =
    "Sorry, something went wrong processing your request. Please try again later.";
/// Reply when the provider's moderation rejected the request.
pub const MSG_CONTENT_FILTERED: &str =
    "Sorry, I can't respond to that because it was flagged by the content filter. Please rephrase your message.";

/// Relays eligible messages to the LLM and replies with the result.
#[derive(Clone)]
pub struct ChatHandler {
    bot_username: Arc<RwLock<Option<String>>>,
    llm_client: Arc<dyn LlmClient>,
    bot: Arc<dyn CoreBot>,
    store: Arc<ConversationStore>,
    params: CompletionParams,
}

impl ChatHandler {
    pub fn new(
        bot_username: Arc<RwLock<Option<String>>>,
        llm_client: Arc<dyn LlmClient>,
        bot: Arc<dyn CoreBot>,
        store: Arc<ConversationStore>,
        params: CompletionParams,
    ) -> Self {
        Self {
            bot_username,
            llm_client,
            bot,
            store,
            params,
        }
    }

    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    pub fn params(&self) -> &CompletionParams {
        &self.params
    }

    async fn reset(&self, message: &Message) -> Result<HandlerResponse> {
        self.store.reset(message.chat.id).await;
        self.bot.reply_to(message, MSG_HISTORY_CLEARED).await?;
        Ok(HandlerResponse::Reply(MSG_HISTORY_CLEARED.to_string()))
    }

    /// Runs one request/response turn for `question`. The chat's context stays locked for the
    /// whole turn so turns within one chat are serialized.
    async fn converse(&self, message: &Message, question: String) -> Result<HandlerResponse> {
        let chat_id = message.chat.id;
        let context = self.store.context(chat_id).await;
        let mut committed = context.lock().await;
        let mut draft = committed.clone();

        if message.reply_to_message_from_bot {
            if let Some(replied) = message.reply_to_message_content.as_deref() {
                let already_last = draft
                    .snapshot()
                    .last()
                    .map(|m| m.content == replied)
                    .unwrap_or(false);
                if !already_last {
                    draft.append(ChatMessage::assistant(replied));
                    debug!(replied_len = replied.len(), "Added replied-to bot message as context");
                }
            }
        }
        draft.append(ChatMessage::user(question));

        info!(
            chat_id,
            messages = draft.len(),
            token_count = draft.token_count(),
            "Requesting completion"
        );
        let outcome = self
            .llm_client
            .complete(draft.snapshot().to_vec(), &self.params)
            .await;

        let reply = match outcome {
            Completion::Text(text) => {
                draft.append(ChatMessage::assistant(text.clone()));
                *committed = draft;
                info!(chat_id, history_len = committed.len(), "Turn committed");
                text
            }
            Completion::ContentFiltered => {
                warn!(chat_id, "Completion content filtered; history unchanged");
                MSG_CONTENT_FILTERED.to_string()
            }
            Completion::ServiceError(detail) => {
                error!(chat_id, detail = %detail, "Completion failed; history unchanged");
                MSG_REQUEST_FAILED.to_string()
            }
        };
        drop(committed);

        self.bot.reply_to(message, &reply).await.map_err(|e| {
            error!(error = %e, chat_id, "Failed to send reply");
            e
        })?;
        Ok(HandlerResponse::Reply(reply))
    }
}

#[async_trait]
impl Handler for ChatHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();

        if let Some(command) = parse_command(&message.content, username.as_deref()) {
            if command.name == "reset" {
                return self.reset(message).await;
            }
        }

        if message.text().is_none() {
            return Ok(HandlerResponse::Continue);
        }

        if !is_eligible(&Eligibility::from_message(message, username.as_deref())) {
            debug!("Message not addressed to the bot; skipping");
            return Ok(HandlerResponse::Continue);
        }

        let Some(question) = get_question(
            message,
            username.as_deref(),
            Some(DEFAULT_EMPTY_MENTION_PROMPT),
        ) else {
            return Ok(HandlerResponse::Continue);
        };

        self.converse(message, question).await
    }
}
