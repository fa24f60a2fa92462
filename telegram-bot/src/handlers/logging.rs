//! Logs each message in before() and the response kind in after(); always continues.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

const PREVIEW_CHARS: usize = 100;

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let preview: String = message.content.chars().take(PREVIEW_CHARS).collect();
        info!(
            chat_type = %message.chat.chat_type,
            chat_id = message.chat.id,
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %preview,
            has_document = message.document.is_some(),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = response.kind(),
            "Processed message"
        );
        Ok(())
    }
}
