//! Per-conversation context registry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use super::context::{ConversationContext, Tokenizer};

/// Maps a conversation (chat) id to its context, created lazily with the shared persona,
/// budget and tokenizer. Each context sits behind its own mutex so one conversation's turns
/// are serialized while different conversations proceed concurrently.
pub struct ConversationStore {
    system_prompt: String,
    max_tokens: usize,
    tokenizer: Arc<dyn Tokenizer>,
    /// Entries live for the whole process and are never evicted; memory per chat is bounded by
    /// `max_tokens`, and `reset` only clears a context.
    contexts: RwLock<HashMap<i64, Arc<Mutex<ConversationContext>>>>,
}

impl ConversationStore {
    pub fn new(
        system_prompt: impl Into<String>,
        max_tokens: usize,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            max_tokens,
            tokenizer,
            contexts: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the context for `conversation_id`, creating it on first use.
    pub async fn context(&self, conversation_id: i64) -> Arc<Mutex<ConversationContext>> {
        if let Some(ctx) = self.contexts.read().await.get(&conversation_id) {
            return Arc::clone(ctx);
        }
        let mut contexts = self.contexts.write().await;
        let ctx = contexts.entry(conversation_id).or_insert_with(|| {
            debug!(conversation_id, "Creating conversation context");
            Arc::new(Mutex::new(ConversationContext::new(
                self.system_prompt.clone(),
                self.max_tokens,
                Arc::clone(&self.tokenizer),
            )))
        });
        Arc::clone(ctx)
    }

    /// Resets the conversation to just the persona (creating it if absent).
    pub async fn reset(&self, conversation_id: i64) {
        let ctx = self.context(conversation_id).await;
        ctx.lock().await.reset();
        info!(conversation_id, "Conversation context reset");
    }

    pub async fn contains(&self, conversation_id: i64) -> bool {
        self.contexts.read().await.contains_key(&conversation_id)
    }

    /// Number of conversations seen so far.
    pub async fn len(&self) -> usize {
        self.contexts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contexts.read().await.is_empty()
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }
}
