//! Rolling conversation window bounded by a token budget.

use std::fmt;
use std::sync::Arc;

use prompt::{join_contents, ChatMessage};
use tracing::debug;

use super::utils::Tokenizer;

/// Default token budget for a conversation window.
pub const DEFAULT_MAX_CONTEXT_TOKENS: usize = 1000;

/// Ordered, role-tagged message history for one conversation.
///
/// Index 0 always holds the system persona and is never evicted. When the joined contents
/// exceed `max_tokens`, the oldest non-system messages are dropped one at a time.
#[derive(Clone)]
pub struct ConversationContext {
    system_prompt: String,
    max_tokens: usize,
    messages: Vec<ChatMessage>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl fmt::Debug for ConversationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationContext")
            .field("max_tokens", &self.max_tokens)
            .field("messages", &self.messages)
            .finish()
    }
}

impl ConversationContext {
    /// Creates a context holding only the system persona.
    pub fn new(
        system_prompt: impl Into<String>,
        max_tokens: usize,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        let mut ctx = Self {
            system_prompt: system_prompt.into(),
            max_tokens,
            messages: Vec::new(),
            tokenizer,
        };
        ctx.reset();
        ctx
    }

    /// Discards every turn; the history becomes exactly `[system(persona)]`.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(ChatMessage::system(self.system_prompt.clone()));
    }

    /// Appends a message of any role, then trims to the budget.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.enforce_budget();
    }

    /// Evicts the oldest non-system messages until the history fits, or only the persona
    /// is left. Returns the number of evicted messages.
    pub fn enforce_budget(&mut self) -> usize {
        let mut evicted = 0;
        let mut count = self.token_count();
        while count > self.max_tokens && self.messages.len() > 1 {
            self.messages.remove(1);
            evicted += 1;
            count = self.token_count();
        }
        if evicted > 0 {
            debug!(
                evicted,
                remaining = self.messages.len(),
                token_count = count,
                max_tokens = self.max_tokens,
                "Evicted oldest context messages"
            );
        }
        evicted
    }

    /// Read-only view of the history in order.
    pub fn snapshot(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Tokens in the space-joined contents of the whole history.
    pub fn token_count(&self) -> usize {
        self.tokenizer.count_tokens(&join_contents(&self.messages))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}
