//! # Memory module
//!
//! In-process conversation memory: the bounded [`ConversationContext`] window and the
//! per-chat [`ConversationStore`]. Nothing is persisted; history lives as long as the process.

pub mod context;
pub mod store;

pub use context::{
    estimate_tokens, ConversationContext, EstimateTokenizer, Tokenizer, WhitespaceTokenizer,
    DEFAULT_MAX_CONTEXT_TOKENS,
};
pub use store::ConversationStore;
