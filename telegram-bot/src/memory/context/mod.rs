//! # Conversation context
//!
//! [`ConversationContext`] keeps the bounded message window sent to the model;
//! [`Tokenizer`] measures it.

mod utils;
mod window;

pub use utils::{estimate_tokens, EstimateTokenizer, Tokenizer, WhitespaceTokenizer};
pub use window::{ConversationContext, DEFAULT_MAX_CONTEXT_TOKENS};
