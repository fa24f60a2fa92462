//! # telegram_llm_bot
//!
//! Chat-completion service: relays eligible Telegram messages to an OpenAI-compatible endpoint
//! and replies with the generated text, keeping a bounded history per chat.
//!
//! **Public API:** [`run_bot_with_llm`], [`build_chat_handler`], [`build_llm_bot_only`] and
//! [`ChatHandler`].

mod assembly;
pub mod handlers;

pub use assembly::{build_chat_handler, build_llm_bot_only, run_bot_with_llm, SERVICE_NAME};
pub use handlers::{
    ChatHandler, MSG_CONTENT_FILTERED, MSG_HISTORY_CLEARED, MSG_REQUEST_FAILED,
};
