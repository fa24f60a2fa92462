//! Handlers for the chat service.

mod chat;

pub use chat::{ChatHandler, MSG_CONTENT_FILTERED, MSG_HISTORY_CLEARED, MSG_REQUEST_FAILED};
