//! Core types and traits: Handler, Bot, Message, HandlerResponse, error, logger.
//! Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot, ChatTarget, InviteLinkOptions};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ChatInfo, ChatType, Document, Handler, HandlerResponse, Message, MessageDirection,
    ToCoreMessage, ToCoreUser, User,
};
