//! Core types: user, chat, message, handler response, and Handler trait.
//!
//! Types are split into one file per main type.

mod chat;
mod handler;
mod message;
mod response;
mod user;

pub use chat::{Chat, ChatInfo, ChatType};
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Document, Message, MessageDirection};
pub use response::HandlerResponse;
pub use user::User;
