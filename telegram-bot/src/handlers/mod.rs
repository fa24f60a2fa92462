//! Handlers shared by every service: logging and basic commands.

mod basic_commands;
mod logging;

pub use basic_commands::{format_chat_info, BasicCommandsHandler};
pub use logging::LoggingHandler;
