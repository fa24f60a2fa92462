//! # Telegram bot framework
//!
//! Shared foundation for the service binaries: core types (`Message`, `Bot`, `Handler`),
//! the handler chain, env config, CLI, command parsing, eligibility rules, the shared
//! handlers, in-memory conversation context, and the teloxide transport.

pub mod chain;
pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod memory;
pub mod mention;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, parse_message_id, Bot, Chat, ChatInfo, ChatTarget, ChatType, DbotError, Document,
    Handler, HandlerResponse, InviteLinkOptions, Message, MessageDirection, Result, ToCoreMessage,
    ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use command::{contains_command, is_command, parse_command, Command};
pub use mention::{
    extract_question, get_question, is_bot_mentioned, is_eligible, Eligibility,
    DEFAULT_EMPTY_MENTION_PROMPT,
};

pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};

pub use config::{BaseConfig, BotConfig, Greetings};
pub use runner::{build_bot_only, run_bot};

pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use handlers::{format_chat_info, BasicCommandsHandler, LoggingHandler};
pub use memory::{
    ConversationContext, ConversationStore, EstimateTokenizer, Tokenizer, WhitespaceTokenizer,
    DEFAULT_MAX_CONTEXT_TOKENS,
};
