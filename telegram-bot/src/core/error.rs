//! Error types for the bot core.

use thiserror::Error;

/// Top-level error (bot transport, config, file processing).
#[derive(Error, Debug)]
pub enum DbotError {
    /// A required configuration value is absent; fatal at startup.
    #[error("Missing configuration: {0} not set")]
    ConfigMissing(String),

    /// A configuration value is present but malformed.
    #[error("Config error: {0}")]
    Config(String),

    /// Messaging transport failure (send, download, invite link, chat lookup).
    #[error("Bot error: {0}")]
    Bot(String),

    /// An uploaded file could not be read or turned into a report.
    #[error("File processing error: {0}")]
    FileProcessing(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
