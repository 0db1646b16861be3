//! Error types for the bot core.
//!
//! Platform rejections of moderation calls are not errors, see [`crate::ActionOutcome`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModbotError {
    /// Transport failure talking to the chat platform.
    #[error("Bot error: {0}")]
    Bot(String),

    /// A message or user id that the platform cannot represent.
    #[error("Invalid id: {0}")]
    InvalidId(String),
}

/// Result type for core operations; uses [`ModbotError`].
pub type Result<T> = std::result::Result<T, ModbotError>;
