//! # modbot-core
//!
//! Core types and traits for the moderation bot: [`Bot`], [`Handler`], message, chat and user types,
//! and tracing initialization. Transport-agnostic; used by modbot-telegram, handler-chain and handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, ActionOutcome, Bot};
pub use error::{ModbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ChatKind, Handler, HandlerResponse, Message, ReplyContext, ToCoreMessage, ToCoreUser,
    User,
};
