//! # modbot-telegram
//!
//! Telegram layer: adapters to core types, [`modbot_core::Bot`] implementation over teloxide,
//! connection config and the update runner (webhook or long polling) feeding the handler chain.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramChatWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{run_dispatch, UpdateMode};
