//! Bot configuration: BaseConfig (Telegram connection + log) + ModerationConfig (owner, throttle,
//! profanity, rules).

mod base;
mod bot_config;
mod moderation;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use moderation::{ModerationConfig, ProfanityConfig};
