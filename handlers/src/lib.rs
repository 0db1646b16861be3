//! # Handlers for the moderation bot
//!
//! Command and duration parsing, the profanity filter, and the chain handlers built on them:
//! start, rules, owner-only mute/ban, and profanity deletion.

pub mod command;
pub mod duration;
pub mod html;
mod moderation;
pub mod normalizer;
pub mod profanity;
mod profanity_handler;
mod rules;
mod start;

#[cfg(test)]
mod test;

use std::sync::Arc;
use tokio::sync::RwLock;

/// Bot username learned from `get_me` at startup; `None` until known.
pub type BotUsername = Arc<RwLock<Option<String>>>;

pub use moderation::{ModerationAction, ModerationHandler};
pub use normalizer::{DictionaryNormalizer, LowercaseNormalizer, Normalizer};
pub use profanity::{ProfanityFilter, ProfanityMatch, DEFAULT_ROOTS};
pub use profanity_handler::ProfanityHandler;
pub use rules::{RulesHandler, DEFAULT_RULES_URL};
pub use start::StartHandler;
