//! # Moderation bot application
//!
//! Wires the throttle, the moderation handlers and the Telegram runner. Loads config from env and
//! dispatches updates from a webhook or long polling.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{check_text, load_config, Cli, Commands};
pub use components::{
    build_bot_components, build_handler_chain, build_profanity_filter, BotComponents,
};
pub use config::{BaseConfig, BotConfig, ModerationConfig, ProfanityConfig};
pub use runner::{build_only, run_bot};
