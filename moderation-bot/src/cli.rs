//! CLI parser, config loading and the offline profanity check.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::components::build_profanity_filter;
use crate::config::{BotConfig, ProfanityConfig};

#[derive(Parser)]
#[command(name = "modbot")]
#[command(about = "Telegram group moderation bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Use long polling even when WEBHOOK_URL is set.
        #[arg(long)]
        polling: bool,
    },
    /// Run the profanity filter on TEXT without contacting Telegram.
    Check {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Checks `text` with the filter configured from env and describes the result.
pub fn check_text(text: &str) -> Result<String> {
    let filter = build_profanity_filter(&ProfanityConfig::from_env())?;
    Ok(match filter.find_match(text) {
        Some(found) => format!(
            "match: token={} normal_form={} root={}",
            found.token, found.normal_form, found.root
        ),
        None => "clean".to_string(),
    })
}
