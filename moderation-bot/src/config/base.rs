//! Base config: Telegram connection and logging. Loaded from env.

use anyhow::Result;
use modbot_telegram::TelegramConfig;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/modbot.log";

#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN, TELEGRAM_API_URL, WEBHOOK_URL, WEBHOOK_PATH, WEBHOOK_LISTEN_ADDR
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self { telegram, log_file })
    }

    /// The API URL must parse; webhook URL and listen address must parse when a webhook is set.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        self.telegram.update_mode(false)?;
        Ok(())
    }
}
