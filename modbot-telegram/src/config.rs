//! Connection settings for the Telegram layer: token, API URL and webhook endpoint.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), WEBHOOK_URL, WEBHOOK_PATH and
//! WEBHOOK_LISTEN_ADDR.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::runner::UpdateMode;

pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    /// Public base URL; webhook mode when set, long polling otherwise.
    pub webhook_url: Option<String>,
    pub webhook_path: String,
    pub listen_addr: String,
}

impl TelegramConfig {
    /// BOT_TOKEN is required, the rest is optional.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Like [`Self::from_env`]; `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let mut config = Self::with_token(bot_token);
        config.telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        config.webhook_url = env::var("WEBHOOK_URL").ok().filter(|url| !url.is_empty());
        if let Ok(path) = env::var("WEBHOOK_PATH") {
            config.webhook_path = path;
        }
        if let Ok(addr) = env::var("WEBHOOK_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        Ok(config)
    }

    /// Uses the given token; polling mode, default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            webhook_url: None,
            webhook_path: DEFAULT_WEBHOOK_PATH.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }

    /// Full webhook URL: base URL joined with the path.
    pub fn full_webhook_url(&self) -> Option<String> {
        self.webhook_url.as_ref().map(|base| {
            let path = self.webhook_path.trim_start_matches('/');
            if path.is_empty() {
                base.clone()
            } else {
                format!("{}/{}", base.trim_end_matches('/'), path)
            }
        })
    }

    /// Update source implied by the config. `force_polling` ignores any webhook URL.
    pub fn update_mode(&self, force_polling: bool) -> Result<UpdateMode> {
        let url = match self.full_webhook_url() {
            Some(url) if !force_polling => url,
            _ => return Ok(UpdateMode::Polling),
        };
        let url = reqwest::Url::parse(&url).with_context(|| format!("invalid webhook URL {}", url))?;
        let listen_addr: SocketAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address {}", self.listen_addr))?;
        Ok(UpdateMode::Webhook { url, listen_addr })
    }

    /// Builds the teloxide bot, honouring the API URL override.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("invalid Telegram API URL {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(matches!(config.update_mode(false).unwrap(), UpdateMode::Polling));
    }

    #[test]
    fn test_webhook_mode() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.webhook_url = Some("https://bot.example.com/".to_string());

        assert_eq!(
            config.full_webhook_url().as_deref(),
            Some("https://bot.example.com/webhook")
        );
        match config.update_mode(false).unwrap() {
            UpdateMode::Webhook { url, listen_addr } => {
                assert_eq!(url.as_str(), "https://bot.example.com/webhook");
                assert_eq!(listen_addr.port(), 8080);
            }
            UpdateMode::Polling => panic!("expected webhook mode"),
        }
        assert!(matches!(config.update_mode(true).unwrap(), UpdateMode::Polling));
    }

    #[test]
    fn test_invalid_webhook_settings() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.webhook_url = Some("not a url".to_string());
        assert!(config.update_mode(false).is_err());

        config.webhook_url = Some("https://bot.example.com".to_string());
        config.listen_addr = "localhost".to_string();
        assert!(config.update_mode(false).is_err());
    }
}
