//! Full bot config: [`BaseConfig`] + [`ModerationConfig`].

use anyhow::Result;

use super::base::BaseConfig;
use super::moderation::ModerationConfig;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub moderation: ModerationConfig,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load(token)?,
            moderation: ModerationConfig::load()?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.moderation.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }

    pub fn owner_id(&self) -> i64 {
        self.moderation.owner_id
    }
}
