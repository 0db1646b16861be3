//! Moderation settings: owner, throttle, profanity filter and rules link.

use anyhow::{Context, Result};
use handlers::DEFAULT_RULES_URL;
use middleware::ThrottleConfig;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Profanity filter inputs. Also used on its own by `modbot check`.
#[derive(Debug, Clone, Default)]
pub struct ProfanityConfig {
    /// PROFANITY_DICTIONARY_PATH: `form<TAB>lemma` table; case folding only when unset
    pub dictionary_path: Option<String>,
    /// PROFANITY_EXTRA_ROOTS_PATH: one root per line, added to the built-in list
    pub extra_roots_path: Option<String>,
}

impl ProfanityConfig {
    pub fn from_env() -> Self {
        Self {
            dictionary_path: non_empty_var("PROFANITY_DICTIONARY_PATH"),
            extra_roots_path: non_empty_var("PROFANITY_EXTRA_ROOTS_PATH"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModerationConfig {
    /// OWNER_ID: the only user allowed to mute and ban
    pub owner_id: i64,
    /// THROTTLE_COOLDOWN_SECS
    pub throttle_cooldown_secs: u64,
    /// THROTTLE_IDLE_TTL_SECS
    pub throttle_idle_ttl_secs: u64,
    /// THROTTLE_MAX_ENTRIES
    pub throttle_max_entries: usize,
    /// THROTTLE_SWEEP_INTERVAL_SECS
    pub throttle_sweep_interval_secs: u64,
    pub profanity: ProfanityConfig,
    /// RULES_URL
    pub rules_url: String,
}

impl ModerationConfig {
    /// OWNER_ID is required; unparsable numeric settings fall back to their defaults.
    pub fn load() -> Result<Self> {
        let owner_id = env::var("OWNER_ID").context("OWNER_ID not set")?;
        let owner_id = owner_id
            .trim()
            .parse()
            .with_context(|| format!("OWNER_ID is not a user id: {}", owner_id))?;
        let mut config = Self::with_owner(owner_id);
        config.throttle_cooldown_secs =
            parse_var("THROTTLE_COOLDOWN_SECS", config.throttle_cooldown_secs);
        config.throttle_idle_ttl_secs =
            parse_var("THROTTLE_IDLE_TTL_SECS", config.throttle_idle_ttl_secs);
        config.throttle_max_entries = parse_var("THROTTLE_MAX_ENTRIES", config.throttle_max_entries);
        config.throttle_sweep_interval_secs = parse_var(
            "THROTTLE_SWEEP_INTERVAL_SECS",
            config.throttle_sweep_interval_secs,
        );
        config.profanity = ProfanityConfig::from_env();
        if let Some(url) = non_empty_var("RULES_URL") {
            config.rules_url = url;
        }
        Ok(config)
    }

    /// Defaults for everything but the owner.
    pub fn with_owner(owner_id: i64) -> Self {
        let throttle = ThrottleConfig::default();
        Self {
            owner_id,
            throttle_cooldown_secs: throttle.cooldown.as_secs(),
            throttle_idle_ttl_secs: throttle.idle_ttl.as_secs(),
            throttle_max_entries: throttle.max_entries,
            throttle_sweep_interval_secs: 300,
            profanity: ProfanityConfig::default(),
            rules_url: DEFAULT_RULES_URL.to_string(),
        }
    }

    pub fn throttle_config(&self) -> ThrottleConfig {
        ThrottleConfig {
            cooldown: Duration::from_secs(self.throttle_cooldown_secs),
            idle_ttl: Duration::from_secs(self.throttle_idle_ttl_secs),
            max_entries: self.throttle_max_entries,
        }
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.throttle_sweep_interval_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.throttle_cooldown_secs == 0 {
            anyhow::bail!("THROTTLE_COOLDOWN_SECS must be greater than 0");
        }
        if self.throttle_sweep_interval_secs == 0 {
            anyhow::bail!("THROTTLE_SWEEP_INTERVAL_SECS must be greater than 0");
        }
        if reqwest::Url::parse(&self.rules_url).is_err() {
            anyhow::bail!("RULES_URL is not a valid URL: {}", self.rules_url);
        }
        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
