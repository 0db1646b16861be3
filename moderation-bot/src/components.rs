//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use handler_chain::HandlerChain;
use handlers::{
    BotUsername, DictionaryNormalizer, LowercaseNormalizer, ModerationHandler, Normalizer,
    ProfanityFilter, ProfanityHandler, RulesHandler, StartHandler,
};
use middleware::{LoggingHandler, RateLimiter, ThrottlingHandler};
use modbot_core::Bot;
use modbot_telegram::TelegramBotAdapter;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::{BotConfig, ProfanityConfig};

/// Shared dependencies of the handler chain.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Bot used by handlers. The Telegram adapter in production; tests inject a mock.
    pub handler_bot: Arc<dyn Bot>,
    pub bot_username: BotUsername,
    pub limiter: Arc<RateLimiter>,
    pub profanity_filter: Arc<ProfanityFilter>,
}

/// Builds the profanity filter: built-in roots plus the optional extra list, normalized with the
/// lemma table when one is configured.
#[instrument(skip(config))]
pub fn build_profanity_filter(config: &ProfanityConfig) -> Result<ProfanityFilter> {
    let normalizer: Arc<dyn Normalizer> = match &config.dictionary_path {
        Some(path) => Arc::new(DictionaryNormalizer::load(path)?),
        None => Arc::new(LowercaseNormalizer),
    };
    let mut filter = ProfanityFilter::new(normalizer);
    if let Some(path) = &config.extra_roots_path {
        let roots = ProfanityFilter::load_roots(path)?;
        info!(path = %path, count = roots.len(), "Extra denylist roots loaded");
        filter.extend_roots(roots);
    }
    Ok(filter)
}

/// Builds BotComponents. When `handler_bot_override` is `Some`, handlers use it instead of the
/// Telegram adapter.
#[instrument(skip(config, handler_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn Bot>>,
) -> Result<BotComponents> {
    let teloxide_bot = config.base.telegram.build_bot()?;
    let handler_bot: Arc<dyn Bot> = match handler_bot_override {
        Some(bot) => bot,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };

    let limiter = Arc::new(RateLimiter::new(config.moderation.throttle_config()));
    let profanity_filter = Arc::new(build_profanity_filter(&config.moderation.profanity)?);
    info!(
        cooldown_secs = limiter.cooldown().as_secs(),
        denylist_roots = profanity_filter.roots_len(),
        "Bot components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        handler_bot,
        bot_username: Arc::new(tokio::sync::RwLock::new(None)),
        limiter,
        profanity_filter,
    })
}

/// Builds the handler chain (logging → throttling → start → rules → moderation → profanity).
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> HandlerChain {
    let bot = &components.handler_bot;
    let username = &components.bot_username;
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(ThrottlingHandler::new(components.limiter.clone())))
        .add_handler(Arc::new(StartHandler::new(bot.clone(), username.clone())))
        .add_handler(Arc::new(RulesHandler::new(
            bot.clone(),
            username.clone(),
            config.moderation.rules_url.clone(),
        )))
        .add_handler(Arc::new(ModerationHandler::new(
            bot.clone(),
            username.clone(),
            config.owner_id(),
        )))
        .add_handler(Arc::new(ProfanityHandler::new(
            bot.clone(),
            components.profanity_filter.clone(),
        )))
}
