use anyhow::Result;
use handler_chain::HandlerChain;
use middleware::spawn_sweeper;
use modbot_core::{init_tracing, Bot};
use modbot_telegram::run_dispatch;
use std::sync::Arc;
use tracing::{info, instrument};

use super::components::{build_bot_components, build_handler_chain, BotComponents};
use super::config::BotConfig;

/// Main entry: validate config, init logging, build components, start the throttle sweeper, then
/// dispatch updates (webhook, or long polling when no webhook is configured or `force_polling`).
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, force_polling: bool) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    let mode = config.base.telegram.update_mode(force_polling)?;
    info!(
        owner_id = config.owner_id(),
        mode = %mode,
        "Initializing bot"
    );

    let components = build_bot_components(&config, None)?;
    let handler_chain = build_handler_chain(&config, &components);
    let _sweeper = spawn_sweeper(
        components.limiter.clone(),
        config.moderation.sweep_interval(),
    );

    info!("Bot started successfully");

    run_dispatch(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot_username.clone(),
        mode,
    )
    .await
}

/// Builds components and handler chain without contacting Telegram. Used by integration tests that
/// inject a mock bot and drive the chain with fake messages.
#[instrument(skip(config, handler_bot_override))]
pub fn build_only(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn Bot>>,
) -> Result<(HandlerChain, BotComponents)> {
    config.validate()?;
    let components = build_bot_components(config, handler_bot_override)?;
    let handler_chain = build_handler_chain(config, &components);
    Ok((handler_chain, components))
}
