//! Update runner: converts teloxide messages to core [`modbot_core::Message`] and passes them to
//! the [`HandlerChain`], one spawned task per message.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use modbot_core::ToCoreMessage;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Where updates come from.
#[derive(Debug, Clone)]
pub enum UpdateMode {
    /// Telegram pushes updates to `url`; served locally on `listen_addr`.
    Webhook {
        url: reqwest::Url,
        listen_addr: SocketAddr,
    },
    Polling,
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMode::Webhook { url, listen_addr } => {
                write!(f, "webhook {} (listening on {})", url, listen_addr)
            }
            UpdateMode::Polling => write!(f, "long polling"),
        }
    }
}

/// Fetches the bot username into `bot_username`, then dispatches messages until shutdown.
///
/// A failing `get_me` is logged and the username stays unknown, in which case commands addressed
/// as `/cmd@name` are accepted for any name.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_dispatch(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    mode: UpdateMode,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed, bot username unknown"),
    }

    info!(mode = %mode, "Starting update dispatch");
    let chain = handler_chain;
    let handler = move |msg: teloxide::types::Message| {
        let chain = chain.clone();
        async move {
            dispatch_message(&chain, &msg);
            respond(())
        }
    };

    match mode {
        UpdateMode::Webhook { url, listen_addr } => {
            let options = webhooks::Options::new(listen_addr, url).drop_pending_updates();
            let listener = webhooks::axum(bot.clone(), options)
                .await
                .context("failed to set up webhook")?;
            teloxide::repl_with_listener(bot, handler, listener).await;
        }
        UpdateMode::Polling => {
            if let Err(e) = bot.delete_webhook().await {
                warn!(error = %e, "delete_webhook failed");
            }
            teloxide::repl(bot, handler).await;
        }
    }

    Ok(())
}

fn dispatch_message(chain: &HandlerChain, msg: &teloxide::types::Message) {
    let core_msg = TelegramMessageWrapper(msg).to_core();
    debug!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_id = %core_msg.id,
        has_text = core_msg.has_text(),
        "Received message"
    );

    let chain = chain.clone();
    tokio::spawn(async move {
        if let Err(e) = chain.handle(&core_msg).await {
            error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler chain failed");
        }
    });
}
