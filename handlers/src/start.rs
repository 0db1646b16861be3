//! `/start` greeting.

use std::sync::Arc;

use async_trait::async_trait;
use modbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::instrument;

use crate::command::{parse_command, START_PREFIXES};
use crate::html::mention;
use crate::BotUsername;

/// Greets the user and asks to be added to a group. Works in any chat.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
    bot_username: BotUsername,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: BotUsername) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        match parse_command(&message.content, START_PREFIXES, username.as_deref()) {
            Some(command) if command.is("start") => {}
            _ => return Ok(HandlerResponse::Ignore),
        }

        let text = format!(
            "Привет, {}\n\nДобавь меня в группу, чтобы начать работу!",
            mention(&message.user)
        );
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
