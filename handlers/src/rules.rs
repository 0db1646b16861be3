//! `/rules` in supergroups.

use std::sync::Arc;

use async_trait::async_trait;
use modbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::instrument;

use crate::command::{parse_command, GROUP_PREFIXES};
use crate::html::{blockquote, escape};
use crate::BotUsername;

pub const DEFAULT_RULES_URL: &str = "https://telegra.ph/Pravila-kolhoznikov-02-03";

/// Posts the link to the chat rules.
pub struct RulesHandler {
    bot: Arc<dyn Bot>,
    bot_username: BotUsername,
    rules_url: String,
}

impl RulesHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: BotUsername, rules_url: impl Into<String>) -> Self {
        Self {
            bot,
            bot_username,
            rules_url: rules_url.into(),
        }
    }

    fn rules_text(&self, chat_title: &str) -> String {
        format!(
            "Правила чата {} для её членов колхозников:\n{}\n\n{}",
            escape(chat_title),
            escape(&self.rules_url),
            blockquote("Незнание правил не освобождает от ответственности!")
        )
    }
}

#[async_trait]
impl Handler for RulesHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_supergroup() {
            return Ok(HandlerResponse::Ignore);
        }
        let username = self.bot_username.read().await.clone();
        match parse_command(&message.content, GROUP_PREFIXES, username.as_deref()) {
            Some(command) if command.is("rules") => {}
            _ => return Ok(HandlerResponse::Ignore),
        }

        let text = self.rules_text(message.chat.title.as_deref().unwrap_or_default());
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
