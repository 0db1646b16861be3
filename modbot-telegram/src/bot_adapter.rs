//! Wraps teloxide::Bot and implements [`modbot_core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use modbot_core::{parse_message_id, ActionOutcome, Bot as CoreBot, Chat, ModbotError, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, ChatPermissions, MessageId, ParseMode, UserId};
use teloxide::RequestError;
use tracing::warn;

/// Thin wrapper around teloxide::Bot that implements modbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// API rejections become [`ActionOutcome::Denied`]; transport failures stay errors.
fn outcome<T>(method: &str, result: std::result::Result<T, RequestError>) -> Result<ActionOutcome> {
    match result {
        Ok(_) => Ok(ActionOutcome::Done),
        Err(RequestError::Api(e)) => {
            warn!(method, error = %e, "Telegram refused the request");
            Ok(ActionOutcome::Denied(e.to_string()))
        }
        Err(e) => Err(ModbotError::Bot(format!("{}: {}", method, e))),
    }
}

fn to_user_id(id: i64) -> Result<UserId> {
    u64::try_from(id)
        .map(UserId)
        .map_err(|_| ModbotError::InvalidId(format!("user_id {}", id)))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| ModbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<ActionOutcome> {
        let id = parse_message_id(message_id)?;
        outcome(
            "delete_message",
            self.bot.delete_message(ChatId(chat.id), MessageId(id)).await,
        )
    }

    async fn restrict_member(
        &self,
        chat: &Chat,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    ) -> Result<ActionOutcome> {
        let request = self.bot.restrict_chat_member(
            ChatId(chat.id),
            to_user_id(user_id)?,
            ChatPermissions::empty(),
        );
        let result = match until {
            Some(until) => request.until_date(until).await,
            None => request.await,
        };
        outcome("restrict_chat_member", result)
    }

    async fn ban_member(
        &self,
        chat: &Chat,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    ) -> Result<ActionOutcome> {
        let request = self
            .bot
            .ban_chat_member(ChatId(chat.id), to_user_id(user_id)?);
        let result = match until {
            Some(until) => request.until_date(until).await,
            None => request.await,
        };
        outcome("ban_chat_member", result)
    }
}
