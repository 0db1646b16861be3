//! Owner-only `mute` / `ban` commands, issued as a reply to the offender's message.

use std::sync::Arc;

use async_trait::async_trait;
use modbot_core::{ActionOutcome, Bot, Handler, HandlerResponse, Message, Result, User};
use tracing::{debug, info, instrument};

use crate::command::{parse_command, GROUP_PREFIXES};
use crate::duration::parse_until_now;
use crate::html::{escape, mention};
use crate::BotUsername;

const NO_TARGET_TEXT: &str = "👀 Член колхозников не найден!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Mute,
    Ban,
}

impl ModerationAction {
    pub fn from_command(name: &str) -> Option<Self> {
        match name {
            "mute" => Some(Self::Mute),
            "ban" => Some(Self::Ban),
            _ => None,
        }
    }

    fn confirmation(self, target: &User, period: Option<&str>) -> String {
        match self {
            Self::Mute => {
                let period = match period {
                    Some(period) => format!("на {}", escape(period)),
                    None => "навсегда".to_string(),
                };
                format!(
                    "🤯 Члена колхозников <b>{}</b> лишили <b>Свободы Слова</b> {}!",
                    mention(target),
                    period
                )
            }
            Self::Ban => format!(
                "😱 Члена колхозников <b>{}</b> за<b>бан</b>или!",
                mention(target)
            ),
        }
    }
}

/// Mutes or bans the sender of the replied-to message.
///
/// The command message is always deleted. Only the owner may use it; anyone else gets a refusal.
/// The confirmation is posted only when the platform carried out the action; a denied action
/// (the bot lacks admin rights) is logged and otherwise ignored.
pub struct ModerationHandler {
    bot: Arc<dyn Bot>,
    bot_username: BotUsername,
    owner_id: i64,
}

impl ModerationHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: BotUsername, owner_id: i64) -> Self {
        Self {
            bot,
            bot_username,
            owner_id,
        }
    }

    async fn answer(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for ModerationHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_supergroup() {
            return Ok(HandlerResponse::Ignore);
        }
        let username = self.bot_username.read().await.clone();
        let Some(command) = parse_command(&message.content, GROUP_PREFIXES, username.as_deref())
        else {
            return Ok(HandlerResponse::Ignore);
        };
        let Some(action) = ModerationAction::from_command(&command.name) else {
            return Ok(HandlerResponse::Ignore);
        };

        if let ActionOutcome::Denied(reason) =
            self.bot.delete_message(&message.chat, &message.id).await?
        {
            debug!(reason = %reason, "Command message not deleted");
        }

        if message.user.id != self.owner_id {
            info!(action = ?action, "Moderation command from non-owner refused");
            let text = format!(
                "{}, Обычный смертный член колхозников не имеет прав на использование этой команды!",
                mention(&message.user)
            );
            return self.answer(message, text).await;
        }

        let Some(target) = message.reply_target() else {
            return self.answer(message, NO_TARGET_TEXT.to_string()).await;
        };

        let until = parse_until_now(command.args);
        let outcome = match action {
            ModerationAction::Mute => {
                self.bot
                    .restrict_member(&message.chat, target.id, until)
                    .await?
            }
            ModerationAction::Ban => self.bot.ban_member(&message.chat, target.id, until).await?,
        };

        match outcome {
            ActionOutcome::Done => {
                info!(action = ?action, target_id = target.id, until = ?until, "Moderation action applied");
                let period = until.and(command.args);
                self.answer(message, action.confirmation(target, period)).await
            }
            ActionOutcome::Denied(reason) => {
                debug!(action = ?action, target_id = target.id, reason = %reason, "Moderation action denied");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
