//! Deletes messages with profanity in supergroups.

use std::sync::Arc;

use async_trait::async_trait;
use modbot_core::{ActionOutcome, Bot, Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

use crate::html::mention;
use crate::profanity::ProfanityFilter;

/// Deletes the first message word hitting the denylist and warns the sender.
///
/// The warning is only sent when the deletion went through.
pub struct ProfanityHandler {
    bot: Arc<dyn Bot>,
    filter: Arc<ProfanityFilter>,
}

impl ProfanityHandler {
    pub fn new(bot: Arc<dyn Bot>, filter: Arc<ProfanityFilter>) -> Self {
        Self { bot, filter }
    }
}

#[async_trait]
impl Handler for ProfanityHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_supergroup() || !message.has_text() {
            return Ok(HandlerResponse::Ignore);
        }
        let Some(found) = self.filter.find_match(&message.content) else {
            return Ok(HandlerResponse::Ignore);
        };

        info!(message_id = %message.id, root = %found.root, "Profanity found, deleting message");
        match self.bot.delete_message(&message.chat, &message.id).await? {
            ActionOutcome::Done => {
                let text = format!("{}, не ругайся!", mention(&message.user));
                self.bot.reply_to(message, &text).await?;
                Ok(HandlerResponse::Reply(text))
            }
            ActionOutcome::Denied(reason) => {
                debug!(reason = %reason, "Profane message not deleted");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
