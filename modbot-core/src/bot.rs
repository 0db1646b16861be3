//! Outbound chat-management API used by handlers.
//!
//! [`Bot`] is transport-agnostic; modbot-telegram implements it via teloxide. Moderation calls return
//! an [`ActionOutcome`] so that a rejection by the chat platform (usually missing admin rights) is a
//! value the caller decides about, while transport failures stay in `Err`.

use crate::error::{ModbotError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result of a moderation call that reached the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The platform performed the action.
    Done,
    /// The platform refused the action (insufficient rights, target is an admin, message gone...).
    Denied(String),
}

impl ActionOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, ActionOutcome::Done)
    }
}

/// Chat-management operations the handlers need. All text is HTML.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Answers in the chat of the given message.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
    /// Deletes a message. `message_id` is transport-specific (Telegram numeric string).
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<ActionOutcome>;
    /// Takes away every send permission from the member until `until` (`None` = forever).
    async fn restrict_member(
        &self,
        chat: &Chat,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    ) -> Result<ActionOutcome>;
    /// Bans the member until `until` (`None` = forever).
    async fn ban_member(
        &self,
        chat: &Chat,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    ) -> Result<ActionOutcome>;
}

/// Parses a message id string into an i32 (Telegram message ids).
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| ModbotError::InvalidId(format!("message_id {}", s)))
}
