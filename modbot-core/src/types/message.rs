//! Message and reply context types for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// The message a command was sent in reply to. Moderation commands act on its sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyContext {
    pub message_id: String,
    /// Sender of the replied-to message; absent for anonymous channel posts.
    pub user: Option<User>,
    pub content: Option<String>,
}

/// A single incoming message with sender, chat, text and optional reply context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Transport-specific id (Telegram numeric string).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text of the message; empty for media without caption.
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub reply_to: Option<ReplyContext>,
}

impl Message {
    pub fn has_text(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Sender of the replied-to message, if any.
    pub fn reply_target(&self) -> Option<&User> {
        self.reply_to.as_ref().and_then(|r| r.user.as_ref())
    }
}
