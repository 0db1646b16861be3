//! Recording [`Bot`] for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use modbot_core::{ActionOutcome, Bot, Chat, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    Send {
        chat_id: i64,
        text: String,
    },
    Delete {
        chat_id: i64,
        message_id: String,
    },
    Restrict {
        chat_id: i64,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    },
    Ban {
        chat_id: i64,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    },
}

/// Records every call. With `denied` set, every moderation call comes back as
/// [`ActionOutcome::Denied`], as when the bot is not an admin.
#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    denied: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn denying() -> Self {
        Self {
            denied: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of all sent messages, in order.
    pub fn sent(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                BotCall::Send { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: BotCall) -> ActionOutcome {
        self.calls.lock().unwrap().push(call);
        if self.denied {
            ActionOutcome::Denied("Bad Request: not enough rights".to_string())
        } else {
            ActionOutcome::Done
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.calls.lock().unwrap().push(BotCall::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<ActionOutcome> {
        Ok(self.record(BotCall::Delete {
            chat_id: chat.id,
            message_id: message_id.to_string(),
        }))
    }

    async fn restrict_member(
        &self,
        chat: &Chat,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    ) -> Result<ActionOutcome> {
        Ok(self.record(BotCall::Restrict {
            chat_id: chat.id,
            user_id,
            until,
        }))
    }

    async fn ban_member(
        &self,
        chat: &Chat,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    ) -> Result<ActionOutcome> {
        Ok(self.record(BotCall::Ban {
            chat_id: chat.id,
            user_id,
            until,
        }))
    }
}
