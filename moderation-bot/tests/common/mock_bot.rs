//! Mock implementation of [`modbot_core::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on deletions, restrictions and reply texts
//! without hitting Telegram.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use modbot_core::{ActionOutcome, Bot, Chat, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send(i64, String),
    Delete(i64, String),
    Restrict(i64, i64, Option<DateTime<Utc>>),
    Ban(i64, i64, Option<DateTime<Utc>>),
}

#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<Call>>,
}

impl MockBot {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.push(Call::Send(chat.id, text.to_string()));
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<ActionOutcome> {
        self.push(Call::Delete(chat.id, message_id.to_string()));
        Ok(ActionOutcome::Done)
    }

    async fn restrict_member(
        &self,
        chat: &Chat,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    ) -> Result<ActionOutcome> {
        self.push(Call::Restrict(chat.id, user_id, until));
        Ok(ActionOutcome::Done)
    }

    async fn ban_member(
        &self,
        chat: &Chat,
        user_id: i64,
        until: Option<DateTime<Utc>>,
    ) -> Result<ActionOutcome> {
        self.push(Call::Ban(chat.id, user_id, until));
        Ok(ActionOutcome::Done)
    }
}
