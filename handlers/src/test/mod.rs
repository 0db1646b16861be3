mod mock_bot;
mod moderation_test;

use chrono::Utc;
use modbot_core::{Chat, ChatKind, Message, ReplyContext, User};

pub(crate) const OWNER_ID: i64 = 1000;

pub(crate) fn user(id: i64, first_name: &str) -> User {
    User {
        id,
        is_bot: false,
        username: None,
        first_name: first_name.to_string(),
        last_name: None,
    }
}

pub(crate) fn supergroup() -> Chat {
    Chat {
        id: -100_123,
        kind: ChatKind::Supergroup,
        title: Some("Колхоз".to_string()),
    }
}

pub(crate) fn message_in(chat: Chat, from: User, content: &str) -> Message {
    Message {
        id: "77".to_string(),
        user: from,
        chat,
        content: content.to_string(),
        created_at: Utc::now(),
        reply_to: None,
    }
}

pub(crate) fn replying_to(mut message: Message, target: User) -> Message {
    message.reply_to = Some(ReplyContext {
        message_id: "76".to_string(),
        user: Some(target),
        content: Some("...".to_string()),
    });
    message
}
