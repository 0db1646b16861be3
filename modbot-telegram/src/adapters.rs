//! Adapters from Telegram (teloxide) types to modbot_core types.

use modbot_core::{Chat, ChatKind, Message, ReplyContext, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            is_bot: self.0.is_bot,
            username: self.0.username.clone(),
            first_name: self.0.first_name.clone(),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Chat for conversion to core [`Chat`].
pub struct TelegramChatWrapper<'a>(pub &'a teloxide::types::Chat);

impl TelegramChatWrapper<'_> {
    pub fn to_core(&self) -> Chat {
        let chat = self.0;
        let kind = if chat.is_supergroup() {
            ChatKind::Supergroup
        } else if chat.is_group() {
            ChatKind::Group
        } else if chat.is_channel() {
            ChatKind::Channel
        } else {
            ChatKind::Private
        };
        Chat {
            id: chat.id.0,
            kind,
            title: chat.title().map(str::to_string),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// Text is taken from `text()` and falls back to the media caption. Messages without a sender
/// (channel posts) get [`User::unknown`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: TelegramChatWrapper(&msg.chat).to_core(),
            content: msg.text().or_else(|| msg.caption()).unwrap_or("").to_string(),
            created_at: msg.date,
            reply_to: self.reply_context(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn reply_context(&self) -> Option<ReplyContext> {
        self.0.reply_to_message().map(|reply| ReplyContext {
            message_id: reply.id.to_string(),
            user: reply.from.as_ref().map(|u| TelegramUserWrapper(u).to_core()),
            content: reply.text().map(str::to_string),
        })
    }
}
