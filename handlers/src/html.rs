//! HTML snippets for Telegram messages.

use modbot_core::User;

pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Clickable mention of `user` showing their display name.
pub fn mention(user: &User) -> String {
    format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        user.id,
        escape(&user.display_name())
    )
}

pub fn blockquote(text: &str) -> String {
    format!("<blockquote>{}</blockquote>", escape(text))
}
