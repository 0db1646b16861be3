//! Bot command parsing: `/name`, `!name`, `/name@botname`, with optional free-form arguments.

/// Prefixes accepted by group commands.
pub const GROUP_PREFIXES: &[char] = &['/', '!'];
/// Prefixes accepted by `/start`.
pub const START_PREFIXES: &[char] = &['/'];

/// A command found at the start of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// Command name, lowercased, without prefix and mention.
    pub name: String,
    /// Rest of the message after the command, trimmed; `None` when empty.
    pub args: Option<&'a str>,
}

impl ParsedCommand<'_> {
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Parses a command from `text`.
///
/// Returns `None` when the text does not start with one of `prefixes`, the name is empty, or the
/// command is addressed to another bot (`/cmd@other_bot`). When `bot_username` is not known yet a
/// mention is accepted as is.
pub fn parse_command<'a>(
    text: &'a str,
    prefixes: &[char],
    bot_username: Option<&str>,
) -> Option<ParsedCommand<'a>> {
    let text = text.trim_start();
    let prefix = text.chars().next()?;
    if !prefixes.contains(&prefix) {
        return None;
    }

    let body = &text[prefix.len_utf8()..];
    let (head, rest) = match body.find(char::is_whitespace) {
        Some(idx) => (&body[..idx], &body[idx..]),
        None => (body, ""),
    };

    let (name, mention) = match head.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (head, None),
    };
    if name.is_empty() {
        return None;
    }
    if let (Some(mention), Some(username)) = (mention, bot_username) {
        if !mention.eq_ignore_ascii_case(username.trim_start_matches('@')) {
            return None;
        }
    }

    let args = rest.trim();
    Some(ParsedCommand {
        name: name.to_lowercase(),
        args: (!args.is_empty()).then_some(args),
    })
}
