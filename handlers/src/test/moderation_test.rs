//! Owner-only mute/ban flows against a recording bot.

use std::sync::Arc;

use chrono::{Duration, Utc};
use modbot_core::{Chat, ChatKind, Handler, HandlerResponse};
use tokio::sync::RwLock;

use super::mock_bot::{BotCall, MockBot};
use super::{message_in, replying_to, supergroup, user, OWNER_ID};
use crate::{BotUsername, ModerationAction, ModerationHandler};

fn username() -> BotUsername {
    Arc::new(RwLock::new(Some("modbot".to_string())))
}

fn handler(bot: &Arc<MockBot>) -> ModerationHandler {
    ModerationHandler::new(bot.clone(), username(), OWNER_ID)
}

const TARGET_MENTION: &str = "<a href=\"tg://user?id=2\">Вася</a>";

#[test]
fn test_action_from_command() {
    assert_eq!(ModerationAction::from_command("mute"), Some(ModerationAction::Mute));
    assert_eq!(ModerationAction::from_command("ban"), Some(ModerationAction::Ban));
    assert_eq!(ModerationAction::from_command("rules"), None);
}

#[tokio::test]
async fn test_owner_mutes_with_duration() {
    let bot = Arc::new(MockBot::new());
    let message = replying_to(
        message_in(supergroup(), user(OWNER_ID, "Председатель"), "/mute 1h"),
        user(2, "Вася"),
    );

    let before = Utc::now();
    let response = handler(&bot).handle(&message).await.unwrap();

    let calls = bot.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        BotCall::Delete {
            chat_id: -100_123,
            message_id: "77".to_string()
        }
    );
    match &calls[1] {
        BotCall::Restrict {
            user_id,
            until: Some(until),
            ..
        } => {
            assert_eq!(*user_id, 2);
            assert!(*until >= before + Duration::hours(1));
            assert!(*until <= Utc::now() + Duration::hours(1));
        }
        other => panic!("expected restrict with expiry, got {:?}", other),
    }
    let expected = format!(
        "🤯 Члена колхозников <b>{}</b> лишили <b>Свободы Слова</b> на 1h!",
        TARGET_MENTION
    );
    assert_eq!(bot.sent(), vec![expected.clone()]);
    assert_eq!(response, HandlerResponse::Reply(expected));
}

#[tokio::test]
async fn test_mute_with_bad_duration_is_permanent() {
    let bot = Arc::new(MockBot::new());
    let message = replying_to(
        message_in(supergroup(), user(OWNER_ID, "Председатель"), "!mute abc"),
        user(2, "Вася"),
    );

    handler(&bot).handle(&message).await.unwrap();

    assert!(bot.calls().contains(&BotCall::Restrict {
        chat_id: -100_123,
        user_id: 2,
        until: None
    }));
    assert_eq!(
        bot.sent(),
        vec![format!(
            "🤯 Члена колхозников <b>{}</b> лишили <b>Свободы Слова</b> навсегда!",
            TARGET_MENTION
        )]
    );
}

#[tokio::test]
async fn test_owner_bans_without_duration() {
    let bot = Arc::new(MockBot::new());
    let message = replying_to(
        message_in(supergroup(), user(OWNER_ID, "Председатель"), "/ban@ModBot"),
        user(2, "Вася"),
    );

    handler(&bot).handle(&message).await.unwrap();

    assert!(bot.calls().contains(&BotCall::Ban {
        chat_id: -100_123,
        user_id: 2,
        until: None
    }));
    assert_eq!(
        bot.sent(),
        vec![format!(
            "😱 Члена колхозников <b>{}</b> за<b>бан</b>или!",
            TARGET_MENTION
        )]
    );
}

#[tokio::test]
async fn test_non_owner_is_refused() {
    let bot = Arc::new(MockBot::new());
    let message = replying_to(
        message_in(supergroup(), user(3, "Петя"), "/ban"),
        user(2, "Вася"),
    );

    handler(&bot).handle(&message).await.unwrap();

    let calls = bot.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], BotCall::Delete { .. }));
    assert_eq!(
        bot.sent(),
        vec![
            "<a href=\"tg://user?id=3\">Петя</a>, Обычный смертный член колхозников не имеет прав на использование этой команды!"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_owner_without_reply_target() {
    let bot = Arc::new(MockBot::new());
    let message = message_in(supergroup(), user(OWNER_ID, "Председатель"), "/mute 5m");

    handler(&bot).handle(&message).await.unwrap();

    let calls = bot.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], BotCall::Delete { .. }));
    assert_eq!(bot.sent(), vec!["👀 Член колхозников не найден!".to_string()]);
}

#[tokio::test]
async fn test_denied_action_sends_no_confirmation() {
    let bot = Arc::new(MockBot::denying());
    let message = replying_to(
        message_in(supergroup(), user(OWNER_ID, "Председатель"), "/mute 1d"),
        user(2, "Вася"),
    );

    let response = handler(&bot).handle(&message).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert!(bot.sent().is_empty());
    assert!(bot
        .calls()
        .iter()
        .any(|call| matches!(call, BotCall::Restrict { user_id: 2, .. })));
}

#[tokio::test]
async fn test_ignores_private_chats_and_foreign_mentions() {
    let bot = Arc::new(MockBot::new());
    let private = Chat {
        id: OWNER_ID,
        kind: ChatKind::Private,
        title: None,
    };
    let in_private = replying_to(
        message_in(private, user(OWNER_ID, "Председатель"), "/mute 1h"),
        user(2, "Вася"),
    );
    let foreign = replying_to(
        message_in(supergroup(), user(OWNER_ID, "Председатель"), "/mute@other_bot 1h"),
        user(2, "Вася"),
    );
    let chatter = message_in(supergroup(), user(OWNER_ID, "Председатель"), "mute him please");

    for message in [in_private, foreign, chatter] {
        let response = handler(&bot).handle(&message).await.unwrap();
        assert_eq!(response, HandlerResponse::Ignore);
    }
    assert!(bot.calls().is_empty());
}
