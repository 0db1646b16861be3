//! Unit tests for LoggingHandler and ThrottlingHandler.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use modbot_core::{Chat, ChatKind, Handler, HandlerResponse, Message, User};

use crate::{LoggingHandler, MockClock, RateLimiter, ThrottleConfig, ThrottlingHandler};

fn sample_message(user_id: i64, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            is_bot: false,
            username: Some("testuser".to_string()),
            first_name: "Test".to_string(),
            last_name: None,
        },
        chat: Chat {
            id: -100123,
            kind: ChatKind::Supergroup,
            title: Some("Колхоз".to_string()),
        },
        content: content.to_string(),
        created_at: Utc::now(),
        reply_to: None,
    }
}

#[tokio::test]
async fn test_logging_handler_before_continues() {
    let handler = LoggingHandler;
    let result = handler.before(&sample_message(1, "hello")).await;
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_logging_handler_after_ok() {
    let handler = LoggingHandler;
    let response = HandlerResponse::Reply("hi".to_string());
    assert!(handler
        .after(&sample_message(1, "hello"), &response)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_throttling_handler_drops_second_message_in_window() {
    let clock = MockClock::new(Instant::now());
    let limiter = Arc::new(RateLimiter::with_clock(
        ThrottleConfig::with_cooldown(Duration::from_secs(2)),
        clock.clone(),
    ));
    let handler = ThrottlingHandler::new(limiter.clone());

    assert!(handler.before(&sample_message(10, "a")).await.unwrap());
    assert!(!handler.before(&sample_message(10, "b")).await.unwrap());
    assert!(handler.before(&sample_message(11, "c")).await.unwrap());

    clock.advance(Duration::from_secs(2));
    assert!(handler.before(&sample_message(10, "d")).await.unwrap());
    assert_eq!(handler.limiter().silenced_count(), 1);
}

#[tokio::test]
async fn test_throttling_handler_handle_ignores() {
    let handler = ThrottlingHandler::new(Arc::new(RateLimiter::new(ThrottleConfig::default())));
    let response = handler.handle(&sample_message(1, "x")).await.unwrap();
    assert_eq!(response, HandlerResponse::Ignore);
}
