//! Throttling gate for the handler chain.

use std::sync::Arc;

use async_trait::async_trait;
use modbot_core::{Handler, Message, Result};
use tracing::{debug, instrument};

use crate::clock::{Clock, SystemClock};
use crate::throttle::RateLimiter;

/// Drops messages from a user who already got one through within the cooldown.
///
/// Dropped messages get no reply at all; the chain simply stops.
pub struct ThrottlingHandler<C: Clock = SystemClock> {
    limiter: Arc<RateLimiter<C>>,
}

impl<C: Clock> ThrottlingHandler<C> {
    pub fn new(limiter: Arc<RateLimiter<C>>) -> Self {
        Self { limiter }
    }

    pub fn limiter(&self) -> &Arc<RateLimiter<C>> {
        &self.limiter
    }
}

#[async_trait]
impl<C: Clock + 'static> Handler for ThrottlingHandler<C> {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let allowed = self.limiter.should_process(message.user.id);
        if !allowed {
            debug!(chat_id = message.chat.id, message_id = %message.id, "Throttled");
        }
        Ok(allowed)
    }
}
