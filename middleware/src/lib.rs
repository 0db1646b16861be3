//! # Middleware for the moderation bot
//!
//! Handlers that run in the `before` phase of the chain: per-user throttling and message logging.
//! [`RateLimiter`] is the throttle table behind [`ThrottlingHandler`].

mod clock;
mod logging;
mod throttle;
mod throttling_handler;

#[cfg(test)]
mod test;

pub use clock::{Clock, MockClock, SystemClock};
pub use logging::LoggingHandler;
pub use throttle::{spawn_sweeper, RateLimiter, ThrottleConfig};
pub use throttling_handler::ThrottlingHandler;
