//! Per-user throttle table.
//!
//! [`RateLimiter`] remembers when each user last got a message through and refuses further
//! messages from that user until the cooldown has elapsed. Refused messages leave the table
//! untouched, so a user who keeps flooding is let through again exactly one cooldown after the
//! last accepted message.
//!
//! The table is bounded: entries idle for `idle_ttl` are swept (see [`spawn_sweeper`]) and a new
//! user arriving at a full table drops every entry whose cooldown has already elapsed. Entries
//! still inside their cooldown are never evicted; the table then grows past `max_entries` until
//! they expire.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};

/// Throttle settings, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Minimum time between two accepted messages of one user.
    pub cooldown: Duration,
    /// Entries idle at least this long are dropped by a sweep. Never shorter than `cooldown`.
    pub idle_ttl: Duration,
    /// Soft cap on the number of tracked users; exceeded only while every entry is inside its
    /// cooldown.
    pub max_entries: usize,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(2),
            idle_ttl: Duration::from_secs(60 * 60),
            max_entries: 10_000,
        }
    }
}

impl ThrottleConfig {
    /// Default settings with the given cooldown.
    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            cooldown,
            ..Self::default()
        }
    }
}

/// Last-seen table keyed by user id.
///
/// Check-then-set for one user happens under that key's shard lock, so two near-simultaneous
/// messages from the same user cannot both pass. Different users only share a shard lock by
/// chance and never a global one.
pub struct RateLimiter<C: Clock = SystemClock> {
    entries: DashMap<i64, Instant>,
    cooldown: Duration,
    idle_ttl: Duration,
    max_entries: usize,
    clock: C,
    silenced_count: AtomicU64,
}

impl RateLimiter<SystemClock> {
    pub fn new(config: ThrottleConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    /// Creates a limiter reading time from `clock`.
    pub fn with_clock(config: ThrottleConfig, clock: C) -> Self {
        Self {
            entries: DashMap::new(),
            cooldown: config.cooldown,
            idle_ttl: config.idle_ttl.max(config.cooldown),
            max_entries: config.max_entries.max(1),
            clock,
            silenced_count: AtomicU64::new(0),
        }
    }

    /// Decides whether a message from `user_id` arriving now should be processed.
    pub fn should_process(&self, user_id: i64) -> bool {
        self.should_process_at(user_id, self.clock.now())
    }

    /// Decides whether a message from `user_id` arriving at `now` should be processed.
    ///
    /// Returns `true` and records `now` when the user is unknown or the cooldown has elapsed since
    /// the last accepted message; otherwise returns `false` and keeps the stored time. A `now`
    /// earlier than the stored time counts as no time elapsed.
    pub fn should_process_at(&self, user_id: i64, now: Instant) -> bool {
        if !self.entries.contains_key(&user_id) && self.entries.len() >= self.max_entries {
            self.make_room(now);
        }

        match self.entries.entry(user_id) {
            Entry::Vacant(vacant) => {
                vacant.insert(now);
                true
            }
            Entry::Occupied(mut occupied) => {
                if now.saturating_duration_since(*occupied.get()) >= self.cooldown {
                    occupied.insert(now);
                    true
                } else {
                    drop(occupied);
                    self.record_silenced(user_id);
                    false
                }
            }
        }
    }

    /// Removes entries idle for at least `idle_ttl`, measured from the clock's current time.
    pub fn sweep(&self) -> usize {
        self.sweep_at(self.clock.now())
    }

    /// Removes entries idle for at least `idle_ttl` at `now`. Returns how many were removed.
    pub fn sweep_at(&self, now: Instant) -> usize {
        let idle_ttl = self.idle_ttl;
        let mut removed = 0;
        self.entries.retain(|_, last_seen| {
            let keep = now.saturating_duration_since(*last_seen) < idle_ttl;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Time of the last accepted message of `user_id`, if tracked.
    pub fn last_seen(&self, user_id: i64) -> Option<Instant> {
        self.entries.get(&user_id).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Total number of messages refused since startup.
    pub fn silenced_count(&self) -> u64 {
        self.silenced_count.load(Ordering::Relaxed)
    }

    /// Drops entries whose cooldown has elapsed at `now`. Such entries decide exactly like absent
    /// ones, so removing them never lets a throttled user through. Entries still inside their
    /// cooldown are kept even if the table stays over the soft cap.
    fn make_room(&self, now: Instant) {
        let cooldown = self.cooldown;
        let before = self.entries.len();
        self.entries
            .retain(|_, last_seen| now.saturating_duration_since(*last_seen) < cooldown);
        let remaining = self.entries.len();
        if remaining < self.max_entries {
            debug!(
                dropped = before.saturating_sub(remaining),
                remaining, "Throttle table full, expired entries dropped"
            );
        } else {
            debug!(
                remaining,
                max_entries = self.max_entries,
                "Throttle table over soft cap, all entries inside cooldown"
            );
        }
    }

    fn record_silenced(&self, user_id: i64) {
        let count = self.silenced_count.fetch_add(1, Ordering::Relaxed) + 1;
        // Only every 100th refusal is logged to keep floods out of the log.
        if count % 100 == 0 {
            debug!(silenced = count, recent_user_id = user_id, "Throttled messages");
        }
    }
}

/// Spawns a task that sweeps idle entries every `period` for the lifetime of the runtime.
pub fn spawn_sweeper<C: Clock + 'static>(
    limiter: Arc<RateLimiter<C>>,
    period: Duration,
) -> JoinHandle<()> {
    info!(
        period_secs = period.as_secs(),
        idle_ttl_secs = limiter.idle_ttl().as_secs(),
        "Starting throttle sweeper"
    );
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            ticker.tick().await;
            let removed = limiter.sweep();
            if removed > 0 {
                debug!(removed, remaining = limiter.len(), "Throttle sweep");
            }
        }
    })
}
