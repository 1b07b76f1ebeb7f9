use std::time::{Duration, Instant};

use tracing::warn;

use crate::config::LockoutConfig;

/// Progressive login throttling.
///
/// After `max_attempts` consecutive rejections the guard locks for
/// `base_lock_secs`; each subsequent lock doubles the duration up to
/// `max_lock_secs`. A successful login resets everything.
#[derive(Debug)]
pub struct LoginGuard {
    config: LockoutConfig,
    failures: u32,
    lock_count: u32,
    locked_until: Option<Instant>,
}

impl LoginGuard {
    pub fn new(config: LockoutConfig) -> Self {
        Self {
            config,
            failures: 0,
            lock_count: 0,
            locked_until: None,
        }
    }

    /// Seconds until the current lock expires, if one is active.
    pub fn remaining_lock(&self) -> Option<u64> {
        self.remaining_lock_at(Instant::now())
    }

    fn remaining_lock_at(&self, now: Instant) -> Option<u64> {
        let until = self.locked_until?;
        if now >= until {
            return None;
        }
        Some((until - now).as_secs().max(1))
    }

    /// Record a rejected attempt. Returns the lock duration if this
    /// failure engaged a lock.
    pub fn record_failure(&mut self) -> Option<Duration> {
        self.record_failure_at(Instant::now())
    }

    fn record_failure_at(&mut self, now: Instant) -> Option<Duration> {
        self.failures += 1;
        if self.failures < self.config.max_attempts {
            return None;
        }

        let base = self.config.base_lock_secs.max(1);
        let secs = base
            .saturating_mul(1u64 << self.lock_count.min(16))
            .min(self.config.max_lock_secs.max(base));
        self.lock_count += 1;
        self.failures = 0;
        self.locked_until = Some(now + Duration::from_secs(secs));

        warn!(
            event = "console.session.login_locked",
            lock_secs = secs,
            lock_count = self.lock_count,
        );
        Some(Duration::from_secs(secs))
    }

    /// Reset after a successful login.
    pub fn reset(&mut self) {
        self.failures = 0;
        self.lock_count = 0;
        self.locked_until = None;
    }
}
