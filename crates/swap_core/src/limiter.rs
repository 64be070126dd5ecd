/// Milliseconds since the Unix epoch.
pub type Millis = u64;

/// Cooldown between two auth actions.
pub const SHORT_WINDOW_MS: Millis = 500;
/// Cooldown in front of listing submissions.
pub const LONG_WINDOW_MS: Millis = 5_000;

/// Client-side throttle derived from the last sensitive attempt.
///
/// Both windows read the same timestamp; blocking is a pure function of that
/// timestamp and the caller's notion of "now", so nothing needs to be reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateLimiter {
    last_attempt_at: Millis,
}

impl RateLimiter {
    pub fn new(now: Millis) -> Self {
        Self {
            last_attempt_at: now,
        }
    }

    pub fn last_attempt_at(&self) -> Millis {
        self.last_attempt_at
    }

    /// Never moves the timestamp backwards, even if the clock does.
    pub fn record_attempt(&mut self, now: Millis) {
        self.last_attempt_at = self.last_attempt_at.max(now);
    }

    pub fn is_short_blocked(&self, now: Millis) -> bool {
        now < self.last_attempt_at.saturating_add(SHORT_WINDOW_MS)
    }

    pub fn is_long_blocked(&self, now: Millis) -> bool {
        now < self.last_attempt_at.saturating_add(LONG_WINDOW_MS)
    }
}
