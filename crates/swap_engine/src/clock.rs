use chrono::Utc;
use swap_core::Millis;

/// Wall-clock source for the rate limiter.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> Millis;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Millis {
        // Clocks set before 1970 read as the epoch.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}
