//! Time source for session activity tracking.

use chrono::{DateTime, Duration, Utc};

/// Abstraction over system time, so idle expiry can be driven by tests.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Time elapsed between `since` and now. Negative if `since` lies in
    /// the future.
    fn elapsed_since(&self, since: DateTime<Utc>) -> Duration {
        self.now() - since
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
