//! Time source used to stamp entities.
//!
//! The store never calls `Utc::now()` directly so tests can pin or step
//! time with `MockClock`.

use chrono::{DateTime, Duration, Utc};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Current time, nudged forward so it is strictly after `previous`.
///
/// Two reads of a coarse clock can return the same instant; an update
/// timestamp must still move forward.
pub fn now_after(clock: &dyn Clock, previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = clock.now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
