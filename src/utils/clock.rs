use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The single zone every attendance timestamp is read in.
pub const TIMEZONE: Tz = chrono_tz::America::New_York;

/// Source of "now". Injected so tests can pin the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&TIMEZONE)
    }
}

#[cfg(test)]
pub use manual::ManualClock;
