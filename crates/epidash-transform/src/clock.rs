use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Hour of day after which the current date is considered fully reported.
const CUTOFF_HOUR: u32 = 22;

/// Injected wall-clock capability.
///
/// The transforms never read ambient time; callers pass a clock so the
/// backfill cutoff and the implied summary-row year stay deterministic
/// under test.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant, for deterministic tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The last date a zero-backfilled series extends through.
///
/// Before 22:00 local, the current day's figures have likely not been
/// published yet, so the cutoff is yesterday; from 22:00 on it is today.
pub fn reporting_cutoff(clock: &impl Clock) -> NaiveDate {
    let now = clock.now();
    if now.hour() >= CUTOFF_HOUR {
        now.date()
    } else {
        now.date().pred_opt().unwrap_or(NaiveDate::MIN)
    }
}
