//! Days/hours/minutes/seconds decomposition of the time left until a deadline.
//!
//! DESIGN
//! ======
//! A countdown is recomputed from "now" on every tick and never stored, so a
//! late or skipped tick can only delay the display, never drift it.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use std::fmt;

use time::OffsetDateTime;

const MS_PER_DAY: u128 = 86_400_000;
const MS_PER_HOUR: u128 = 3_600_000;
const MS_PER_MINUTE: u128 = 60_000;
const MS_PER_SECOND: u128 = 1_000;

/// Time remaining until a target instant, split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Milliseconds represented by the four fields.
    #[must_use]
    pub fn total_millis(&self) -> u128 {
        u128::from(self.days) * MS_PER_DAY
            + u128::from(self.hours) * MS_PER_HOUR
            + u128::from(self.minutes) * MS_PER_MINUTE
            + u128::from(self.seconds) * MS_PER_SECOND
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {:02}h {:02}m {:02}s", self.days, self.hours, self.minutes, self.seconds)
    }
}

/// Compute the countdown from `now` to `target`.
///
/// Targets at or before `now` yield an all-zero countdown.
#[must_use]
pub fn calculate_countdown(target: OffsetDateTime, now: OffsetDateTime) -> Countdown {
    let remaining = (target - now).whole_milliseconds();
    let Ok(total) = u128::try_from(remaining) else {
        return Countdown::default();
    };
    if total == 0 {
        return Countdown::default();
    }

    let days = total / MS_PER_DAY;
    let rem = total % MS_PER_DAY;
    let hours = rem / MS_PER_HOUR;
    let rem = rem % MS_PER_HOUR;
    let minutes = rem / MS_PER_MINUTE;
    let rem = rem % MS_PER_MINUTE;
    let seconds = rem / MS_PER_SECOND;

    Countdown {
        days: u64::try_from(days).unwrap_or(u64::MAX),
        hours: u32::try_from(hours).unwrap_or(0),
        minutes: u32::try_from(minutes).unwrap_or(0),
        seconds: u32::try_from(seconds).unwrap_or(0),
    }
}

/// Convert epoch milliseconds (as stored in `tokenExpiration` or reported by
/// the browser clock) into an instant. Out-of-range values yield `None`.
#[must_use]
pub fn instant_from_millis(ms: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).ok()
}
