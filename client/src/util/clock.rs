//! Wall clock for countdowns and token expiry stamps.
//!
//! The browser build reads `Date.now()`; everything else uses the system clock.

use time::OffsetDateTime;

use protocol::countdown::instant_from_millis;

/// Current time as epoch milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// Current time as an instant.
pub fn now() -> OffsetDateTime {
    instant_from_millis(now_ms()).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}
