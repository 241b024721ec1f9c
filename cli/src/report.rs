//! Terminal rendering of the billing status.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use protocol::billing::{paid_badge_text, trial_badge_text};
use protocol::{Badge, StatusSnapshot, calculate_countdown};
use time::OffsetDateTime;

/// One-line summary matching the widget's badge, with a live countdown.
pub fn status_line(snapshot: &StatusSnapshot, now: OffsetDateTime) -> String {
    match snapshot.badge() {
        Some(Badge::Paid) => {
            let label = snapshot.subscription.as_ref().map(paid_badge_text).unwrap_or_default();
            match snapshot.subscription_countdown_target() {
                Some(target) => format!("{label} | renews in {}", calculate_countdown(target, now)),
                None => label,
            }
        }
        Some(Badge::Trial) => {
            let label = trial_badge_text(snapshot.trial_days_remaining());
            match snapshot.trial_countdown_target() {
                Some(target) => format!("{label} | {}", calculate_countdown(target, now)),
                None => label,
            }
        }
        None if snapshot.trial.is_none() => "status not loaded".to_owned(),
        None => "no active trial or paid plan".to_owned(),
    }
}
