//! Live countdowns and the badge view derived from the status snapshot.
//!
//! The snapshot itself is [`protocol::StatusSnapshot`], provided as its own
//! signal. Countdowns tick once a second and live in a separate signal so
//! ticks do not re-trigger anything keyed on the snapshot.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use protocol::billing::{paid_badge_text, trial_badge_text};
use protocol::{Badge, Countdown, StatusSnapshot};

/// Latest value of each countdown timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdowns {
    pub trial: Option<Countdown>,
    pub subscription: Option<Countdown>,
}

/// Everything the status banner renders for the visible badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeView {
    pub kind: Badge,
    pub label: String,
    pub detail: Option<String>,
}

impl BadgeView {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            Badge::Paid => "status-badge status-badge--paid",
            Badge::Trial => "status-badge status-badge--trial",
        }
    }
}

/// Resolve the badge to show, if any.
pub fn badge_view(snapshot: &StatusSnapshot, countdowns: &Countdowns) -> Option<BadgeView> {
    match snapshot.badge()? {
        Badge::Paid => {
            let subscription = snapshot.subscription.as_ref()?;
            Some(BadgeView {
                kind: Badge::Paid,
                label: paid_badge_text(subscription),
                detail: countdowns.subscription.map(|c| format!("Renews in {c}")),
            })
        }
        Badge::Trial => Some(BadgeView {
            kind: Badge::Trial,
            label: trial_badge_text(snapshot.trial_days_remaining()),
            detail: countdowns.trial.map(|c| c.to_string()),
        }),
    }
}
