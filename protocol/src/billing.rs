//! Trial and subscription status as reported by the backend, plus the pure
//! rules that turn them into badges and countdown targets.
//!
//! DESIGN
//! ======
//! Both records are server-authoritative. The client only ever replaces them
//! wholesale through [`StatusSnapshot::apply`], so the last completed refresh
//! wins regardless of the order requests were issued in.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const TRIAL_STATUS_PATH: &str = "/api/auth/trial-status";
pub const SUBSCRIPTION_STATUS_PATH: &str = "/api/payment/subscription-status";

/// Body of `GET /api/auth/trial-status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrialStatus {
    pub is_trial_active: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub trial_end_date: Option<OffsetDateTime>,
    pub days_remaining: i64,
    pub has_paid_plan: bool,
    pub plan_type: Option<String>,
    pub billing_cycle: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub subscription_end_date: Option<OffsetDateTime>,
}

/// Body of `GET /api/payment/subscription-status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionStatus {
    pub has_paid_plan: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub subscription_end_date: Option<OffsetDateTime>,
    pub plan_type: Option<String>,
    pub billing_cycle: Option<String>,
}

impl SubscriptionStatus {
    /// Subscription fields embedded in a trial-status response.
    #[must_use]
    pub fn from_trial(trial: &TrialStatus) -> Self {
        Self {
            has_paid_plan: trial.has_paid_plan,
            subscription_end_date: trial.subscription_end_date,
            plan_type: trial.plan_type.clone(),
            billing_cycle: trial.billing_cycle.clone(),
        }
    }
}

/// Subscription record to keep after a trial-status refresh.
///
/// Precedence: no paid plan on the trial response means no record; otherwise a
/// fetched record wins; otherwise the trial response's own subscription fields
/// stand in, but only when they carry an end date.
#[must_use]
pub fn derive_subscription(fetched: Option<SubscriptionStatus>, trial: &TrialStatus) -> Option<SubscriptionStatus> {
    if !trial.has_paid_plan {
        return None;
    }
    if fetched.is_some() {
        return fetched;
    }
    trial
        .subscription_end_date
        .is_some()
        .then(|| SubscriptionStatus::from_trial(trial))
}

/// Which status badge the banner shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Paid,
    Trial,
}

/// Latest known billing state for the page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub trial: Option<TrialStatus>,
    pub subscription: Option<SubscriptionStatus>,
}

impl StatusSnapshot {
    /// Overwrite both records with the result of a refresh.
    pub fn apply(&mut self, trial: TrialStatus, subscription: Option<SubscriptionStatus>) {
        self.trial = Some(trial);
        self.subscription = subscription;
    }

    /// Paid badge condition: a paid plan with a known end date.
    #[must_use]
    pub fn shows_paid(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|s| s.has_paid_plan && s.subscription_end_date.is_some())
    }

    /// Trial badge condition. Gated on the paid condition, so the two badges
    /// are mutually exclusive.
    #[must_use]
    pub fn shows_trial(&self) -> bool {
        !self.shows_paid()
            && self
                .trial
                .as_ref()
                .is_some_and(|t| t.is_trial_active && t.days_remaining > 0)
    }

    #[must_use]
    pub fn badge(&self) -> Option<Badge> {
        if self.shows_paid() {
            Some(Badge::Paid)
        } else if self.shows_trial() {
            Some(Badge::Trial)
        } else {
            None
        }
    }

    /// Deadline the trial countdown ticks toward, while an unpaid trial runs.
    #[must_use]
    pub fn trial_countdown_target(&self) -> Option<OffsetDateTime> {
        self.trial
            .as_ref()
            .filter(|t| t.is_trial_active && !t.has_paid_plan)
            .and_then(|t| t.trial_end_date)
    }

    /// Deadline the subscription countdown ticks toward, while a plan is paid.
    #[must_use]
    pub fn subscription_countdown_target(&self) -> Option<OffsetDateTime> {
        self.subscription
            .as_ref()
            .filter(|s| s.has_paid_plan)
            .and_then(|s| s.subscription_end_date)
    }

    #[must_use]
    pub fn trial_days_remaining(&self) -> i64 {
        self.trial.as_ref().map_or(0, |t| t.days_remaining)
    }
}

/// `"1 day"` / `"3 days"`.
#[must_use]
pub fn days_phrase(days: i64) -> String {
    if days == 1 { "1 day".to_owned() } else { format!("{days} days") }
}

/// Trial badge label, e.g. `"Trial: 3 days left"`.
#[must_use]
pub fn trial_badge_text(days_remaining: i64) -> String {
    format!("Trial: {} left", days_phrase(days_remaining))
}

/// Paid badge label, e.g. `"Pro plan (monthly)"`.
#[must_use]
pub fn paid_badge_text(subscription: &SubscriptionStatus) -> String {
    let plan = subscription
        .plan_type
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map_or_else(|| "Paid".to_owned(), capitalize);
    match subscription.billing_cycle.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(cycle) => format!("{plan} plan ({cycle})"),
        None => format!("{plan} plan"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
