use std::cell::RefCell;

use futures::executor::block_on;
use time::Duration;
use time::macros::datetime;

use super::*;
use crate::billing::Badge;

/// Scripted [`StatusApi`] that records every call it receives.
struct FakeApi {
    trial: Result<TrialStatus, ApiError>,
    subscription: Result<SubscriptionStatus, ApiError>,
    calls: RefCell<Vec<(&'static str, String)>>,
}

impl FakeApi {
    fn new(trial: Result<TrialStatus, ApiError>, subscription: Result<SubscriptionStatus, ApiError>) -> Self {
        Self { trial, subscription, calls: RefCell::new(Vec::new()) }
    }
}

impl StatusApi for FakeApi {
    async fn trial_status(&self, token: &str) -> Result<TrialStatus, ApiError> {
        self.calls.borrow_mut().push(("trial", bearer(token)));
        self.trial.clone()
    }

    async fn subscription_status(&self, token: &str) -> Result<SubscriptionStatus, ApiError> {
        self.calls.borrow_mut().push(("subscription", bearer(token)));
        self.subscription.clone()
    }
}

fn paid_trial() -> TrialStatus {
    TrialStatus {
        has_paid_plan: true,
        plan_type: Some("pro".to_owned()),
        billing_cycle: Some("monthly".to_owned()),
        subscription_end_date: Some(datetime!(2026-04-01 00:00:00 UTC)),
        ..TrialStatus::default()
    }
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn unpaid_trial_skips_subscription_call() {
    let trial = TrialStatus {
        is_trial_active: true,
        days_remaining: 3,
        trial_end_date: Some(datetime!(2026-03-04 12:00:00 UTC)),
        ..TrialStatus::default()
    };
    let api = FakeApi::new(Ok(trial.clone()), Err(ApiError::Status(500)));

    let refresh = block_on(fetch_status(&api, "abc")).unwrap();

    assert_eq!(*api.calls.borrow(), vec![("trial", "Bearer abc".to_owned())]);
    assert_eq!(refresh.trial, trial);
    assert_eq!(refresh.subscription, None);
    assert_eq!(refresh.subscription_error, None);
}

#[test]
fn paid_plan_fetches_subscription_detail() {
    let detail = SubscriptionStatus {
        has_paid_plan: true,
        subscription_end_date: Some(datetime!(2027-01-01 00:00:00 UTC)),
        plan_type: Some("team".to_owned()),
        billing_cycle: Some("yearly".to_owned()),
    };
    let api = FakeApi::new(Ok(paid_trial()), Ok(detail.clone()));

    let refresh = block_on(fetch_status(&api, "tok")).unwrap();

    assert_eq!(api.calls.borrow().len(), 2);
    assert_eq!(api.calls.borrow()[1], ("subscription", "Bearer tok".to_owned()));
    assert_eq!(refresh.subscription, Some(detail));
}

#[test]
fn failed_subscription_call_derives_record_from_trial() {
    let api = FakeApi::new(Ok(paid_trial()), Err(ApiError::Network("offline".to_owned())));

    let refresh = block_on(fetch_status(&api, "tok")).unwrap();

    let subscription = refresh.subscription.clone().expect("derived subscription");
    assert!(subscription.has_paid_plan);
    assert_eq!(subscription.plan_type.as_deref(), Some("pro"));
    assert_eq!(subscription.billing_cycle.as_deref(), Some("monthly"));
    assert_eq!(refresh.subscription_error, Some(ApiError::Network("offline".to_owned())));

    let mut snapshot = StatusSnapshot::default();
    refresh.apply_to(&mut snapshot);
    assert_eq!(snapshot.badge(), Some(Badge::Paid));
}

#[test]
fn failed_trial_call_keeps_previous_snapshot() {
    let mut snapshot = StatusSnapshot::default();
    let previous = TrialStatus {
        is_trial_active: true,
        days_remaining: 2,
        trial_end_date: Some(datetime!(2026-03-03 12:00:00 UTC) + Duration::hours(1)),
        ..TrialStatus::default()
    };
    snapshot.apply(previous, None);
    let before = snapshot.clone();

    let api = FakeApi::new(Err(ApiError::Status(401)), Err(ApiError::Status(401)));
    if let Ok(refresh) = block_on(fetch_status(&api, "tok")) {
        refresh.apply_to(&mut snapshot);
    }

    assert_eq!(snapshot, before);
    assert_eq!(api.calls.borrow().len(), 1);
}

#[test]
fn api_error_messages_are_descriptive() {
    assert_eq!(ApiError::Status(503).to_string(), "unexpected status: 503");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "invalid response body: eof");
}
