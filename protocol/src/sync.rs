//! Status refresh: trial status first, subscription detail only for paid plans.
//!
//! ERROR HANDLING
//! ==============
//! A failed trial-status call fails the whole refresh so callers keep their
//! previous snapshot. A failed subscription call is not an error: the record
//! is derived from the trial response instead and the failure is reported
//! alongside for logging.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use crate::billing::{StatusSnapshot, SubscriptionStatus, TrialStatus, derive_subscription};

/// Interval between scheduled status refreshes.
pub const STATUS_REFRESH_INTERVAL_MS: u32 = 5 * 60 * 1_000;

/// Interval between countdown ticks.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Transport failure talking to the billing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Transport for the two billing endpoints.
///
/// Implemented over `gloo-net` in the browser and `reqwest` in the CLI.
pub trait StatusApi {
    async fn trial_status(&self, token: &str) -> Result<TrialStatus, ApiError>;
    async fn subscription_status(&self, token: &str) -> Result<SubscriptionStatus, ApiError>;
}

/// Result of one successful refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusRefresh {
    pub trial: TrialStatus,
    pub subscription: Option<SubscriptionStatus>,
    /// Set when the subscription call failed and the record was derived.
    pub subscription_error: Option<ApiError>,
}

impl StatusRefresh {
    /// Overwrite `snapshot` with this refresh.
    pub fn apply_to(self, snapshot: &mut StatusSnapshot) {
        snapshot.apply(self.trial, self.subscription);
    }
}

/// Fetch trial status and, for paid plans, subscription detail.
///
/// # Errors
///
/// Returns the trial-status error; subscription errors are folded into
/// [`StatusRefresh::subscription_error`].
pub async fn fetch_status<A: StatusApi>(api: &A, token: &str) -> Result<StatusRefresh, ApiError> {
    let trial = api.trial_status(token).await?;

    let (fetched, subscription_error) = if trial.has_paid_plan {
        match api.subscription_status(token).await {
            Ok(subscription) => (Some(subscription), None),
            Err(e) => (None, Some(e)),
        }
    } else {
        (None, None)
    };

    let subscription = derive_subscription(fetched, &trial);
    Ok(StatusRefresh { trial, subscription, subscription_error })
}
