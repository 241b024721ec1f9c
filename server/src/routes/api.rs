//! Backend passthrough handlers.
//!
//! Each handler forwards to the same path on the upstream; see
//! [`crate::proxy`] for what is carried across.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use protocol::billing::{SUBSCRIPTION_STATUS_PATH, TRIAL_STATUS_PATH};
use protocol::chat::CHAT_PATH;

use crate::proxy::ProxyError;
use crate::state::AppState;

/// `POST /chat`
pub async fn chat(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    proxy(&state, Method::POST, CHAT_PATH, &headers, body).await
}

/// `GET /api/auth/trial-status`
pub async fn trial_status(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ProxyError> {
    proxy(&state, Method::GET, TRIAL_STATUS_PATH, &headers, Bytes::new()).await
}

/// `GET /api/payment/subscription-status`
pub async fn subscription_status(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ProxyError> {
    proxy(&state, Method::GET, SUBSCRIPTION_STATUS_PATH, &headers, Bytes::new()).await
}

async fn proxy(
    state: &AppState,
    method: Method,
    path: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let Some(upstream) = state.upstream.as_deref() else {
        tracing::warn!(%path, "proxy request rejected: no upstream configured");
        return Err(ProxyError::NotConfigured);
    };
    upstream
        .forward(method, path, headers, body)
        .await
        .inspect_err(|e| tracing::warn!(%path, upstream = upstream.base_url(), error = %e, "proxy request failed"))
}
