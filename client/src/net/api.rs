//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so chat and status failures
//! degrade the UI (an error line, a stale badge) without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use protocol::{ApiError, ChatRequest, ChatResponse, StatusApi, SubscriptionStatus, TrialStatus};
#[cfg(feature = "hydrate")]
use protocol::{StatusSnapshot, billing, chat, sync::bearer};

#[cfg(any(test, feature = "hydrate"))]
fn chat_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable_on_server() -> String {
    "browser-only request attempted during server render".to_owned()
}

/// Send a message to `POST /chat`.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(chat::CHAT_PATH)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(chat_failed_message(resp.status()));
        }
        resp.json::<ChatResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable_on_server())
    }
}

/// `GET` a bearer-authenticated JSON endpoint.
async fn get_json<T>(path: &str, token: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Network(unavailable_on_server()))
    }
}

/// [`StatusApi`] over same-origin `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStatusApi;

impl StatusApi for BrowserStatusApi {
    async fn trial_status(&self, token: &str) -> Result<TrialStatus, ApiError> {
        get_json(protocol::billing::TRIAL_STATUS_PATH, token).await
    }

    async fn subscription_status(&self, token: &str) -> Result<SubscriptionStatus, ApiError> {
        get_json(protocol::billing::SUBSCRIPTION_STATUS_PATH, token).await
    }
}

/// Refresh `status` with `token`, keeping the previous value on failure.
#[cfg(feature = "hydrate")]
pub async fn refresh_status(token: String, status: leptos::prelude::RwSignal<StatusSnapshot>) {
    use leptos::prelude::Update;

    match protocol::fetch_status(&BrowserStatusApi, &token).await {
        Ok(refresh) => {
            if let Some(e) = &refresh.subscription_error {
                log::warn!("subscription status unavailable, using trial fields: {e}");
            }
            log::debug!("status refreshed from {}", billing::TRIAL_STATUS_PATH);
            status.update(|snapshot| refresh.apply_to(snapshot));
        }
        Err(e) => log::warn!("status refresh failed: {e}"),
    }
}
