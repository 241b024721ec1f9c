//! HTTP client for the chat/billing backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. `/chat` and the two billing
//! endpoints are forwarded verbatim to `FLORA_UPSTREAM_URL`: method, body,
//! `Authorization` and `Content-Type` go up; status, `Content-Type` and body
//! come back down.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures become [`ProxyError`]s. Upstream 4xx/5xx responses
//! are passed through untouched so the client sees the backend's own status.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::config::ProxyTimeouts;

/// Headers copied from the inbound request to the upstream request.
static FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Errors produced while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No `FLORA_UPSTREAM_URL` was configured.
    #[error("no upstream configured")]
    NotConfigured,

    /// The upstream could not be reached or timed out.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The upstream response body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) | Self::Body(_) | Self::HttpClientBuild(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = axum::Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Join the upstream base URL and a request path.
fn upstream_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        if let Some(value) = inbound.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

/// Shared client bound to one backend.
pub struct Upstream {
    http: reqwest::Client,
    base_url: String,
}

impl Upstream {
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new(base_url: String, timeouts: ProxyTimeouts) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward one request and relay the upstream response.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError`] when the upstream is unreachable or its body
    /// cannot be read. Non-2xx statuses are not errors.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, ProxyError> {
        let url = upstream_url(&self.base_url, path);
        let resp = self
            .http
            .request(method, &url)
            .headers(forwarded_headers(headers))
            .body(body)
            .send()
            .await
            .map_err(|e| ProxyError::Upstream(e.to_string()))?;

        let status = resp.status();
        let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
        let bytes = resp.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;
        tracing::debug!(%path, %status, bytes = bytes.len(), "proxied upstream response");

        let mut response = (status, bytes).into_response();
        match content_type {
            Some(value) => {
                response.headers_mut().insert(header::CONTENT_TYPE, value);
            }
            None => {
                response.headers_mut().remove(header::CONTENT_TYPE);
            }
        }
        Ok(response)
    }
}
