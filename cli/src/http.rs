//! `reqwest` transport for the chat and billing endpoints.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use protocol::billing::{SUBSCRIPTION_STATUS_PATH, TRIAL_STATUS_PATH};
use protocol::chat::CHAT_PATH;
use protocol::sync::bearer;
use protocol::{ApiError, ChatRequest, ChatResponse, StatusApi, SubscriptionStatus, TrialStatus};
use reqwest::header::AUTHORIZATION;

/// Client for one Flora GPT deployment.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /chat`.
    pub async fn ask(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let response = self
            .client
            .post(self.url(CHAT_PATH))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn get_json<T>(&self, path: &str, token: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(self.url(path))
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl StatusApi for HttpApi {
    async fn trial_status(&self, token: &str) -> Result<TrialStatus, ApiError> {
        self.get_json(TRIAL_STATUS_PATH, token).await
    }

    async fn subscription_status(&self, token: &str) -> Result<SubscriptionStatus, ApiError> {
        self.get_json(SUBSCRIPTION_STATUS_PATH, token).await
    }
}
