use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use protocol::{Standard, fetch_status};

use super::*;

async fn spawn_backend() -> String {
    let app = Router::new()
        .route(
            TRIAL_STATUS_PATH,
            get(|headers: HeaderMap| async move {
                if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer tok") {
                    return StatusCode::UNAUTHORIZED.into_response();
                }
                axum::Json(serde_json::json!({
                    "isTrialActive": false,
                    "daysRemaining": 0,
                    "hasPaidPlan": true,
                    "planType": "pro",
                    "billingCycle": "monthly",
                    "subscriptionEndDate": "2030-01-01T00:00:00Z"
                }))
                .into_response()
            }),
        )
        .route(SUBSCRIPTION_STATUS_PATH, get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(CHAT_PATH, post(|| async { "not json" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

#[test]
fn url_joins_trimmed_base() {
    let api = HttpApi::new("http://localhost:3000/");
    assert_eq!(api.url(CHAT_PATH), "http://localhost:3000/chat");
}

#[tokio::test]
async fn fetch_status_falls_back_when_subscription_call_fails() {
    let api = HttpApi::new(&spawn_backend().await);

    let refresh = fetch_status(&api, "tok").await.unwrap();

    assert_eq!(refresh.subscription_error, Some(ApiError::Status(500)));
    let subscription = refresh.subscription.unwrap();
    assert_eq!(subscription.plan_type.as_deref(), Some("pro"));
    assert!(subscription.subscription_end_date.is_some());
}

#[tokio::test]
async fn bad_token_surfaces_status() {
    let api = HttpApi::new(&spawn_backend().await);
    assert_eq!(api.trial_status("nope").await, Err(ApiError::Status(401)));
}

#[tokio::test]
async fn non_json_chat_reply_is_a_decode_error() {
    let api = HttpApi::new(&spawn_backend().await);
    let request = ChatRequest { message: "hi".to_owned(), selected_standard: Standard::Gs };
    assert!(matches!(api.ask(&request).await, Err(ApiError::Decode(_))));
}
