// tests/support/helpers.rs
use super::mocks::{
    InMemoryProfileRepository, InMemoryUserRepository, SequentialIds, SteppingClock,
    StaticTokenManager,
};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use profile_service::application::services::ApplicationServices;
use profile_service::config::RateLimitConfig;
use profile_service::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Application wired to in-memory adapters, with handles kept so tests can
/// inspect or sabotage the stores.
pub struct TestContext {
    pub profiles: Arc<InMemoryProfileRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub ids: Arc<SequentialIds>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    /// Seeds users 1 (Ada) and 2 (Grace).
    pub async fn new() -> Self {
        let profiles = Arc::new(InMemoryProfileRepository::default());
        let users = Arc::new(InMemoryUserRepository::default());
        let ids = Arc::new(SequentialIds::default());

        users
            .insert(1, "Ada Lovelace", Some("https://avatars.test/ada.png"), Some("developer"))
            .await;
        users
            .insert(2, "Grace Hopper", Some("https://avatars.test/grace.png"), None)
            .await;

        let services = Arc::new(ApplicationServices::new(
            profiles.clone(),
            users.clone(),
            Arc::new(StaticTokenManager),
            Arc::new(SteppingClock::default()),
            ids.clone(),
        ));

        Self {
            profiles,
            users,
            ids,
            services,
        }
    }

    pub fn router(&self) -> Router {
        let settings = RouterSettings {
            rate_limit: RateLimitConfig {
                enabled: false,
                ..RateLimitConfig::default()
            },
            ..RouterSettings::default()
        };
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            &settings,
        )
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or_else(|err| {
            panic!(
                "expected JSON body, got {:?}: {err}",
                String::from_utf8_lossy(&self.bytes)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

pub enum Auth<'a> {
    None,
    Bearer(&'a str),
    Legacy(&'a str),
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    auth: Auth<'_>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    builder = match auth {
        Auth::None => builder,
        Auth::Bearer(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        Auth::Legacy(token) => builder.header("x-auth-token", token),
    };

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec();

    TestResponse {
        status,
        content_type,
        bytes,
    }
}

/// Asserts the `{"msg": ...}` error contract.
pub fn assert_msg(response: &TestResponse, status: StatusCode, msg: &str) {
    assert_eq!(response.status, status, "body: {}", response.text());
    assert!(
        response.content_type.starts_with("application/json"),
        "unexpected content-type: {}",
        response.content_type
    );
    assert_eq!(response.json()["msg"], msg);
}

/// Params reported in a validation error body, in order.
pub fn violation_params(response: &TestResponse) -> Vec<String> {
    response.json()["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["param"].as_str().unwrap_or_default().to_string())
        .collect()
}
