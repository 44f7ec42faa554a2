// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitConfig};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::profiles,
    extractors::LEGACY_TOKEN_HEADER,
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    routing::{delete, get, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Knobs for the middleware stack wrapped around the routes.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub rate_limit: RateLimitConfig,
}

impl RouterSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            request_timeout: config.request_timeout(),
            rate_limit: config.rate_limit(),
        }
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            request_timeout: Duration::from_secs(30),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring malformed CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(LEGACY_TOKEN_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}

/// Requests running past `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/profile/me", get(profiles::get_own_profile))
        .route(
            "/api/profile",
            get(profiles::list_profiles)
                .post(profiles::upsert_profile)
                .delete(profiles::delete_account),
        )
        .route("/api/profile/experience", put(profiles::add_experience))
        .route(
            "/api/profile/experience/{exp_id}",
            delete(profiles::remove_experience),
        )
        .route("/api/profile/education", put(profiles::add_education))
        .route(
            "/api/profile/education/{edu_id}",
            delete(profiles::remove_education),
        )
        .route("/api/profile/{profileid}", get(profiles::get_profile_by_id))
        .layer(Extension(state))
        .layer(timeout_layer(settings.request_timeout))
        .layer(cors_layer(&settings.allowed_origins));

    let router = match rate_limit_layer(settings.rate_limit) {
        Some(limiter) => router.layer(limiter),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
