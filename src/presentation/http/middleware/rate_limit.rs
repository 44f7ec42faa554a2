// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitConfig;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type ProfileRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter. Returns `None` when limiting is switched off or
/// the configured quota cannot be represented.
///
/// The key is taken from forwarding headers first and the peer address
/// second, so the server must be started with connect info.
pub fn rate_limit_layer(settings: RateLimitConfig) -> Option<ProfileRateLimitLayer> {
    if !settings.enabled {
        return None;
    }

    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(settings.per_second);
    builder.burst_size(settings.burst);

    match builder.key_extractor(SmartIpKeyExtractor).finish() {
        Some(config) => Some(GovernorLayer::new(config)),
        None => {
            tracing::warn!(
                per_second = settings.per_second,
                burst = settings.burst,
                "invalid rate limit quota, limiter disabled"
            );
            None
        }
    }
}
