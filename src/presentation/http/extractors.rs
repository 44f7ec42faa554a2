// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::validation::{FieldViolation, Violations},
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{HeaderMap, request::Parts},
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::HttpError;

/// Header accepted alongside `Authorization: Bearer` for older clients.
pub const LEGACY_TOKEN_HEADER: &str = "x-auth-token";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(header) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }

    headers
        .get(LEGACY_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let token = token_from_headers(&parts.headers).ok_or_else(HttpError::missing_token)?;

        let user = app_state
            .services
            .authenticate(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

/// JSON request body that always answers inside the error contract.
///
/// A missing body, or one that is not a JSON object, decodes as
/// `T::default()` so the usual required-field checks report what is missing.
/// Fields holding the wrong JSON type become 400 validation violations.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        decode_body(&bytes)
            .map(Self)
            .map_err(|violations| HttpError::from_error(violations.into()).into_response())
    }
}

fn decode_body<T>(bytes: &[u8]) -> Result<T, Violations>
where
    T: DeserializeOwned + Default,
{
    let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(bytes) else {
        return Ok(T::default());
    };

    serde_json::from_value(Value::Object(fields.clone()))
        .map_err(|err| invalid_fields::<T>(&fields, &err))
}

/// Re-decodes each field on its own to name the ones that broke decoding.
fn invalid_fields<T>(fields: &Map<String, Value>, err: &serde_json::Error) -> Violations
where
    T: DeserializeOwned + Default,
{
    let mut violations = Violations::new();
    for (name, value) in fields {
        let single = Map::from_iter([(name.clone(), value.clone())]);
        if serde_json::from_value::<T>(Value::Object(single)).is_err() {
            violations.push(FieldViolation::body(
                name.as_str(),
                format!("{name} has an invalid value"),
            ));
        }
    }

    if violations.is_empty() {
        tracing::debug!(error = %err, "request body rejected as a whole");
        violations.push(FieldViolation::body("body", "request body is invalid"));
    }
    violations
}
