use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::{errors::DomainError, validation::FieldViolation};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

const SERVER_ERROR: &str = "Server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ErrorBody,
}

#[derive(Debug)]
enum ErrorBody {
    Message(String),
    Violations(Vec<FieldViolation>),
    ServerError,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(violations) => Self {
                status: StatusCode::BAD_REQUEST,
                body: ErrorBody::Violations(violations.into_inner()),
            },
            ApplicationError::NotFound(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
            ApplicationError::Unauthorized(msg) => {
                tracing::debug!(reason = %msg, "rejecting unauthenticated request");
                Self::message(StatusCode::UNAUTHORIZED, "Token is not valid".to_string())
            }
            ApplicationError::Infrastructure(msg) => Self::server_error(&msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    /// 401 for requests that carry no credentials at all.
    pub fn missing_token() -> Self {
        Self::message(
            StatusCode::UNAUTHORIZED,
            "No token, authorization denied".to_string(),
        )
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
            DomainError::Conflict(msg) => Self::message(StatusCode::CONFLICT, msg),
            DomainError::Persistence(msg) => Self::server_error(&msg),
        }
    }

    fn message(status: StatusCode, msg: String) -> Self {
        Self {
            status,
            body: ErrorBody::Message(msg),
        }
    }

    fn server_error(cause: &str) -> Self {
        tracing::error!(error = %cause, "request failed with a server error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody::ServerError,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.body {
            ErrorBody::Message(msg) => (self.status, Json(MessageResponse { msg })).into_response(),
            ErrorBody::Violations(errors) => {
                let errors = errors.into_iter().map(FieldErrorResponse::from).collect();
                (self.status, Json(ValidationErrorResponse { errors })).into_response()
            }
            ErrorBody::ServerError => (self.status, SERVER_ERROR).into_response(),
        }
    }
}

/// `{"msg": ...}` body used for not-found, auth and conflict failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorResponse {
    pub msg: String,
    pub param: String,
    pub location: String,
}

impl From<FieldViolation> for FieldErrorResponse {
    fn from(v: FieldViolation) -> Self {
        Self {
            msg: v.msg,
            param: v.param,
            location: v.location.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldErrorResponse>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
