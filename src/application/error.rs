// src/application/error.rs
use crate::domain::{errors::DomainError, validation::Violations};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(Violations),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<Violations> for ApplicationError {
    fn from(value: Violations) -> Self {
        Self::Validation(value)
    }
}

pub const OWN_PROFILE_MISSING: &str = "There is no profile for this user";
pub const PROFILE_NOT_FOUND: &str = "there is no profile for this user";
