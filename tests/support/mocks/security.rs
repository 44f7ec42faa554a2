// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use profile_service::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use profile_service::domain::user::UserId;

pub const USER_ONE_TOKEN: &str = "user-1-token";
pub const USER_TWO_TOKEN: &str = "user-2-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/// Token manager with a fixed set of known tokens.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenManager;

pub fn authenticated(id: i64) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("valid user id"),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("user-{}-token", subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            USER_ONE_TOKEN => Ok(authenticated(1)),
            USER_TWO_TOKEN => Ok(authenticated(2)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
