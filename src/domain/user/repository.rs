use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::UserSummary, value_objects::UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_summary(&self, id: UserId) -> DomainResult<Option<UserSummary>>;

    /// Summaries for every id that exists; unknown ids are skipped.
    async fn find_summaries(&self, ids: &[UserId]) -> DomainResult<Vec<UserSummary>>;

    /// Removes the user. Deleting an unknown user is not an error.
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
