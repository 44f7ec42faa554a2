use crate::domain::errors::DomainResult;
use crate::domain::profile::entity::{Profile, ProfileEntriesUpdate, ProfileUpsert};
use crate::domain::profile::value_objects::ProfileId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    pub profile: Profile,
    pub created: bool,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Profile>>;

    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>>;

    async fn list(&self) -> DomainResult<Vec<Profile>>;

    /// Creates the user's profile or merges the supplied fields onto the
    /// existing one in a single atomic step.
    async fn upsert(&self, upsert: ProfileUpsert) -> DomainResult<UpsertOutcome>;

    /// Replaces sub-lists. Fails with `Conflict` when the profile changed
    /// since `original_updated_at`.
    async fn update_entries(&self, update: ProfileEntriesUpdate) -> DomainResult<Profile>;

    /// Returns whether a profile was removed.
    async fn delete_by_user(&self, user_id: UserId) -> DomainResult<bool>;
}
