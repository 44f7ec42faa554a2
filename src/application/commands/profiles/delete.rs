// src/application/commands/profiles/delete.rs
use super::{ACCOUNT_REMOVED, ProfileCommandService};
use crate::application::{
    dto::{AckDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl ProfileCommandService {
    /// Removes the caller's profile and then the caller's user record.
    ///
    /// The two deletions are independent store calls. When the second one
    /// fails the profile stays deleted and the error is returned.
    pub async fn delete_account(&self, actor: &AuthenticatedUser) -> ApplicationResult<AckDto> {
        let profile_removed = self.profile_repo.delete_by_user(actor.id).await?;

        if let Err(err) = self.user_repo.delete(actor.id).await {
            tracing::error!(
                user_id = %actor.id,
                profile_removed,
                error = %err,
                "user deletion failed after profile removal"
            );
            return Err(err.into());
        }

        tracing::info!(user_id = %actor.id, profile_removed, "account removed");
        Ok(AckDto::new(ACCOUNT_REMOVED))
    }
}
