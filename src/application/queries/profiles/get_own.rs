use super::{ProfileQueryService, populate};
use crate::application::{
    dto::{AuthenticatedUser, ProfileDto},
    error::{ApplicationError, ApplicationResult, OWN_PROFILE_MISSING},
};

impl ProfileQueryService {
    pub async fn get_own_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<ProfileDto> {
        let profile = self
            .profile_repo
            .find_by_user(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(OWN_PROFILE_MISSING))?;

        populate::present_one(self.user_repo.as_ref(), profile).await
    }
}
