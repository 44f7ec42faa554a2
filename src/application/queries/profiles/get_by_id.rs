use super::{ProfileQueryService, populate};
use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult, PROFILE_NOT_FOUND},
    },
    domain::profile::ProfileId,
};

pub struct GetProfileByIdQuery {
    /// Raw identifier as received; malformed values are reported as not found.
    pub profile_id: String,
}

impl ProfileQueryService {
    pub async fn get_profile_by_id(&self, query: GetProfileByIdQuery) -> ApplicationResult<ProfileDto> {
        let Some(id) = ProfileId::parse(&query.profile_id) else {
            tracing::debug!(profile_id = %query.profile_id, "malformed profile id");
            return Err(ApplicationError::not_found(PROFILE_NOT_FOUND));
        };

        let profile = self
            .profile_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(PROFILE_NOT_FOUND))?;

        populate::present_one(self.user_repo.as_ref(), profile).await
    }
}
