use super::{ProfileQueryService, populate};
use crate::application::{dto::ProfileDto, error::ApplicationResult};

impl ProfileQueryService {
    pub async fn list_profiles(&self) -> ApplicationResult<Vec<ProfileDto>> {
        let profiles = self.profile_repo.list().await?;
        populate::present_many(self.user_repo.as_ref(), profiles).await
    }
}
