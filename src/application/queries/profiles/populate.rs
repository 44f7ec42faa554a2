// Read-time join of user display fields into profile documents.
use crate::{
    application::{dto::ProfileDto, error::ApplicationResult},
    domain::{
        profile::Profile,
        user::{UserId, UserRepository, UserSummary},
    },
};
use std::collections::{BTreeSet, HashMap};

pub(crate) async fn present_one(
    users: &dyn UserRepository,
    profile: Profile,
) -> ApplicationResult<ProfileDto> {
    let owner = users.find_summary(profile.user_id).await?;
    Ok(ProfileDto::from_parts(profile, owner))
}

/// Joins a batch with one user lookup, preserving the profile order.
pub(crate) async fn present_many(
    users: &dyn UserRepository,
    profiles: Vec<Profile>,
) -> ApplicationResult<Vec<ProfileDto>> {
    if profiles.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<UserId> = profiles
        .iter()
        .map(|p| p.user_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut owners: HashMap<UserId, UserSummary> = users
        .find_summaries(&ids)
        .await?
        .into_iter()
        .map(|summary| (summary.id, summary))
        .collect();

    Ok(profiles
        .into_iter()
        .map(|profile| {
            let owner = owners.remove(&profile.user_id);
            ProfileDto::from_parts(profile, owner)
        })
        .collect())
}
