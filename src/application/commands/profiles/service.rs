// src/application/commands/profiles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult, OWN_PROFILE_MISSING},
        ports::{time::Clock, util::EntryIdGenerator},
        queries::profiles::populate,
    },
    domain::{
        profile::{Profile, ProfileEntriesUpdate, ProfileRepository},
        user::UserRepository,
    },
};

pub struct ProfileCommandService {
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) id_generator: Arc<dyn EntryIdGenerator>,
}

impl ProfileCommandService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn EntryIdGenerator>,
    ) -> Self {
        Self {
            profile_repo,
            user_repo,
            clock,
            id_generator,
        }
    }

    pub(super) async fn load_own(&self, actor: &AuthenticatedUser) -> ApplicationResult<Profile> {
        self.profile_repo
            .find_by_user(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(OWN_PROFILE_MISSING))
    }

    pub(super) async fn persist_entries(
        &self,
        update: ProfileEntriesUpdate,
    ) -> ApplicationResult<ProfileDto> {
        let saved = self.profile_repo.update_entries(update).await?;
        self.present(saved).await
    }

    pub(super) async fn present(&self, profile: Profile) -> ApplicationResult<ProfileDto> {
        populate::present_one(self.user_repo.as_ref(), profile).await
    }
}
