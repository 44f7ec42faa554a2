// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::profiles::ProfileCommandService,
        dto::AuthenticatedUser,
        ports::{security::TokenManager, time::Clock, util::EntryIdGenerator},
        queries::profiles::ProfileQueryService,
    },
    domain::{profile::ProfileRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        user_repo: Arc<dyn UserRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn EntryIdGenerator>,
    ) -> Self {
        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
            Arc::clone(&id_generator),
        ));

        let profile_queries = Arc::new(ProfileQueryService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&user_repo),
        ));

        Self {
            profile_commands,
            profile_queries,
            token_manager,
        }
    }

    /// Verifies a raw bearer token and returns the caller it belongs to.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
