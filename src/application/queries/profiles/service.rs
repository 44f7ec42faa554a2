use std::sync::Arc;

use crate::domain::{profile::ProfileRepository, user::UserRepository};

pub struct ProfileQueryService {
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ProfileQueryService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            profile_repo,
            user_repo,
        }
    }
}
