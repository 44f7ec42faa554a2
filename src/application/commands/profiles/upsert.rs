// src/application/commands/profiles/upsert.rs
use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::ApplicationResult,
    },
    domain::{
        profile::{ProfileUpsert, parse_skills},
        validation::Violations,
    },
};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct UpsertProfileCommand {
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    /// Comma separated list, e.g. `"rust, sql, docker"`.
    pub skills: Option<String>,
    pub links: Option<Vec<Value>>,
}

impl UpsertProfileCommand {
    pub fn validate(&self) -> Result<(), Violations> {
        let mut violations = Violations::new();
        violations.require(
            "githubusername",
            self.githubusername.as_deref(),
            "Github username is required",
        );
        violations.into_result()
    }
}

impl ProfileCommandService {
    pub async fn upsert_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpsertProfileCommand,
    ) -> ApplicationResult<ProfileDto> {
        command.validate()?;

        let skills = command
            .skills
            .as_deref()
            .filter(|csv| !csv.trim().is_empty())
            .map(parse_skills);

        let upsert = ProfileUpsert::new(actor.id, self.clock.now())
            .with_website(command.website)
            .with_location(command.location)
            .with_bio(command.bio)
            .with_status(command.status)
            .with_githubusername(command.githubusername)
            .with_skills(skills)
            .with_links(command.links);

        let outcome = self.profile_repo.upsert(upsert).await?;
        if outcome.created {
            tracing::info!(user_id = %actor.id, profile_id = %outcome.profile.id, "profile created");
        } else {
            tracing::debug!(user_id = %actor.id, profile_id = %outcome.profile.id, "profile updated");
        }

        self.present(outcome.profile).await
    }
}
