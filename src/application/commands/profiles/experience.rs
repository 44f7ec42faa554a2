// src/application/commands/profiles/experience.rs
use super::{
    ProfileCommandService,
    entries::{date_field, optional_text, required_date, required_text},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::ApplicationResult,
        ports::util::EntryIdGenerator,
    },
    domain::{
        profile::{EntryId, Experience, ProfileEntriesUpdate},
        validation::Violations,
    },
};

#[derive(Debug, Clone, Default)]
pub struct AddExperienceCommand {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl AddExperienceCommand {
    /// Checks every rule and only then draws an id for the new entry.
    pub fn into_entry(self, ids: &dyn EntryIdGenerator) -> Result<Experience, Violations> {
        let mut violations = Violations::new();
        let title = required_text(&mut violations, "title", self.title, "title is required");
        let company = required_text(
            &mut violations,
            "company",
            self.company,
            "company is required",
        );
        let from = required_date(&mut violations, "from", self.from.as_deref(), "from is required");
        let to = date_field(&mut violations, "to", self.to.as_deref());

        let (Some(title), Some(company), Some(from)) = (title, company, from) else {
            return Err(violations);
        };
        violations.into_result()?;

        Ok(Experience {
            id: ids.next_id(),
            title,
            company,
            location: optional_text(self.location),
            from,
            to,
            current: self.current.unwrap_or(false),
            description: optional_text(self.description),
        })
    }
}

pub struct RemoveExperienceCommand {
    pub entry_id: String,
}

impl ProfileCommandService {
    pub async fn add_experience(
        &self,
        actor: &AuthenticatedUser,
        command: AddExperienceCommand,
    ) -> ApplicationResult<ProfileDto> {
        let entry = command.into_entry(self.id_generator.as_ref())?;
        let mut profile = self.load_own(actor).await?;

        let original_updated_at = profile.updated_at;
        let now = self.clock.now();
        let entry_id = entry.id;
        profile.add_experience(entry, now);

        let mut update =
            ProfileEntriesUpdate::new(profile.id, original_updated_at).with_experience(profile.experience);
        update.set_updated_at(now);

        tracing::debug!(user_id = %actor.id, entry_id = %entry_id, "adding experience entry");
        self.persist_entries(update).await
    }

    pub async fn remove_experience(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveExperienceCommand,
    ) -> ApplicationResult<ProfileDto> {
        let mut profile = self.load_own(actor).await?;

        let original_updated_at = profile.updated_at;
        let now = self.clock.now();
        let removed = EntryId::parse(&command.entry_id)
            .and_then(|id| profile.remove_experience(id, now));

        if removed.is_none() {
            tracing::debug!(
                user_id = %actor.id,
                entry_id = %command.entry_id,
                "no experience entry matched, nothing removed"
            );
            return self.present(profile).await;
        }

        let mut update =
            ProfileEntriesUpdate::new(profile.id, original_updated_at).with_experience(profile.experience);
        update.set_updated_at(now);
        self.persist_entries(update).await
    }
}
