// src/application/commands/profiles/education.rs
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
        profile::{Education, EntryId, ProfileEntriesUpdate},
        validation::Violations,
    },
};

#[derive(Debug, Clone, Default)]
pub struct AddEducationCommand {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub fieldofstudy: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl AddEducationCommand {
    pub fn into_entry(self, ids: &dyn EntryIdGenerator) -> Result<Education, Violations> {
        let mut violations = Violations::new();
        let school = required_text(&mut violations, "school", self.school, "school is required");
        let degree = required_text(&mut violations, "degree", self.degree, "degree is required");
        let from = required_date(&mut violations, "from", self.from.as_deref(), "from is required");
        let fieldofstudy = required_text(
            &mut violations,
            "fieldofstudy",
            self.fieldofstudy,
            "fieldofstudy is required",
        );
        let to = date_field(&mut violations, "to", self.to.as_deref());

        let (Some(school), Some(degree), Some(fieldofstudy), Some(from)) =
            (school, degree, fieldofstudy, from)
        else {
            return Err(violations);
        };
        violations.into_result()?;

        Ok(Education {
            id: ids.next_id(),
            school,
            degree,
            fieldofstudy,
            from,
            to,
            current: self.current.unwrap_or(false),
            description: optional_text(self.description),
        })
    }
}

pub struct RemoveEducationCommand {
    pub entry_id: String,
}

impl ProfileCommandService {
    pub async fn add_education(
        &self,
        actor: &AuthenticatedUser,
        command: AddEducationCommand,
    ) -> ApplicationResult<ProfileDto> {
        let entry = command.into_entry(self.id_generator.as_ref())?;
        let mut profile = self.load_own(actor).await?;

        let original_updated_at = profile.updated_at;
        let now = self.clock.now();
        let entry_id = entry.id;
        profile.add_education(entry, now);

        let mut update =
            ProfileEntriesUpdate::new(profile.id, original_updated_at).with_education(profile.education);
        update.set_updated_at(now);

        tracing::debug!(user_id = %actor.id, entry_id = %entry_id, "adding education entry");
        self.persist_entries(update).await
    }

    pub async fn remove_education(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveEducationCommand,
    ) -> ApplicationResult<ProfileDto> {
        let mut profile = self.load_own(actor).await?;

        let original_updated_at = profile.updated_at;
        let now = self.clock.now();
        let removed =
            EntryId::parse(&command.entry_id).and_then(|id| profile.remove_education(id, now));

        if removed.is_none() {
            tracing::debug!(
                user_id = %actor.id,
                entry_id = %command.entry_id,
                "no education entry matched, nothing removed"
            );
            return self.present(profile).await;
        }

        let mut update =
            ProfileEntriesUpdate::new(profile.id, original_updated_at).with_education(profile.education);
        update.set_updated_at(now);
        self.persist_entries(update).await
    }
}
