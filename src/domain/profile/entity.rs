// src/domain/profile/entity.rs
use crate::domain::profile::entries::{self, Education, Experience};
use crate::domain::profile::value_objects::{EntryId, ProfileId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub links: Vec<Value>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn add_experience(&mut self, entry: Experience, now: DateTime<Utc>) {
        entries::prepend(&mut self.experience, entry);
        self.updated_at = now;
    }

    pub fn remove_experience(&mut self, id: EntryId, now: DateTime<Utc>) -> Option<Experience> {
        let removed = entries::remove_first(&mut self.experience, id)?;
        self.updated_at = now;
        Some(removed)
    }

    pub fn add_education(&mut self, entry: Education, now: DateTime<Utc>) {
        entries::prepend(&mut self.education, entry);
        self.updated_at = now;
    }

    pub fn remove_education(&mut self, id: EntryId, now: DateTime<Utc>) -> Option<Education> {
        let removed = entries::remove_first(&mut self.education, id)?;
        self.updated_at = now;
        Some(removed)
    }
}

/// Partial profile document written by the create-or-update flow. Only
/// `Some` fields reach the store; blank strings are treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpsert {
    pub user_id: UserId,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<Vec<String>>,
    pub links: Option<Vec<Value>>,
    pub now: DateTime<Utc>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProfileUpsert {
    pub fn new(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            website: None,
            location: None,
            bio: None,
            status: None,
            githubusername: None,
            skills: None,
            links: None,
            now,
        }
    }

    pub fn with_website(mut self, website: Option<String>) -> Self {
        self.website = non_blank(website);
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = non_blank(location);
        self
    }

    pub fn with_bio(mut self, bio: Option<String>) -> Self {
        self.bio = non_blank(bio);
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = non_blank(status);
        self
    }

    pub fn with_githubusername(mut self, githubusername: Option<String>) -> Self {
        self.githubusername = non_blank(githubusername);
        self
    }

    pub fn with_skills(mut self, skills: Option<Vec<String>>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_links(mut self, links: Option<Vec<Value>>) -> Self {
        self.links = links;
        self
    }

    /// Document created when the user has no profile yet.
    pub fn create(&self, id: ProfileId) -> Profile {
        Profile {
            id,
            user_id: self.user_id,
            website: self.website.clone(),
            location: self.location.clone(),
            bio: self.bio.clone(),
            status: self.status.clone(),
            githubusername: self.githubusername.clone(),
            skills: self.skills.clone().unwrap_or_default(),
            links: self.links.clone().unwrap_or_default(),
            experience: Vec::new(),
            education: Vec::new(),
            created_at: self.now,
            updated_at: self.now,
        }
    }

    /// Overlays the supplied fields onto an existing document.
    pub fn merge_into(&self, profile: &mut Profile) {
        fn overlay<T>(target: &mut T, source: Option<T>) {
            if let Some(value) = source {
                *target = value;
            }
        }

        overlay(&mut profile.website, self.website.clone().map(Some));
        overlay(&mut profile.location, self.location.clone().map(Some));
        overlay(&mut profile.bio, self.bio.clone().map(Some));
        overlay(&mut profile.status, self.status.clone().map(Some));
        overlay(&mut profile.githubusername, self.githubusername.clone().map(Some));
        overlay(&mut profile.skills, self.skills.clone());
        overlay(&mut profile.links, self.links.clone());
        profile.updated_at = self.now;
    }
}

/// Replacement of one or both sub-lists, guarded by the `updated_at` value
/// observed when the profile was read.
#[derive(Debug, Clone)]
pub struct ProfileEntriesUpdate {
    pub id: ProfileId,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileEntriesUpdate {
    pub fn new(id: ProfileId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            experience: None,
            education: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_experience(mut self, experience: Vec<Experience>) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn with_education(mut self, education: Vec<Education>) -> Self {
        self.education = Some(education);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;
    use uuid::Uuid;

    fn sample_profile() -> Profile {
        ProfileUpsert::new(UserId::new(1).unwrap(), Utc::now())
            .with_githubusername(Some("octocat".into()))
            .create(ProfileId::new(1).unwrap())
    }

    fn experience(title: &str) -> Experience {
        Experience {
            id: EntryId::new(Uuid::new_v4()),
            title: title.into(),
            company: "Acme".into(),
            location: None,
            from: Utc::now(),
            to: None,
            current: true,
            description: None,
        }
    }

    fn education(school: &str) -> Education {
        Education {
            id: EntryId::new(Uuid::new_v4()),
            school: school.into(),
            degree: "BSc".into(),
            fieldofstudy: "CS".into(),
            from: Utc::now(),
            to: None,
            current: false,
            description: None,
        }
    }

    #[test]
    fn experience_is_most_recent_first() {
        let mut profile = sample_profile();
        let first = experience("first");
        let second = experience("second");
        profile.add_experience(first.clone(), Utc::now());
        profile.add_experience(second.clone(), Utc::now());
        assert_eq!(profile.experience, vec![second, first]);
    }

    #[test]
    fn removing_unknown_experience_is_a_no_op() {
        let mut profile = sample_profile();
        profile.add_experience(experience("a"), Utc::now());
        profile.add_experience(experience("b"), Utc::now());
        let before = profile.clone();

        let removed = profile.remove_experience(EntryId::new(Uuid::new_v4()), Utc::now());

        assert!(removed.is_none());
        assert_eq!(profile, before);
    }

    #[test]
    fn removing_experience_drops_only_the_match() {
        let mut profile = sample_profile();
        let keep_last = experience("oldest");
        let target = experience("middle");
        let keep_first = experience("newest");
        profile.add_experience(keep_last.clone(), Utc::now());
        profile.add_experience(target.clone(), Utc::now());
        profile.add_experience(keep_first.clone(), Utc::now());

        let later = Utc::now() + Duration::seconds(5);
        let removed = profile.remove_experience(target.id, later);

        assert_eq!(removed, Some(target));
        assert_eq!(profile.experience, vec![keep_first, keep_last]);
        assert_eq!(profile.updated_at, later);
    }

    #[test]
    fn education_behaves_like_experience() {
        let mut profile = sample_profile();
        let a = education("MIT");
        let b = education("ETH");
        profile.add_education(a.clone(), Utc::now());
        profile.add_education(b.clone(), Utc::now());
        assert_eq!(profile.education, vec![b.clone(), a.clone()]);

        assert!(profile.remove_education(EntryId::new(Uuid::new_v4()), Utc::now()).is_none());
        assert_eq!(profile.remove_education(a.id, Utc::now()), Some(a));
        assert_eq!(profile.education, vec![b]);
    }

    #[test]
    fn create_leaves_unsupplied_fields_unset() {
        let profile = sample_profile();
        assert_eq!(profile.githubusername.as_deref(), Some("octocat"));
        assert!(profile.website.is_none());
        assert!(profile.bio.is_none());
        assert!(profile.skills.is_empty());
        assert!(profile.links.is_empty());
    }

    #[test]
    fn blank_strings_are_not_written() {
        let upsert = ProfileUpsert::new(UserId::new(1).unwrap(), Utc::now())
            .with_website(Some("  ".into()))
            .with_bio(Some(String::new()));
        assert!(upsert.website.is_none());
        assert!(upsert.bio.is_none());
    }

    #[test]
    fn merge_keeps_fields_that_were_not_supplied() {
        let mut profile = ProfileUpsert::new(UserId::new(1).unwrap(), Utc::now())
            .with_githubusername(Some("octocat".into()))
            .with_bio(Some("first bio".into()))
            .with_skills(Some(vec!["rust".into()]))
            .with_links(Some(vec![json!({"github": "https://github.com/octocat"})]))
            .create(ProfileId::new(3).unwrap());

        let later = Utc::now() + Duration::seconds(30);
        ProfileUpsert::new(UserId::new(1).unwrap(), later)
            .with_githubusername(Some("octo2".into()))
            .with_status(Some("Senior".into()))
            .merge_into(&mut profile);

        assert_eq!(profile.githubusername.as_deref(), Some("octo2"));
        assert_eq!(profile.status.as_deref(), Some("Senior"));
        assert_eq!(profile.bio.as_deref(), Some("first bio"));
        assert_eq!(profile.skills, vec!["rust".to_string()]);
        assert_eq!(profile.links.len(), 1);
        assert_eq!(profile.updated_at, later);
    }

    #[test]
    fn merge_overwrites_every_supplied_field() {
        let mut profile = sample_profile();
        let later = Utc::now() + Duration::seconds(10);
        ProfileUpsert::new(UserId::new(1).unwrap(), later)
            .with_website(Some("https://octo.dev".into()))
            .with_location(Some("Berlin".into()))
            .with_bio(Some("bio".into()))
            .with_status(Some("Lead".into()))
            .with_githubusername(Some("octo3".into()))
            .with_skills(Some(vec!["go".into(), "sql".into()]))
            .with_links(Some(vec![json!({"blog": "https://octo.dev/blog"})]))
            .merge_into(&mut profile);

        assert_eq!(profile.website.as_deref(), Some("https://octo.dev"));
        assert_eq!(profile.location.as_deref(), Some("Berlin"));
        assert_eq!(profile.bio.as_deref(), Some("bio"));
        assert_eq!(profile.status.as_deref(), Some("Lead"));
        assert_eq!(profile.githubusername.as_deref(), Some("octo3"));
        assert_eq!(profile.skills, vec!["go".to_string(), "sql".to_string()]);
        assert_eq!(profile.links, vec![json!({"blog": "https://octo.dev/blog"})]);
    }
}
