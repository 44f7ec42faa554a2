use crate::domain::profile::{Education, Experience, Profile};
use crate::domain::user::UserSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// The `user` object embedded in profile responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileOwnerDto {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
}

impl From<UserSummary> for ProfileOwnerDto {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.into(),
            name: summary.name,
            avatar: summary.avatar,
            user_type: summary.user_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExperienceDto {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Experience> for ExperienceDto {
    fn from(entry: Experience) -> Self {
        Self {
            id: entry.id.as_uuid(),
            title: entry.title,
            company: entry.company,
            location: entry.location,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EducationDto {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Education> for EducationDto {
    fn from(entry: Education) -> Self {
        Self {
            id: entry.id.as_uuid(),
            school: entry.school,
            degree: entry.degree,
            fieldofstudy: entry.fieldofstudy,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i64,
    /// `null` when the owning user no longer exists.
    pub user: Option<ProfileOwnerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    #[schema(value_type = Vec<Object>)]
    pub links: Vec<Value>,
    pub experience: Vec<ExperienceDto>,
    pub education: Vec<EducationDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileDto {
    /// Builds the response document, joining the owner's display fields.
    pub fn from_parts(profile: Profile, owner: Option<UserSummary>) -> Self {
        Self {
            id: profile.id.into(),
            user: owner.map(Into::into),
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            status: profile.status,
            githubusername: profile.githubusername,
            skills: profile.skills,
            links: profile.links,
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Plain acknowledgement body, e.g. after deleting an account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AckDto {
    pub msg: String,
}

impl AckDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
