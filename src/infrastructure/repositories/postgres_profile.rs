// src/infrastructure/repositories/postgres_profile.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{
    Education, Experience, Profile, ProfileEntriesUpdate, ProfileId, ProfileRepository,
    ProfileUpsert, UpsertOutcome,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const PROFILE_COLUMNS: &str = "id, user_id, website, location, bio, status, githubusername, \
     skills, links, experience, education, created_at, updated_at";

/// Single-statement create-or-merge keyed by `user_id`. Supplied values
/// overwrite, NULL parameters keep what is stored. `xmax = 0` only holds
/// for a freshly inserted row.
const UPSERT_SQL: &str = "INSERT INTO profiles
        (user_id, website, location, bio, status, githubusername, skills, links, created_at, updated_at)
     VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, ARRAY[]::TEXT[]), COALESCE($8, '[]'::JSONB), $9, $9)
     ON CONFLICT (user_id) DO UPDATE SET
        website = COALESCE($2, profiles.website),
        location = COALESCE($3, profiles.location),
        bio = COALESCE($4, profiles.bio),
        status = COALESCE($5, profiles.status),
        githubusername = COALESCE($6, profiles.githubusername),
        skills = COALESCE($7, profiles.skills),
        links = COALESCE($8, profiles.links),
        updated_at = $9
     RETURNING id, user_id, website, location, bio, status, githubusername,
        skills, links, experience, education, created_at, updated_at,
        (xmax = 0) AS inserted";

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: ProfileId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM profiles WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    user_id: i64,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    status: Option<String>,
    githubusername: Option<String>,
    skills: Vec<String>,
    links: Json<Vec<Value>>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    profile: ProfileRow,
    inserted: bool,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: ProfileId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            website: row.website,
            location: row.location,
            bio: row.bio,
            status: row.status,
            githubusername: row.githubusername,
            skills: row.skills,
            links: row.links.0,
            experience: row.experience.0,
            education: row.education.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Profile::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Profile::try_from).collect()
    }

    async fn upsert(&self, upsert: ProfileUpsert) -> DomainResult<UpsertOutcome> {
        let ProfileUpsert {
            user_id,
            website,
            location,
            bio,
            status,
            githubusername,
            skills,
            links,
            now,
        } = upsert;

        let row = sqlx::query_as::<_, UpsertRow>(UPSERT_SQL)
            .bind(i64::from(user_id))
            .bind(website)
            .bind(location)
            .bind(bio)
            .bind(status)
            .bind(githubusername)
            .bind(skills)
            .bind(links.map(Json))
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(UpsertOutcome {
            created: row.inserted,
            profile: Profile::try_from(row.profile)?,
        })
    }

    async fn update_entries(&self, update: ProfileEntriesUpdate) -> DomainResult<Profile> {
        let ProfileEntriesUpdate {
            id,
            experience,
            education,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE profiles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(experience) = experience {
            builder.push(", experience = ");
            builder.push_bind(Json(experience));
        }

        if let Some(education) = education {
            builder.push(", education = ");
            builder.push_bind(Json(education));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(PROFILE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ProfileRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match maybe_row {
            Some(row) => Profile::try_from(row),
            None if self.exists(id).await? => Err(DomainError::Conflict(
                "profile was modified concurrently, please retry".into(),
            )),
            None => Err(DomainError::NotFound("profile not found".into())),
        }
    }

    async fn delete_by_user(&self, user_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
