// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, UserRepository, UserSummary};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserSummaryRow {
    id: i64,
    name: String,
    avatar: Option<String>,
    user_type: Option<String>,
}

impl TryFrom<UserSummaryRow> for UserSummary {
    type Error = DomainError;

    fn try_from(row: UserSummaryRow) -> Result<Self, Self::Error> {
        Ok(UserSummary {
            id: UserId::new(row.id)?,
            name: row.name,
            avatar: row.avatar,
            user_type: row.user_type,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_summary(&self, id: UserId) -> DomainResult<Option<UserSummary>> {
        let row = sqlx::query_as::<_, UserSummaryRow>(
            "SELECT id, name, avatar, user_type FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UserSummary::try_from).transpose()
    }

    async fn find_summaries(&self, ids: &[UserId]) -> DomainResult<Vec<UserSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().copied().map(i64::from).collect();

        let rows = sqlx::query_as::<_, UserSummaryRow>(
            "SELECT id, name, avatar, user_type FROM users WHERE id = ANY($1)",
        )
        .bind(raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(UserSummary::try_from).collect()
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
