use crate::domain::errors::DomainError;

const CNT_PROFILE_USER: &str = "profiles_user_id_fkey";
const CNT_PROFILE_USER_UNIQUE: &str = "profiles_user_id_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PROFILE_USER => DomainError::NotFound("user not found".into()),
                    CNT_PROFILE_USER_UNIQUE => {
                        DomainError::Conflict("profile already exists for this user".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::ColumnDecode { index, source } => {
            DomainError::Persistence(format!("malformed stored document in column {index}: {source}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
