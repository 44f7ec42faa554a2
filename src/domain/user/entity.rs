// src/domain/user/entity.rs
use crate::domain::user::value_objects::UserId;

/// Display fields of a user that are joined into profile responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<String>,
    pub user_type: Option<String>,
}
