// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_profile;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_profile::PostgresProfileRepository;
pub use postgres_user::PostgresUserRepository;
