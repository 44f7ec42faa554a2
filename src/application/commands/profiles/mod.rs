// src/application/commands/profiles/mod.rs
mod delete;
mod education;
mod entries;
mod experience;
mod service;
mod upsert;

pub use education::{AddEducationCommand, RemoveEducationCommand};
pub use experience::{AddExperienceCommand, RemoveExperienceCommand};
pub use service::ProfileCommandService;
pub use upsert::UpsertProfileCommand;

pub const ACCOUNT_REMOVED: &str = "User has been removed successfully";
