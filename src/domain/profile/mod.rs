// src/domain/profile/mod.rs
pub mod entity;
pub mod entries;
pub mod repository;
pub mod value_objects;

pub use entity::{Profile, ProfileEntriesUpdate, ProfileUpsert};
pub use entries::{Education, Experience, ProfileEntry};
pub use repository::{ProfileRepository, UpsertOutcome};
pub use value_objects::{EntryId, ProfileId, parse_entry_date, parse_skills};
