// src/application/ports/util.rs
use crate::domain::profile::EntryId;

/// Source of identities for new experience and education entries.
pub trait EntryIdGenerator: Send + Sync {
    fn next_id(&self) -> EntryId;
}
