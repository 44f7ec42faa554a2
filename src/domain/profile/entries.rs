// src/domain/profile/entries.rs
use crate::domain::profile::value_objects::EntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Common behaviour of the embedded sub-list entries.
pub trait ProfileEntry {
    fn entry_id(&self) -> EntryId;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProfileEntry for Experience {
    fn entry_id(&self) -> EntryId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: DateTime<Utc>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProfileEntry for Education {
    fn entry_id(&self) -> EntryId {
        self.id
    }
}

/// Inserts `entry` at the head of the list.
pub(crate) fn prepend<T>(list: &mut Vec<T>, entry: T) {
    list.insert(0, entry);
}

/// Removes the first entry carrying `id`. Leaves the list untouched when
/// nothing matches.
pub(crate) fn remove_first<T: ProfileEntry>(list: &mut Vec<T>, id: EntryId) -> Option<T> {
    let position = list.iter().position(|entry| entry.entry_id() == id)?;
    Some(list.remove(position))
}
