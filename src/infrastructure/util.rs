use crate::application::ports::util::EntryIdGenerator;
use crate::domain::profile::EntryId;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct UuidEntryIdGenerator;

impl EntryIdGenerator for UuidEntryIdGenerator {
    fn next_id(&self) -> EntryId {
        EntryId::new(Uuid::new_v4())
    }
}
