// tests/support/mocks/util.rs
use profile_service::application::ports::util::EntryIdGenerator;
use profile_service::domain::profile::EntryId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Hands out `00000000-0000-0000-0000-000000000001`, `...002`, and so on.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

pub fn entry_id(n: u64) -> EntryId {
    EntryId::new(Uuid::from_u128(n as u128))
}

impl EntryIdGenerator for SequentialIds {
    fn next_id(&self) -> EntryId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        entry_id(n)
    }
}
