// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::Duration;
use profile_service::domain::errors::{DomainError, DomainResult};
use profile_service::domain::profile::{
    Profile, ProfileEntriesUpdate, ProfileId, ProfileRepository, ProfileUpsert, UpsertOutcome,
};
use profile_service::domain::user::{UserId, UserRepository, UserSummary};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct ProfileTable {
    next_id: i64,
    rows: BTreeMap<i64, Profile>,
}

/// Profile store keyed like the `profiles` table: unique per user, ordered
/// by id. The whole upsert runs under one lock, so it is atomic.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    table: Mutex<ProfileTable>,
    entry_writes: AtomicUsize,
    stale_reads: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemoryProfileRepository {
    /// Number of successful `update_entries` calls.
    pub fn entry_writes(&self) -> usize {
        self.entry_writes.load(Ordering::SeqCst)
    }

    /// Makes `find_by_user` return a copy older than the stored row, as if
    /// another request wrote in between.
    pub fn serve_stale_reads(&self, enabled: bool) {
        self.stale_reads.store(enabled, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, enabled: bool) {
        self.fail_reads.store(enabled, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.table.lock().await.rows.len()
    }

    pub async fn stored_for(&self, user_id: UserId) -> Option<Profile> {
        let table = self.table.lock().await;
        table.rows.values().find(|p| p.user_id == user_id).cloned()
    }

    fn check_reads(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset by peer".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Profile>> {
        self.check_reads()?;
        let table = self.table.lock().await;
        let found = table.rows.values().find(|p| p.user_id == user_id).cloned();
        if self.stale_reads.load(Ordering::SeqCst) {
            return Ok(found.map(|mut p| {
                p.updated_at -= Duration::seconds(30);
                p
            }));
        }
        Ok(found)
    }

    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        self.check_reads()?;
        let table = self.table.lock().await;
        Ok(table.rows.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Profile>> {
        self.check_reads()?;
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn upsert(&self, upsert: ProfileUpsert) -> DomainResult<UpsertOutcome> {
        let mut table = self.table.lock().await;

        if let Some(existing) = table
            .rows
            .values_mut()
            .find(|p| p.user_id == upsert.user_id)
        {
            upsert.merge_into(existing);
            return Ok(UpsertOutcome {
                profile: existing.clone(),
                created: false,
            });
        }

        table.next_id += 1;
        let key = table.next_id;
        let profile = upsert.create(ProfileId::new(key)?);
        table.rows.insert(key, profile.clone());
        Ok(UpsertOutcome {
            profile,
            created: true,
        })
    }

    async fn update_entries(&self, update: ProfileEntriesUpdate) -> DomainResult<Profile> {
        let mut table = self.table.lock().await;
        let row = table
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))?;

        if row.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "profile was modified concurrently, please retry".into(),
            ));
        }

        if let Some(experience) = update.experience {
            row.experience = experience;
        }
        if let Some(education) = update.education {
            row.education = education;
        }
        row.updated_at = update.updated_at;

        self.entry_writes.fetch_add(1, Ordering::SeqCst);
        Ok(row.clone())
    }

    async fn delete_by_user(&self, user_id: UserId) -> DomainResult<bool> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|_, p| p.user_id != user_id);
        Ok(table.rows.len() < before)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, UserSummary>>,
    fail_deletes: AtomicBool,
}

impl InMemoryUserRepository {
    pub async fn insert(&self, id: i64, name: &str, avatar: Option<&str>, user_type: Option<&str>) {
        let id = UserId::new(id).expect("valid user id");
        self.users.lock().await.insert(
            id,
            UserSummary {
                id,
                name: name.to_string(),
                avatar: avatar.map(str::to_string),
                user_type: user_type.map(str::to_string),
            },
        );
    }

    pub fn fail_deletes(&self, enabled: bool) {
        self.fail_deletes.store(enabled, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_summary(&self, id: UserId) -> DomainResult<Option<UserSummary>> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn find_summaries(&self, ids: &[UserId]) -> DomainResult<Vec<UserSummary>> {
        let users = self.users.lock().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("users table is locked".into()));
        }
        self.users.lock().await.remove(&id);
        Ok(())
    }
}
