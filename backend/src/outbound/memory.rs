//! Process-local store implementing both repository ports.
//!
//! Used when no database URL is configured and throughout the test suites.
//! Records live for the lifetime of the process.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    PunchPersistenceError, PunchRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{AncestorKey, Punch, RecordId, User};

#[derive(Debug)]
struct Stored<T> {
    ancestor: AncestorKey,
    id: RecordId,
    record: T,
}

#[derive(Debug, Default)]
struct Records {
    punches: Vec<Stored<Punch>>,
    users: Vec<Stored<User>>,
}

/// In-memory punch and user store.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use timecard::domain::ports::{PunchRepository, UserRepository};
/// use timecard::outbound::memory::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::default());
/// let _punches: Arc<dyn PunchRepository> = store.clone();
/// let _users: Arc<dyn UserRepository> = store;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Records>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers of every stored punch, in insertion order.
    ///
    /// Lets tests assert that a request wrote nothing.
    pub fn punch_ids(&self) -> Vec<RecordId> {
        self.lock()
            .map(|records| records.punches.iter().map(|stored| stored.id).collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Records>, String> {
        self.records
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

#[async_trait]
impl PunchRepository for InMemoryStore {
    async fn list_oldest_first(
        &self,
        ancestor: &AncestorKey,
        limit: usize,
    ) -> Result<Vec<Punch>, PunchPersistenceError> {
        let records = self.lock().map_err(PunchPersistenceError::connection)?;
        let mut punches: Vec<Punch> = records
            .punches
            .iter()
            .filter(|stored| stored.ancestor == *ancestor)
            .map(|stored| stored.record.clone())
            .collect();
        // Stable sort keeps insertion order for equal timestamps.
        punches.sort_by_key(Punch::punched_at);
        punches.truncate(limit);
        Ok(punches)
    }

    async fn insert(
        &self,
        ancestor: &AncestorKey,
        punch: &Punch,
    ) -> Result<RecordId, PunchPersistenceError> {
        let mut records = self.lock().map_err(PunchPersistenceError::connection)?;
        let id = RecordId::generate();
        records.punches.push(Stored {
            ancestor: *ancestor,
            id,
            record: punch.clone(),
        });
        Ok(id)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list_by_name(&self, ancestor: &AncestorKey) -> Result<Vec<User>, UserPersistenceError> {
        let records = self.lock().map_err(UserPersistenceError::connection)?;
        let mut users: Vec<User> = records
            .users
            .iter()
            .filter(|stored| stored.ancestor == *ancestor)
            .map(|stored| stored.record.clone())
            .collect();
        users.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(users)
    }

    async fn insert(
        &self,
        ancestor: &AncestorKey,
        user: &User,
    ) -> Result<RecordId, UserPersistenceError> {
        let mut records = self.lock().map_err(UserPersistenceError::connection)?;
        let id = RecordId::generate();
        records.users.push(Stored {
            ancestor: *ancestor,
            id,
            record: user.clone(),
        });
        Ok(id)
    }
}
