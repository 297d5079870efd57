//! Punch domain service implementing the punch driving ports.
//!
//! Stamps punches with the injected clock and keeps every record under the
//! fixed [`PUNCH_ANCESTOR`]. Repository failures become internal errors with
//! fixed client messages; the adapter error is kept as the cause.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{PunchCommand, PunchPersistenceError, PunchQuery, PunchRepository};
use crate::domain::{Error, Identity, PUNCH_ANCESTOR, Punch, PunchKind};

/// Maximum number of punches listed on the root page.
pub const RECENT_PUNCH_LIMIT: usize = 10;

const FETCH_FAILED: &str = "Failed to fetch punches data from the datastore";
const PUT_FAILED: &str = "Failed to put a punch data to the datastore";

/// Punch service backed by a [`PunchRepository`].
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use timecard::domain::PunchService;
/// use timecard::domain::ports::PunchRepository;
/// use timecard::outbound::memory::InMemoryStore;
///
/// let store: Arc<dyn PunchRepository> = Arc::new(InMemoryStore::default());
/// let _service = PunchService::new(store, Arc::new(DefaultClock));
/// ```
pub struct PunchService<R: ?Sized> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: ?Sized> Clone for PunchService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: ?Sized> PunchService<R> {
    /// Create a service over `repository`, stamping punches with `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn map_fetch_error(error: PunchPersistenceError) -> Error {
    Error::internal(FETCH_FAILED).with_cause(error)
}

fn map_put_error(error: PunchPersistenceError) -> Error {
    Error::internal(PUT_FAILED).with_cause(error)
}

#[async_trait]
impl<R> PunchCommand for PunchService<R>
where
    R: PunchRepository + ?Sized,
{
    async fn record_punch(&self, identity: &Identity, kind: PunchKind) -> Result<Punch, Error> {
        let punch = Punch::new(identity.email(), kind, self.clock.utc());
        let id = self
            .repository
            .insert(&PUNCH_ANCESTOR, &punch)
            .await
            .map_err(map_put_error)?;
        debug!(record_id = %id, kind = %kind, puncher = identity.email(), "punch recorded");
        Ok(punch)
    }
}

#[async_trait]
impl<R> PunchQuery for PunchService<R>
where
    R: PunchRepository + ?Sized,
{
    async fn recent_punches(&self) -> Result<Vec<Punch>, Error> {
        self.repository
            .list_oldest_first(&PUNCH_ANCESTOR, RECENT_PUNCH_LIMIT)
            .await
            .map_err(map_fetch_error)
    }
}
