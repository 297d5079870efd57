//! Driven port for punch storage.
//!
//! The store groups every punch under an [`AncestorKey`] and supports exactly
//! two access patterns: an ordered, limited listing and a keyed insert with a
//! store-generated identifier.

use async_trait::async_trait;

use crate::domain::{AncestorKey, Punch, RecordId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by punch repository adapters.
    pub enum PunchPersistenceError {
        /// Repository connection could not be established.
        Connection =>
            "punch repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query =>
            "punch repository query failed: {message}",
    }
}

/// Port for reading and appending punch records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PunchRepository: Send + Sync {
    /// Return at most `limit` punches under `ancestor`, oldest first.
    async fn list_oldest_first(
        &self,
        ancestor: &AncestorKey,
        limit: usize,
    ) -> Result<Vec<Punch>, PunchPersistenceError>;

    /// Append a punch under `ancestor`, returning the generated identifier.
    async fn insert(
        &self,
        ancestor: &AncestorKey,
        punch: &Punch,
    ) -> Result<RecordId, PunchPersistenceError>;
}
