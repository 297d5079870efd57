//! Driving ports for recording and listing punches.

use async_trait::async_trait;

use crate::domain::{Error, Identity, Punch, PunchKind};

/// Use-case port for recording a punch on behalf of the caller.
#[async_trait]
pub trait PunchCommand: Send + Sync {
    /// Stamp a new punch of `kind` for `identity` at the current time.
    async fn record_punch(&self, identity: &Identity, kind: PunchKind) -> Result<Punch, Error>;
}

/// Use-case port for reading the punch history shown on the root page.
#[async_trait]
pub trait PunchQuery: Send + Sync {
    /// Return the punches shown on the root page, oldest first.
    async fn recent_punches(&self) -> Result<Vec<Punch>, Error>;
}
