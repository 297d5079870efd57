//! Driven port for directory user storage.

use async_trait::async_trait;

use crate::domain::{AncestorKey, RecordId, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query =>
            "user repository query failed: {message}",
    }
}

/// Port for listing and appending directory users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every user under `ancestor`, ordered by name ascending.
    async fn list_by_name(&self, ancestor: &AncestorKey) -> Result<Vec<User>, UserPersistenceError>;

    /// Append a user under `ancestor`, returning the generated identifier.
    ///
    /// Duplicate emails are accepted.
    async fn insert(&self, ancestor: &AncestorKey, user: &User)
    -> Result<RecordId, UserPersistenceError>;
}
