//! Driving ports for the admin user directory.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Use-case port for adding directory users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist `user` and return it as stored.
    async fn create_user(&self, user: User) -> Result<User, Error>;
}

/// Use-case port for listing directory users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user ordered by name ascending.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
