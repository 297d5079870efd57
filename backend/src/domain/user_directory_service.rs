//! Directory service implementing the admin user driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, USER_ANCESTOR, User};

const FETCH_FAILED: &str = "Failed to fetch users from the datastore";
const PUT_FAILED: &str = "Failed to put a user data to the datastore";

/// Admin directory backed by a [`UserRepository`].
pub struct UserDirectoryService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserDirectoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserDirectoryService<R> {
    /// Create a directory over `repository`.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_fetch_error(error: UserPersistenceError) -> Error {
    Error::internal(FETCH_FAILED).with_cause(error)
}

fn map_put_error(error: UserPersistenceError) -> Error {
    Error::internal(PUT_FAILED).with_cause(error)
}

#[async_trait]
impl<R> UsersCommand for UserDirectoryService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, user: User) -> Result<User, Error> {
        let id = self
            .repository
            .insert(&USER_ANCESTOR, &user)
            .await
            .map_err(map_put_error)?;
        debug!(record_id = %id, email = %user.email(), "directory user created");
        Ok(user)
    }
}

#[async_trait]
impl<R> UsersQuery for UserDirectoryService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_by_name(&USER_ANCESTOR)
            .await
            .map_err(map_fetch_error)
    }
}
