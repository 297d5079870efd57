//! PostgreSQL-backed [`UserRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{AncestorKey, RecordId, User};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of the user directory store.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from_parts(&row.email, &row.name, row.enabled).map_err(|err| {
        warn!(email = %row.email, "stored user fails validation");
        UserPersistenceError::query(err.to_string())
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list_by_name(&self, ancestor: &AncestorKey) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let rows: Vec<UserRow> = users::table
            .filter(users::ancestor.eq(ancestor.encode()))
            .order((users::name.asc(), users::created_at.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn insert(
        &self,
        ancestor: &AncestorKey,
        user: &User,
    ) -> Result<RecordId, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let id = RecordId::generate();
        let encoded = ancestor.encode();
        let row = NewUserRow {
            id: *id.as_uuid(),
            ancestor: &encoded,
            email: user.email().as_ref(),
            name: user.name().as_ref(),
            enabled: user.enabled(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_error)?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_rows_convert_to_users() {
        let user = row_to_user(UserRow {
            email: "ada@example.com".to_owned(),
            name: "Ada Lovelace".to_owned(),
            enabled: false,
        })
        .expect("valid row");

        assert_eq!(user.email().as_ref(), "ada@example.com");
        assert!(!user.enabled());
    }

    #[rstest]
    fn invalid_rows_are_query_errors() {
        let err = row_to_user(UserRow {
            email: "not-an-email".to_owned(),
            name: "Nobody".to_owned(),
            enabled: true,
        })
        .expect_err("invalid email");

        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
