//! PostgreSQL-backed [`PunchRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{PunchPersistenceError, PunchRepository};
use crate::domain::{AncestorKey, Punch, PunchKind, RecordId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPunchRow, PunchRow};
use super::pool::DbPool;
use super::schema::punches;

/// Diesel implementation of the punch store.
#[derive(Clone)]
pub struct DieselPunchRepository {
    pool: DbPool,
}

impl DieselPunchRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> PunchPersistenceError {
    map_diesel_error(
        error,
        PunchPersistenceError::query,
        PunchPersistenceError::connection,
    )
}

/// Rows with an unknown kind are rejected rather than skipped so a corrupt
/// table surfaces as a store failure.
fn row_to_punch(row: PunchRow) -> Result<Punch, PunchPersistenceError> {
    let kind = row.kind.parse::<PunchKind>().map_err(|err| {
        warn!(kind = %row.kind, "stored punch has an unknown kind");
        PunchPersistenceError::query(err.to_string())
    })?;
    Ok(Punch::new(row.puncher, kind, row.punched_at))
}

fn limit_for_query(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait]
impl PunchRepository for DieselPunchRepository {
    async fn list_oldest_first(
        &self,
        ancestor: &AncestorKey,
        limit: usize,
    ) -> Result<Vec<Punch>, PunchPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PunchPersistenceError::connection))?;

        let rows: Vec<PunchRow> = punches::table
            .filter(punches::ancestor.eq(ancestor.encode()))
            .order((punches::punched_at.asc(), punches::id.asc()))
            .limit(limit_for_query(limit))
            .select(PunchRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error)?;

        rows.into_iter().map(row_to_punch).collect()
    }

    async fn insert(
        &self,
        ancestor: &AncestorKey,
        punch: &Punch,
    ) -> Result<RecordId, PunchPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PunchPersistenceError::connection))?;

        let id = RecordId::generate();
        let encoded = ancestor.encode();
        let row = NewPunchRow {
            id: *id.as_uuid(),
            ancestor: &encoded,
            puncher: punch.puncher(),
            kind: punch.kind().as_str(),
            punched_at: punch.punched_at(),
        };

        diesel::insert_into(punches::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_error)?;

        Ok(id)
    }
}
