//! Row types mapping the Diesel schema. Never leave this module tree.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{punches, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = punches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PunchRow {
    pub puncher: String,
    pub kind: String,
    pub punched_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = punches)]
pub(crate) struct NewPunchRow<'a> {
    pub id: Uuid,
    pub ancestor: &'a str,
    pub puncher: &'a str,
    pub kind: &'a str,
    pub punched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub email: String,
    pub name: String,
    pub enabled: bool,
}

/// `created_at` is filled by the column default.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub ancestor: &'a str,
    pub email: &'a str,
    pub name: &'a str,
    pub enabled: bool,
}
