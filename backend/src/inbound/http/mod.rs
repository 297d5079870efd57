//! HTTP inbound adapter exposing the timecard pages and the admin API.

pub mod admin_users;
pub mod error;
pub mod health;
pub mod identity;
pub mod page;
pub mod punches;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiResult, PageResult};
