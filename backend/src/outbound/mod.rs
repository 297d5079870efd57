//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **identity**: resolves callers from the assertion forwarded by the
//!   authenticating front proxy and builds login redirects.
//! - **memory**: process-local store used in tests and when no database is
//!   configured.
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod identity;
pub mod memory;
pub mod persistence;
