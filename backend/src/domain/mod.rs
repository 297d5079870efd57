//! Domain primitives, services, and ports.
//!
//! Purpose: define the timecard's records (punches and directory users), the
//! identity of the signed-in caller, the single error type every layer
//! reports through, and the services that sit between inbound adapters and
//! the store ports.
//!
//! Public surface:
//! - Error / ErrorCode: request-scoped failure with a client message and a
//!   server-side cause.
//! - Punch / PunchKind: an arrival or leave event.
//! - User / Email / UserName: a directory entry managed by admins.
//! - Identity: the caller resolved by the identity provider.
//! - AncestorKey / RecordId: composite grouping key and store identifiers.
//! - PunchService / UserDirectoryService: driving-port implementations.

pub mod error;
pub mod identity;
pub mod keys;
pub mod ports;
pub mod punch;
pub mod punch_service;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;

pub use self::error::{Error, ErrorCode};
pub use self::identity::{Identity, IdentityValidationError};
pub use self::keys::{AncestorKey, PUNCH_ANCESTOR, RecordId, USER_ANCESTOR};
pub use self::punch::{Punch, PunchKind, PunchKindParseError};
pub use self::punch_service::{PunchService, RECENT_PUNCH_LIMIT};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, User, UserName, UserValidationError};
pub use self::user_directory_service::UserDirectoryService;
