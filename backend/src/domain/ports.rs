//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`PunchCommand`, `PunchQuery`, `UsersCommand`,
//! `UsersQuery`) are what inbound adapters call. Driven ports
//! (`PunchRepository`, `UserRepository`, `IdentityProvider`) are what the
//! domain expects outbound adapters to provide. Driven ports expose strongly
//! typed errors so adapters map their failures into predictable variants.

mod identity_provider;
mod macros;
mod punch_command;
mod punch_repository;
mod user_repository;
mod users_command;

pub(crate) use macros::define_port_error;

pub use identity_provider::{IdentityProvider, IdentityProviderError};
pub use punch_command::{PunchCommand, PunchQuery};
#[cfg(test)]
pub use punch_repository::MockPunchRepository;
pub use punch_repository::{PunchPersistenceError, PunchRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::{UsersCommand, UsersQuery};
