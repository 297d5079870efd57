//! Identity of the signed-in caller.
//!
//! Identities are resolved per request by an [`IdentityProvider`] and never
//! stored. Only the email and the admin flag matter to the timecard.
//!
//! [`IdentityProvider`]: crate::domain::ports::IdentityProvider

use std::fmt;

use super::{Email, Error, UserValidationError};

/// Raised when an identity assertion cannot be turned into an [`Identity`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identity assertion is not a valid email: {source}")]
pub struct IdentityValidationError {
    #[from]
    source: UserValidationError,
}

/// The caller on whose behalf a request runs.
///
/// # Examples
/// ```
/// use timecard::domain::Identity;
///
/// let identity = Identity::new("ada@example.com", false).unwrap();
/// assert_eq!(identity.email(), "ada@example.com");
/// assert!(identity.require_admin().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    email: Email,
    admin: bool,
}

impl Identity {
    /// Build an identity from an asserted email.
    pub fn new(email: impl AsRef<str>, admin: bool) -> Result<Self, IdentityValidationError> {
        Ok(Self {
            email: Email::new(email)?,
            admin,
        })
    }

    /// Signed-in email address.
    pub fn email(&self) -> &str {
        self.email.as_ref()
    }

    /// Whether the identity may use the admin API.
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Fail with `403 Forbidden` unless the identity is an admin.
    pub fn require_admin(&self) -> Result<(), Error> {
        if self.admin {
            Ok(())
        } else {
            Err(Error::forbidden("admin privileges required"))
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.email())
    }
}
