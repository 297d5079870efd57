//! Port for the external identity service.
//!
//! An authenticating front proxy signs users in and forwards an identity
//! assertion with each request. The provider turns that assertion into an
//! [`Identity`] and knows where to send anonymous callers to sign in.

use url::Url;

use crate::domain::Identity;

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity provider adapters.
    pub enum IdentityProviderError {
        /// The login URL could not be built for the requested destination.
        LoginUrl =>
            "failed to build login URL: {message}",
    }
}

/// Resolves identities and login redirects.
pub trait IdentityProvider: Send + Sync {
    /// Resolve the caller from the raw assertion, if any.
    ///
    /// Returns `None` when the caller is anonymous or the assertion is
    /// unusable.
    fn resolve(&self, assertion: Option<&str>) -> Option<Identity>;

    /// Build the URL that signs a user in and then returns to `destination`.
    fn login_url(&self, destination: &str) -> Result<Url, IdentityProviderError>;
}
