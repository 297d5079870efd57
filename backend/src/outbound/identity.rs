//! Identity provider backed by an authenticating front proxy.
//!
//! The proxy signs users in and forwards the signed-in email in a request
//! header, optionally prefixed by the issuer (`accounts.example.com:ada@…`).
//! Anonymous callers are sent to the proxy's login endpoint with a
//! `continue` parameter naming the page to return to.

use std::collections::HashSet;

use tracing::warn;
use url::Url;

use crate::domain::Identity;
use crate::domain::ports::{IdentityProvider, IdentityProviderError};

/// Query parameter carrying the post-login destination.
pub const CONTINUE_PARAM: &str = "continue";

/// [`IdentityProvider`] reading proxy assertions.
///
/// # Examples
/// ```
/// use timecard::domain::ports::IdentityProvider;
/// use timecard::outbound::identity::ProxyIdentityProvider;
/// use url::Url;
///
/// let login = Url::parse("https://proxy.example.com/_login").unwrap();
/// let provider = ProxyIdentityProvider::new(login, ["root@example.com"]);
///
/// let identity = provider.resolve(Some("accounts:root@example.com")).unwrap();
/// assert!(identity.is_admin());
/// assert_eq!(
///     provider.login_url("/my/arrivals").unwrap().as_str(),
///     "https://proxy.example.com/_login?continue=%2Fmy%2Farrivals",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ProxyIdentityProvider {
    login_url: Url,
    admins: HashSet<String>,
}

impl ProxyIdentityProvider {
    /// Build a provider redirecting to `login_url`. Emails in `admins` are
    /// matched case-insensitively.
    pub fn new<I, E>(login_url: Url, admins: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: AsRef<str>,
    {
        let admins = admins
            .into_iter()
            .map(|email| email.as_ref().trim().to_ascii_lowercase())
            .filter(|email| !email.is_empty())
            .collect();
        Self { login_url, admins }
    }

    fn is_admin(&self, email: &str) -> bool {
        self.admins.contains(&email.to_ascii_lowercase())
    }
}

impl IdentityProvider for ProxyIdentityProvider {
    fn resolve(&self, assertion: Option<&str>) -> Option<Identity> {
        let raw = assertion.map(str::trim).filter(|value| !value.is_empty())?;
        let email = raw.rsplit_once(':').map_or(raw, |(_, email)| email).trim();
        match Identity::new(email, self.is_admin(email)) {
            Ok(identity) => Some(identity),
            Err(error) => {
                warn!(%error, assertion = raw, "ignoring malformed identity assertion");
                None
            }
        }
    }

    fn login_url(&self, destination: &str) -> Result<Url, IdentityProviderError> {
        if !destination.starts_with('/') {
            return Err(IdentityProviderError::login_url(format!(
                "destination must be an absolute path, got {destination:?}"
            )));
        }
        let mut url = self.login_url.clone();
        url.query_pairs_mut()
            .append_pair(CONTINUE_PARAM, destination);
        Ok(url)
    }
}
