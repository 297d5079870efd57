//! Extractor exposing the caller resolved by the login gate.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, Identity};

/// The signed-in caller.
///
/// Fails with a 500 "login needed" error when the handler is mounted outside
/// [`AuthGate`](crate::middleware::AuthGate).
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl CurrentIdentity {
    /// Borrow the resolved identity.
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for CurrentIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Identity>()
                .cloned()
                .map(Self)
                .ok_or_else(|| Error::internal("login needed")),
        )
    }
}
