//! Login gate wrapping every application handler.
//!
//! The gate resolves the caller through the [`IdentityProvider`] port. An
//! anonymous caller is redirected to the login page with `302 Found` and the
//! wrapped handler never runs. A signed-in caller's [`Identity`](crate::domain::Identity) is stored in
//! the request extensions for handlers to extract. Handler failures are
//! logged here with their server-side cause; the client only sees the
//! handler-supplied message and status.

use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderName};
use actix_web::{Error as ActixError, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

use crate::domain::ports::IdentityProvider;
use crate::domain::{Error, TraceId};
use crate::inbound::http::error::PageError;

/// Header carrying the identity assertion unless configured otherwise.
pub const DEFAULT_IDENTITY_HEADER: &str = "x-authenticated-user-email";

/// Gate middleware factory.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use timecard::middleware::AuthGate;
/// use timecard::outbound::identity::ProxyIdentityProvider;
/// use url::Url;
///
/// let login = Url::parse("http://localhost:8080/_login").unwrap();
/// let provider = Arc::new(ProxyIdentityProvider::new(login, Vec::<String>::new()));
/// let _app = App::new().service(web::scope("").wrap(AuthGate::new(provider)));
/// ```
#[derive(Clone)]
pub struct AuthGate {
    provider: Arc<dyn IdentityProvider>,
    identity_header: HeaderName,
}

impl AuthGate {
    /// Gate requests through `provider`, reading the default assertion header.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            identity_header: HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
        }
    }

    /// Read the identity assertion from `header` instead.
    #[must_use]
    pub fn with_identity_header(mut self, header: HeaderName) -> Self {
        self.identity_header = header;
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            provider: Arc::clone(&self.provider),
            identity_header: self.identity_header.clone(),
        }))
    }
}

/// Service wrapper produced by [`AuthGate`].
pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    provider: Arc<dyn IdentityProvider>,
    identity_header: HeaderName,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let provider = Arc::clone(&self.provider);
        let identity_header = self.identity_header.clone();
        // All work happens in the returned future so it runs inside the
        // trace scope installed by the outer middleware.
        Box::pin(async move {
            let identity = provider.resolve(
                req.headers()
                    .get(&identity_header)
                    .and_then(|value| value.to_str().ok()),
            );
            let Some(identity) = identity else {
                let response = redirect_to_login(provider.as_ref(), &req);
                return Ok(req.into_response(response).map_into_right_body());
            };

            req.extensions_mut().insert(identity);
            let res = service.call(req).await?;
            log_handler_failure(&res);
            Ok(res.map_into_left_body())
        })
    }
}

/// Path and query the caller asked for, used as the post-login destination.
fn destination_of(req: &ServiceRequest) -> &str {
    req.uri()
        .path_and_query()
        .map_or("/", |path_and_query| path_and_query.as_str())
}

fn redirect_to_login(provider: &dyn IdentityProvider, req: &ServiceRequest) -> HttpResponse {
    match provider.login_url(destination_of(req)) {
        Ok(url) => HttpResponse::Found()
            .insert_header((header::LOCATION, url.as_str()))
            .finish(),
        Err(err) => {
            let failure = Error::internal(err.to_string()).with_cause(&err);
            log_failure(&failure, failure.status_code().as_u16());
            failure.error_response()
        }
    }
}

fn log_handler_failure<B>(res: &ServiceResponse<B>) {
    let Some(failure) = res.response().error().and_then(|err| {
        err.as_error::<Error>()
            .or_else(|| err.as_error::<PageError>().map(PageError::error))
    }) else {
        return;
    };
    log_failure(failure, res.status().as_u16());
}

fn log_failure(failure: &Error, status: u16) {
    let trace_id = failure
        .trace_id()
        .map(str::to_owned)
        .or_else(|| TraceId::current().map(|id| id.to_string()));
    error!(
        status,
        trace_id = trace_id.as_deref().unwrap_or_default(),
        code = ?failure.code(),
        cause = failure.cause().unwrap_or(failure.message()),
        "request failed"
    );
}
