//! Rendering of domain errors as HTTP responses.
//!
//! The JSON API answers with the envelope produced by the domain type's
//! serialiser. Browser-facing routes wrap the error in [`PageError`] and get
//! the bare message as `text/plain`. Both repeat the `trace-id` header when
//! known. Internal errors keep their message but lose any details.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result type returned by JSON handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Result type returned by the HTML page and the punch forms.
pub type PageResult<T> = Result<T, PageError>;

/// The copy of `error` that may leave the process.
fn public_view(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => error.clone().without_details(),
        _ => error.clone(),
    }
}

fn status_of(error: &Error) -> StatusCode {
    match error.code() {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn builder_for(error: &Error) -> HttpResponseBuilder {
    let mut response = HttpResponse::build(status_of(error));
    if let Some(trace_id) = error.trace_id() {
        response.insert_header((TRACE_ID_HEADER, trace_id.to_owned()));
    }
    response
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_of(self)
    }

    fn error_response(&self) -> HttpResponse {
        builder_for(self).json(public_view(self))
    }
}

/// Framework failures surfacing inside handlers are reported as internal.
impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error reached a handler");
        Self::internal("internal server error").with_cause(err)
    }
}

/// An [`Error`] answered as plain text, the way a browser form expects.
///
/// ```
/// use actix_web::ResponseError;
/// use timecard::domain::Error;
/// use timecard::inbound::http::error::PageError;
///
/// let page = PageError::from(Error::internal("Failed to execute the root template"));
/// assert_eq!(page.status_code().as_u16(), 500);
/// ```
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PageError(#[from] Error);

impl PageError {
    pub fn error(&self) -> &Error {
        &self.0
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        status_of(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        builder_for(&self.0)
            .content_type(ContentType::plaintext())
            .body(self.0.message().to_owned())
    }
}
