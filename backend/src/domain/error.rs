//! The one failure type every layer reports through.
//!
//! An [`Error`] pairs a category ([`ErrorCode`]) with the message the client
//! sees. It may also carry structured details for client-side field
//! highlighting and the underlying cause for the logs. The cause stays on
//! the server. Inbound adapters decide how a code maps onto their protocol.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::TraceId;

/// Failure category, serialised in `snake_case`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed input or an unsupported method.
    InvalidRequest,
    /// Signed in, but lacking the privilege.
    Forbidden,
    /// Datastore, template or wiring failure.
    InternalError,
}

impl ErrorCode {
    /// Message used when a caller supplies a blank one.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid request",
            Self::Forbidden => "forbidden",
            Self::InternalError => "internal server error",
        }
    }
}

/// A failed request.
///
/// The trace identifier in scope at construction is captured automatically.
///
/// ```
/// use timecard::domain::{Error, ErrorCode};
///
/// let err = Error::internal("Failed to fetch punches data from the datastore")
///     .with_cause("connection refused");
/// assert_eq!(err.code(), ErrorCode::InternalError);
/// assert_eq!(err.cause(), Some("connection refused"));
/// assert_eq!(Error::forbidden(" ").message(), "forbidden");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
    cause: Option<String>,
}

impl Error {
    /// A blank message becomes [`ErrorCode::fallback_message`].
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            code.fallback_message().clone_into(&mut message);
        }
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
            cause: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Text shown to the client.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Server-side explanation; logged, never serialised.
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Attach client-visible details such as the offending field.
    ///
    /// ```
    /// use serde_json::json;
    /// use timecard::domain::Error;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "enabled" }));
    /// assert_eq!(err.details(), Some(&json!({ "field": "enabled" })));
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Drop client-visible details, keeping everything else.
    #[must_use]
    pub fn without_details(mut self) -> Self {
        self.details = None;
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl fmt::Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    /// Replace the captured trace identifier. Blank values are ignored.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        let trace_id = trace_id.into();
        if !trace_id.trim().is_empty() {
            self.trace_id = Some(trace_id);
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

/// JSON envelope: `{"code","message","traceId"?,"details"?}`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    code: ErrorCode,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Envelope {
            code: self.code,
            message: &self.message,
            trace_id: self.trace_id.as_deref(),
            details: self.details.as_ref(),
        }
        .serialize(serializer)
    }
}
