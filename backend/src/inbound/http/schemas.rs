//! utoipa mirrors of domain types.
//!
//! The domain stays free of OpenAPI derives; these structs describe the same
//! wire shapes and register under the domain type names.

use utoipa::ToSchema;

/// Failure category of an error envelope.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode, rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    /// Bad form field or unsupported method.
    InvalidRequest,
    /// Signed in without admin rights.
    Forbidden,
    /// Datastore or rendering failure.
    InternalError,
}

/// Error envelope returned by the JSON API. The server-side cause is
/// never included.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "describes a wire shape; never constructed")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "invalid value \"yes\" for parameter enabled: expected a boolean")]
    message: String,
    /// Same value as the `trace-id` response header.
    #[schema(example = "9b2c7f30-4e61-4a8e-8f0a-2d3c4b5a6e7f")]
    trace_id: Option<String>,
    /// For validation failures, `{"field", "code"}` naming the bad input.
    details: Option<serde_json::Value>,
}

/// Directory entry.
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(dead_code, reason = "describes a wire shape; never constructed")]
pub struct UserSchema {
    #[schema(example = "grace@example.com")]
    email: String,
    /// At most 100 characters.
    #[schema(example = "Grace Hopper")]
    name: String,
    /// Defaults to `true` when omitted on creation.
    enabled: bool,
}
