//! Admin user directory API.
//!
//! ```text
//! GET  /api/admin/users
//! POST /api/admin/users  email=ada@example.com&name=Ada+Lovelace&enabled=true
//! ```
//!
//! Both operations require an admin identity. Any other method is rejected
//! with `400 Bad Request`.

use actix_web::{HttpRequest, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, User, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::identity::CurrentIdentity;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Path of the admin directory resource.
pub const ADMIN_USERS_PATH: &str = "/api/admin/users";

/// Wire projection of a directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    pub enabled: bool,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            email: user.email().to_string(),
            name: user.name().to_string(),
            enabled: user.enabled(),
        }
    }
}

/// Response body for `GET /api/admin/users`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsersEnvelope {
    pub users: Vec<UserDto>,
}

/// Response body for `POST /api/admin/users`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserDto,
}

/// Form fields accepted by `POST /api/admin/users`.
///
/// Fields may also arrive in the query string; the body wins when both
/// carry one. `enabled` accepts `1 t T TRUE true True 0 f F FALSE false False`; a
/// missing or empty value means `true`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserForm {
    pub email: Option<String>,
    pub name: Option<String>,
    #[schema(example = "true")]
    pub enabled: Option<String>,
}

impl CreateUserForm {
    fn or_from(self, query: Self) -> Self {
        Self {
            email: self.email.or(query.email),
            name: self.name.or(query.name),
            enabled: self.enabled.or(query.enabled),
        }
    }
}

fn query_fields(req: &HttpRequest) -> Result<CreateUserForm, Error> {
    web::Query::<CreateUserForm>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .map_err(|err| {
            Error::invalid_request("query string must be URL-encoded form fields")
                .with_cause(err)
        })
}

/// Parse the `enabled` form value.
///
/// # Examples
/// ```
/// use timecard::inbound::http::admin_users::parse_enabled;
///
/// assert!(parse_enabled(None).unwrap());
/// assert!(!parse_enabled(Some("F")).unwrap());
/// assert!(parse_enabled(Some("yes")).is_err());
/// ```
pub fn parse_enabled(raw: Option<&str>) -> Result<bool, Error> {
    match raw.unwrap_or_default() {
        "" | "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(Error::invalid_request(format!(
            "invalid value {other:?} for parameter enabled: expected a boolean"
        ))
        .with_details(json!({ "field": "enabled", "code": "invalid_boolean" }))),
    }
}

fn map_user_validation_error(err: &UserValidationError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": err.code() }))
}

/// List directory users ordered by name.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "Directory users ordered by name", body = UsersEnvelope),
        (status = 302, description = "Caller is not signed in; redirected to login"),
        (status = 403, description = "Caller is not an admin", body = ErrorSchema),
        (status = 500, description = "Datastore failure", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "listUsers"
)]
pub async fn list_users(
    identity: CurrentIdentity,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<UsersEnvelope>> {
    identity.identity().require_admin()?;
    let users = state.users_query.list_users().await?;
    Ok(web::Json(UsersEnvelope {
        users: users.iter().map(UserDto::from).collect(),
    }))
}

/// Add a directory user and echo it back.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body(
        content = CreateUserForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "User stored", body = UserEnvelope),
        (status = 302, description = "Caller is not signed in; redirected to login"),
        (status = 400, description = "Invalid form field", body = ErrorSchema),
        (status = 403, description = "Caller is not an admin", body = ErrorSchema),
        (status = 500, description = "Datastore failure", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "createUser"
)]
pub async fn create_user(
    req: HttpRequest,
    identity: CurrentIdentity,
    state: web::Data<HttpState>,
    form: web::Form<CreateUserForm>,
) -> ApiResult<web::Json<UserEnvelope>> {
    identity.identity().require_admin()?;
    let CreateUserForm {
        email,
        name,
        enabled,
    } = form.into_inner().or_from(query_fields(&req)?);
    let enabled = parse_enabled(enabled.as_deref())?;
    let user = User::try_from_parts(
        email.unwrap_or_default(),
        name.unwrap_or_default(),
        enabled,
    )
    .map_err(|err| map_user_validation_error(&err))?;
    let stored = state.users.create_user(user).await?;
    Ok(web::Json(UserEnvelope {
        user: UserDto::from(&stored),
    }))
}

/// Reject every method other than GET and POST.
pub async fn unsupported_method(req: HttpRequest) -> ApiResult<web::Json<UsersEnvelope>> {
    Err(Error::invalid_request("unsupported method")
        .with_details(json!({ "method": req.method().as_str() })))
}

/// Mount the admin directory resource.
pub fn routes(cfg: &mut web::ServiceConfig) {
    let form_config = web::FormConfig::default().error_handler(|err, _req| {
        Error::invalid_request("request body must be a URL-encoded form")
            .with_cause(&err)
            .into()
    });
    cfg.service(
        web::resource(ADMIN_USERS_PATH)
            .app_data(form_config)
            .route(web::get().to(list_users))
            .route(web::post().to(create_user))
            .default_service(web::to(unsupported_method)),
    );
}
