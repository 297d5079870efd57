//! OpenAPI document for the admin directory API and health probes.
//!
//! Served by Swagger UI in debug builds and printed by `openapi-dump`.
//! The HTML page and punch forms are not part of the document.

use crate::inbound::http::admin_users::{CreateUserForm, UserDto, UserEnvelope, UsersEnvelope};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::middleware::gate::DEFAULT_IDENTITY_HEADER;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the `IdentityAssertion` scheme: the proxy-set email header.
struct IdentityAssertionAddon;

impl Modify for IdentityAssertionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "IdentityAssertion",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                DEFAULT_IDENTITY_HEADER,
                "Email of the signed-in user, set by the authenticating proxy.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&IdentityAssertionAddon),
    info(
        title = "Timecard API",
        description = "Admin user directory and health probes for the timecard service."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("IdentityAssertion" = [])),
    paths(
        crate::inbound::http::admin_users::list_users,
        crate::inbound::http::admin_users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserDto,
        UsersEnvelope,
        UserEnvelope,
        CreateUserForm,
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "admin", description = "Directory management for administrators"),
        (name = "health", description = "Orchestrator probes")
    )
)]
pub struct ApiDoc;
