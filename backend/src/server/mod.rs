//! Application assembly and the HTTP listener.
//!
//! The trace middleware wraps the whole application. Health probes and the
//! API docs sit outside the login gate; every other path, including unknown
//! ones, is gated.

mod config;
mod shutdown;
mod state_builders;

pub use config::ServerConfig;
pub use shutdown::{drain_when, shutdown_signal};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{admin_users, page, punches};
use crate::middleware::{AuthGate, Trace};

use state_builders::{build_gate, build_http_state};

/// Everything [`build_app`] needs to assemble one worker's application.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub gate: AuthGate,
}

/// Assemble the application: probes and docs outside the gate, pages and
/// the admin API behind it.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        gate,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Unknown paths fall back to the root page, behind the gate.
    app.service(
        web::scope("")
            .wrap(gate)
            .configure(page::routes)
            .configure(punches::routes)
            .configure(admin_users::routes)
            .default_service(web::to(page::root_page)),
    )
}

/// Bind the listener and mark the service ready.
///
/// Signal handling is left to [`drain_when`], so probes fail before the
/// listener stops.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let gate = build_gate(&config);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            gate: gate.clone(),
        })
    })
    .disable_signals()
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
