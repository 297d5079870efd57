//! Punch-recording endpoints.
//!
//! ```text
//! POST /my/arrivals
//! POST /my/leaves
//! ```
//!
//! Only POST records a punch. Any other method is accepted and ignored with
//! an empty `200 OK`.

use actix_web::{HttpResponse, http::header, web};

use crate::domain::PunchKind;
use crate::inbound::http::PageResult;
use crate::inbound::http::identity::CurrentIdentity;
use crate::inbound::http::state::HttpState;

async fn record(
    identity: &CurrentIdentity,
    state: &HttpState,
    kind: PunchKind,
) -> PageResult<HttpResponse> {
    state.punches.record_punch(identity.identity(), kind).await?;
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

/// Record an arrival for the caller and return to the root page.
pub async fn record_arrival(
    identity: CurrentIdentity,
    state: web::Data<HttpState>,
) -> PageResult<HttpResponse> {
    record(&identity, &state, PunchKind::Arrival).await
}

/// Record a leave for the caller and return to the root page.
pub async fn record_leave(
    identity: CurrentIdentity,
    state: web::Data<HttpState>,
) -> PageResult<HttpResponse> {
    record(&identity, &state, PunchKind::Leave).await
}

/// Non-POST requests write nothing.
pub async fn ignore_method() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Mount both punch endpoints.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/my/arrivals")
            .route(web::post().to(record_arrival))
            .default_service(web::to(ignore_method)),
    )
    .service(
        web::resource("/my/leaves")
            .route(web::post().to(record_leave))
            .default_service(web::to(ignore_method)),
    );
}
