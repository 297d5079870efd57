//! End-to-end HTTP behaviour over in-memory adapters.

#[path = "support/app.rs"]
mod app;

use actix_web::http::{Method, StatusCode, header};
use actix_web::test as actix_test;
use app::{ADMIN_EMAIL, Harness, LOGIN_URL, USER_EMAIL, list_items, signed_in};
use rstest::{fixture, rstest};
use serde_json::Value;
use timecard::domain::TRACE_ID_HEADER;
use url::Url;

#[fixture]
fn harness() -> Harness {
    Harness::new()
}

fn location(res: &actix_web::dev::ServiceResponse) -> Url {
    let raw = res
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header");
    Url::parse(raw).expect("absolute location")
}

#[rstest]
#[case(Method::GET, "/")]
#[case(Method::GET, "/?week=42")]
#[case(Method::POST, "/my/arrivals")]
#[case(Method::POST, "/my/leaves")]
#[case(Method::GET, "/api/admin/users")]
#[case(Method::DELETE, "/api/admin/users")]
#[case(Method::GET, "/somewhere/else")]
#[actix_web::test]
async fn anonymous_requests_are_sent_to_login(
    harness: Harness,
    #[case] method: Method,
    #[case] path: &str,
) {
    let service = actix_test::init_service(harness.app()).await;

    let req = actix_test::TestRequest::default()
        .method(method)
        .uri(path)
        .to_request();
    let res = actix_test::call_service(&service, req).await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let target = location(&res);
    assert!(target.as_str().starts_with(LOGIN_URL));
    let continue_to = target
        .query_pairs()
        .find(|(key, _)| key == "continue")
        .map(|(_, value)| value.into_owned());
    assert_eq!(continue_to.as_deref(), Some(path));
    assert!(harness.store.punch_ids().is_empty());
}

#[rstest]
#[actix_web::test]
async fn health_probes_skip_the_gate(harness: Harness) {
    let service = actix_test::init_service(harness.app()).await;

    let req = actix_test::TestRequest::get().uri("/health/live").to_request();
    let res = actix_test::call_service(&service, req).await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn arrival_then_root_lists_the_punch(harness: Harness) {
    let service = actix_test::init_service(harness.app()).await;

    let post = signed_in(actix_test::TestRequest::post().uri("/my/arrivals"), USER_EMAIL).to_request();
    let res = actix_test::call_service(&service, post).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/")
    );

    let get = signed_in(actix_test::TestRequest::get().uri("/"), USER_EMAIL).to_request();
    let body = actix_test::call_and_read_body(&service, get).await;
    let html = std::str::from_utf8(&body).expect("utf8 body");

    assert_eq!(list_items(html), vec!["<li>arrival 2026-10-19 09:00</li>"]);
    assert!(html.contains("Hello, ada@example.com!"));
}

#[rstest]
#[actix_web::test]
async fn root_lists_ten_oldest_punches_in_order(harness: Harness) {
    let service = actix_test::init_service(harness.app()).await;

    for n in 0..12 {
        let path = if n % 2 == 0 { "/my/arrivals" } else { "/my/leaves" };
        let req = signed_in(actix_test::TestRequest::post().uri(path), USER_EMAIL).to_request();
        assert_eq!(
            actix_test::call_service(&service, req).await.status(),
            StatusCode::FOUND
        );
    }

    let get = signed_in(actix_test::TestRequest::get().uri("/"), USER_EMAIL).to_request();
    let body = actix_test::call_and_read_body(&service, get).await;
    let items = list_items(std::str::from_utf8(&body).expect("utf8 body"));

    assert_eq!(items.len(), 10);
    assert_eq!(items[0], "<li>arrival 2026-10-19 09:00</li>");
    assert_eq!(items[1], "<li>leave 2026-10-19 09:01</li>");
    assert_eq!(items[9], "<li>leave 2026-10-19 09:09</li>");
}

#[rstest]
#[case(Method::GET, "/my/arrivals")]
#[case(Method::PUT, "/my/arrivals")]
#[case(Method::GET, "/my/leaves")]
#[case(Method::DELETE, "/my/leaves")]
#[actix_web::test]
async fn non_post_punch_requests_change_nothing(
    harness: Harness,
    #[case] method: Method,
    #[case] path: &str,
) {
    let service = actix_test::init_service(harness.app()).await;

    let req = signed_in(
        actix_test::TestRequest::default().method(method).uri(path),
        USER_EMAIL,
    )
    .to_request();
    let res = actix_test::call_service(&service, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(actix_test::read_body(res).await.is_empty());
    assert!(harness.store.punch_ids().is_empty());
}

async fn create_user(
    service: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    form: &[(&str, &str)],
) -> (StatusCode, Value) {
    let req = signed_in(
        actix_test::TestRequest::post()
            .uri("/api/admin/users")
            .set_form(form),
        ADMIN_EMAIL,
    )
    .to_request();
    let res = actix_test::call_service(service, req).await;
    let status = res.status();
    (status, actix_test::read_body_json(res).await)
}

#[rstest]
#[actix_web::test]
async fn admin_directory_round_trip(harness: Harness) {
    let service = actix_test::init_service(harness.app()).await;

    let (status, body) = create_user(
        &service,
        &[("email", "grace@example.com"), ("name", "Grace Hopper")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "user": { "email": "grace@example.com", "name": "Grace Hopper", "enabled": true }
        })
    );

    let (status, _) = create_user(
        &service,
        &[
            ("email", "ada@example.com"),
            ("name", "Ada Lovelace"),
            ("enabled", "0"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let req = signed_in(actix_test::TestRequest::get().uri("/api/admin/users"), ADMIN_EMAIL)
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&service, req).await;
    let names: Vec<&str> = body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .filter_map(|user| user["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper"]);
    assert_eq!(body["users"][0]["enabled"], false);
}

#[rstest]
#[actix_web::test]
async fn invalid_enabled_value_names_the_parameter(harness: Harness) {
    let service = actix_test::init_service(harness.app()).await;

    let (status, body) = create_user(
        &service,
        &[
            ("email", "grace@example.com"),
            ("name", "Grace Hopper"),
            ("enabled", "notabool"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("enabled"), "{message}");
    assert!(message.contains("notabool"), "{message}");
}

#[rstest]
#[actix_web::test]
async fn non_admins_are_forbidden(harness: Harness) {
    let service = actix_test::init_service(harness.app()).await;

    let req = signed_in(actix_test::TestRequest::get().uri("/api/admin/users"), USER_EMAIL)
        .to_request();
    let res = actix_test::call_service(&service, req).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let trace_header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "forbidden");
    assert_eq!(body["traceId"], trace_header.as_str());
}

#[rstest]
#[actix_web::test]
async fn unsupported_admin_methods_are_rejected(harness: Harness) {
    let service = actix_test::init_service(harness.app()).await;

    let req = signed_in(
        actix_test::TestRequest::default()
            .method(Method::PATCH)
            .uri("/api/admin/users"),
        ADMIN_EMAIL,
    )
    .to_request();
    let res = actix_test::call_service(&service, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "unsupported method");
}
