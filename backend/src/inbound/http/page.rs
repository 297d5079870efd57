//! Root page listing recent punches with the arrive and leave forms.
//!
//! ```text
//! GET /
//! ```

use std::fmt::{self, Write as _};

use actix_web::{HttpResponse, http::header::ContentType, web};

use crate::domain::{Error, Identity, Punch};
use crate::inbound::http::PageResult;
use crate::inbound::http::identity::CurrentIdentity;
use crate::inbound::http::state::HttpState;

const RENDER_FAILED: &str = "Failed to execute the root template";

/// Render the root page for the signed-in caller.
///
/// Answers every method, matching the page's catch-all mount.
pub async fn root_page(
    identity: CurrentIdentity,
    state: web::Data<HttpState>,
) -> PageResult<HttpResponse> {
    let punches = state.punches_query.recent_punches().await?;
    let body = render_root(identity.identity(), &punches)
        .map_err(|err| Error::internal(RENDER_FAILED).with_cause(err))?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// Mount the root page.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").to(root_page));
}

/// HTML-escaped view of a string.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&#34;")?,
                '\'' => f.write_str("&#39;")?,
                other => f.write_char(other)?,
            }
        }
        Ok(())
    }
}

fn render_root(identity: &Identity, punches: &[Punch]) -> Result<String, fmt::Error> {
    let mut html = String::new();
    writeln!(html, "<html>")?;
    writeln!(html, "  <head>")?;
    writeln!(html, "    <title>Timecard</title>")?;
    writeln!(html, "  </head>")?;
    writeln!(html, "  <body>")?;
    writeln!(html, "    <div>Hello, {}!</div>", Escaped(identity.email()))?;
    writeln!(html, "    <ul>")?;
    for punch in punches {
        writeln!(
            html,
            "      <li>{} {}</li>",
            Escaped(punch.kind().as_str()),
            Escaped(&punch.formatted_time())
        )?;
    }
    writeln!(html, "    </ul>")?;
    for (action, label) in [("/my/arrivals", "Arrive"), ("/my/leaves", "Leave")] {
        writeln!(html, "    <form action=\"{action}\" method=\"post\">")?;
        writeln!(html, "      <input type=\"submit\" value=\"{label}\">")?;
        writeln!(html, "    </form>")?;
    }
    writeln!(html, "  </body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PunchQuery;
    use crate::domain::{PunchKind, RECENT_PUNCH_LIMIT};
    use crate::inbound::http::test_utils::{USER_EMAIL, fixed_now, signed_in, test_app};
    use actix_web::http::{StatusCode, header};
    use actix_web::test as actix_test;
    use chrono::Duration;
    use rstest::rstest;

    fn identity(email: &str) -> Identity {
        Identity::new(email, false).expect("valid identity")
    }

    #[rstest]
    fn escaping_neutralises_markup() {
        assert_eq!(
            Escaped("<b>\"Tom\" & 'Jerry'</b>").to_string(),
            "&lt;b&gt;&#34;Tom&#34; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[rstest]
    fn render_lists_punches_and_both_forms() {
        let punches = [
            Punch::new(USER_EMAIL, PunchKind::Arrival, fixed_now()),
            Punch::new(
                USER_EMAIL,
                PunchKind::Leave,
                fixed_now() + Duration::hours(8),
            ),
        ];

        let html = render_root(&identity("o'brien@example.com"), &punches).expect("renders");

        assert!(html.contains("<title>Timecard</title>"));
        assert!(html.contains("Hello, o&#39;brien@example.com!"));
        assert!(html.contains("<li>arrival 2026-10-18 08:30</li>"));
        assert!(html.contains("<li>leave 2026-10-18 16:30</li>"));
        assert!(html.contains("action=\"/my/arrivals\""));
        assert!(html.contains("value=\"Arrive\""));
        assert!(html.contains("action=\"/my/leaves\""));
        assert!(html.contains("value=\"Leave\""));
    }

    #[rstest]
    #[actix_web::test]
    async fn root_page_shows_at_most_ten_oldest_first() {
        let app = test_app();
        for minutes in (0..12_i64).rev() {
            let punch = Punch::new(
                USER_EMAIL,
                PunchKind::Arrival,
                fixed_now() + Duration::minutes(minutes),
            );
            app.seed_punch(&punch).await;
        }
        let service = actix_test::init_service(app.build()).await;

        let req = signed_in(actix_test::TestRequest::get().uri("/"), USER_EMAIL).to_request();
        let res = actix_test::call_service(&service, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/html; charset=utf-8")
        );
        let body = actix_test::read_body(res).await;
        let html = std::str::from_utf8(&body).expect("utf8 body");
        let items: Vec<&str> = html
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("<li>"))
            .collect();
        assert_eq!(items.len(), RECENT_PUNCH_LIMIT);
        assert_eq!(items.first(), Some(&"<li>arrival 2026-10-18 08:30</li>"));
        assert_eq!(items.last(), Some(&"<li>arrival 2026-10-18 08:39</li>"));
    }

    struct FailingPunches;

    #[async_trait::async_trait]
    impl PunchQuery for FailingPunches {
        async fn recent_punches(&self) -> Result<Vec<Punch>, Error> {
            Err(Error::internal("Failed to fetch punches data from the datastore")
                .with_cause("connection refused"))
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn store_failures_surface_their_message() {
        let mut app = test_app();
        app.state.punches_query = std::sync::Arc::new(FailingPunches);
        let service = actix_test::init_service(app.build()).await;

        let req = signed_in(actix_test::TestRequest::get().uri("/"), USER_EMAIL).to_request();
        let res = actix_test::call_service(&service, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            res.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; charset=utf-8")
        );
        let body = actix_test::read_body(res).await;
        assert_eq!(body.as_ref(), b"Failed to fetch punches data from the datastore");
    }
}
