//! Full application over in-memory adapters for integration suites.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use timecard::domain::ports::IdentityProvider;
use timecard::domain::{PunchService, UserDirectoryService};
use timecard::inbound::http::health::HealthState;
use timecard::inbound::http::state::HttpState;
use timecard::middleware::AuthGate;
use timecard::middleware::gate::DEFAULT_IDENTITY_HEADER;
use timecard::outbound::identity::ProxyIdentityProvider;
use timecard::outbound::memory::InMemoryStore;
use timecard::server::{AppDependencies, build_app};
use url::Url;

pub const LOGIN_URL: &str = "https://login.example.com/_login";
pub const ADMIN_EMAIL: &str = "root@example.com";
pub const USER_EMAIL: &str = "ada@example.com";

/// Clock that advances one minute per reading.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: std::sync::atomic::AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            ticks: std::sync::atomic::AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self
            .ticks
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.start + chrono::Duration::minutes(tick)
    }
}

pub fn start_of_shift() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Shared state reused across every application instance of a test.
#[derive(Clone)]
pub struct Harness {
    pub state: HttpState,
    pub store: Arc<InMemoryStore>,
    provider: Arc<dyn IdentityProvider>,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let punches = Arc::new(PunchService::new(
            Arc::clone(&store),
            Arc::new(SteppingClock::starting_at(start_of_shift())),
        ));
        let users = Arc::new(UserDirectoryService::new(Arc::clone(&store)));
        let login = Url::parse(LOGIN_URL).expect("valid login url");
        Self {
            state: HttpState::new(punches.clone(), punches, users.clone(), users),
            store,
            provider: Arc::new(ProxyIdentityProvider::new(login, [ADMIN_EMAIL])),
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        build_app(AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(self.state.clone()),
            gate: AuthGate::new(Arc::clone(&self.provider)),
        })
    }
}

pub fn signed_in(req: actix_test::TestRequest, email: &str) -> actix_test::TestRequest {
    req.insert_header((DEFAULT_IDENTITY_HEADER, email.to_owned()))
}

/// `<li>` entries of a rendered root page.
pub fn list_items(html: &str) -> Vec<String> {
    html.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("<li>"))
        .map(str::to_owned)
        .collect()
}
