//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use url::Url;

use crate::domain::ports::{IdentityProvider, PunchRepository, UserRepository};
use crate::domain::{PUNCH_ANCESTOR, Punch, PunchService, USER_ANCESTOR, User, UserDirectoryService};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::middleware::AuthGate;
use crate::middleware::gate::DEFAULT_IDENTITY_HEADER;
use crate::outbound::identity::ProxyIdentityProvider;
use crate::outbound::memory::InMemoryStore;
use crate::server::{AppDependencies, build_app};

/// Signed-in caller without admin rights.
pub const USER_EMAIL: &str = "ada@example.com";
/// Signed-in caller listed as an admin.
pub const ADMIN_EMAIL: &str = "root@example.com";
/// Login endpoint anonymous callers are sent to.
pub const LOGIN_URL: &str = "http://localhost:8080/_login";

/// Instant every test punch is stamped with.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory application under test.
///
/// `state` may be patched with failing ports before [`TestApp::build`].
pub struct TestApp {
    pub state: HttpState,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    /// Insert a punch directly into the store.
    pub async fn seed_punch(&self, punch: &Punch) {
        PunchRepository::insert(self.store.as_ref(), &PUNCH_ANCESTOR, punch)
            .await
            .expect("seed punch");
    }

    /// Insert a directory user directly into the store.
    pub async fn seed_user(&self, user: &User) {
        UserRepository::insert(self.store.as_ref(), &USER_ANCESTOR, user)
            .await
            .expect("seed user");
    }

    /// Assemble the full gated application.
    pub fn build(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let login = Url::parse(LOGIN_URL).expect("valid login url");
        let provider: Arc<dyn IdentityProvider> =
            Arc::new(ProxyIdentityProvider::new(login, [ADMIN_EMAIL]));
        build_app(AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(self.state),
            gate: AuthGate::new(provider),
        })
    }
}

/// Application backed by a fresh in-memory store and a clock frozen at
/// [`fixed_now`].
pub fn test_app() -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let punches = Arc::new(PunchService::new(
        Arc::clone(&store),
        Arc::new(FixedClock(fixed_now())),
    ));
    let users = Arc::new(UserDirectoryService::new(Arc::clone(&store)));
    TestApp {
        state: HttpState::new(punches.clone(), punches, users.clone(), users),
        store,
    }
}

/// Attach the identity assertion for `email`.
pub fn signed_in(req: actix_test::TestRequest, email: &str) -> actix_test::TestRequest {
    req.insert_header((DEFAULT_IDENTITY_HEADER, email.to_owned()))
}
