//! Builders wiring repositories, services, and the login gate.

use std::sync::Arc;

use crate::domain::ports::{IdentityProvider, PunchRepository, UserRepository};
use crate::domain::{PunchService, UserDirectoryService};
use crate::inbound::http::state::HttpState;
use crate::middleware::AuthGate;
use crate::outbound::identity::ProxyIdentityProvider;
use crate::outbound::memory::InMemoryStore;
use crate::outbound::persistence::{DieselPunchRepository, DieselUserRepository};

use super::ServerConfig;

type Repositories = (Arc<dyn PunchRepository>, Arc<dyn UserRepository>);

/// Diesel repositories when a pool is configured, otherwise one shared
/// in-memory store.
fn build_repositories(config: &ServerConfig) -> Repositories {
    match &config.db_pool {
        Some(pool) => (
            Arc::new(DieselPunchRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
        ),
        None => {
            let store = Arc::new(InMemoryStore::new());
            let punches: Arc<dyn PunchRepository> = store.clone();
            (punches, store)
        }
    }
}

/// Build the handler state from the configured repositories.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let (punch_repository, user_repository) = build_repositories(config);
    let punches = Arc::new(PunchService::new(punch_repository, Arc::clone(&config.clock)));
    let users = Arc::new(UserDirectoryService::new(user_repository));
    HttpState::new(punches.clone(), punches, users.clone(), users)
}

/// Build the login gate for the configured proxy.
pub(crate) fn build_gate(config: &ServerConfig) -> AuthGate {
    let provider: Arc<dyn IdentityProvider> = Arc::new(ProxyIdentityProvider::new(
        config.login_url.clone(),
        &config.admin_emails,
    ));
    AuthGate::new(provider).with_identity_header(config.identity_header.clone())
}
