//! Inputs to [`create_server`](super::create_server).

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::http::header::HeaderName;
use mockable::{Clock, DefaultClock};
use url::Url;

use crate::middleware::gate::DEFAULT_IDENTITY_HEADER;
use crate::outbound::persistence::DbPool;

/// Listener, login redirect, identity source and storage for one server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) login_url: Url,
    pub(crate) identity_header: HeaderName,
    pub(crate) admin_emails: Vec<String>,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// No admins, the default identity header, the system clock and
    /// in-memory storage until a pool is attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, login_url: Url) -> Self {
        Self {
            bind_addr,
            login_url,
            identity_header: HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
            admin_emails: Vec::new(),
            db_pool: None,
            clock: Arc::new(DefaultClock),
        }
    }

    #[must_use]
    pub fn with_identity_header(mut self, header: HeaderName) -> Self {
        self.identity_header = header;
        self
    }

    /// Emails allowed to use the admin API.
    #[must_use]
    pub fn with_admin_emails(mut self, admin_emails: Vec<String>) -> Self {
        self.admin_emails = admin_emails;
        self
    }

    /// Store punches and users in PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Stamp punches with `clock` instead of the system clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
