//! Process settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TIMECARD_*` environment variables and an
//! optional config file, in increasing order of precedence for the former.

use std::net::SocketAddr;

use actix_web::http::header::HeaderName;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::middleware::gate::DEFAULT_IDENTITY_HEADER;
use crate::outbound::persistence::{DEFAULT_MAX_CONNECTIONS, PoolConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOGIN_URL: &str = "http://localhost:8080/_login";

/// Invalid settings detected at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("invalid login URL {value:?}: {message}")]
    LoginUrl { value: String, message: String },
    #[error("invalid identity header {value:?}: {message}")]
    IdentityHeader { value: String, message: String },
    #[error("db_max_connections must be at least 1")]
    PoolSize,
}

/// Raw settings as supplied by the operator.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TIMECARD")]
pub struct AppSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// PostgreSQL URL; records stay in memory when unset.
    pub database_url: Option<String>,
    /// Page anonymous callers are redirected to.
    #[ortho_config(default = DEFAULT_LOGIN_URL.to_owned())]
    pub login_url: String,
    /// Header carrying the front proxy's identity assertion.
    #[ortho_config(default = DEFAULT_IDENTITY_HEADER.to_owned())]
    pub identity_header: String,
    /// Admin emails. The environment form is comma-separated.
    #[ortho_config(default = Vec::new())]
    #[serde(default)]
    pub admin_emails: Vec<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
                value: self.bind_addr.clone(),
                message: err.to_string(),
            })
    }

    pub fn login_url(&self) -> Result<Url, SettingsError> {
        Url::parse(&self.login_url).map_err(|err| SettingsError::LoginUrl {
            value: self.login_url.clone(),
            message: err.to_string(),
        })
    }

    pub fn identity_header(&self) -> Result<HeaderName, SettingsError> {
        HeaderName::try_from(self.identity_header.as_str()).map_err(|err| {
            SettingsError::IdentityHeader {
                value: self.identity_header.clone(),
                message: err.to_string(),
            }
        })
    }

    /// Admin emails with blank entries dropped.
    pub fn admin_emails(&self) -> Vec<String> {
        self.admin_emails
            .iter()
            .map(|email| email.trim())
            .filter(|email| !email.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Pool settings, or `None` for the in-memory store.
    pub fn pool_config(&self) -> Result<Option<PoolConfig>, SettingsError> {
        let Some(url) = self.database_url.as_deref().filter(|url| !url.is_empty()) else {
            return Ok(None);
        };
        let max = self
            .db_max_connections
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max == 0 {
            return Err(SettingsError::PoolSize);
        }
        Ok(Some(PoolConfig::new(url).with_max_size(max)))
    }
}
