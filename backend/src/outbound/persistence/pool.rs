//! Async PostgreSQL connections shared through bb8.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool construction or checkout failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("no pooled connection available: {0}")]
    Checkout(String),
    #[error("cannot create connection pool: {0}")]
    Build(String),
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout(message.into())
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build(message.into())
    }

    pub fn message(&self) -> &str {
        let (Self::Checkout(message) | Self::Build(message)) = self;
        message
    }
}

/// Where to connect and how many connections to hold.
///
/// ```
/// use std::time::Duration;
/// use timecard::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/timecard")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_CONNECTIONS,
            connection_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_max_size(self, max_size: u32) -> Self {
        Self { max_size, ..self }
    }

    #[must_use]
    pub fn with_connection_timeout(self, connection_timeout: Duration) -> Self {
        Self {
            connection_timeout,
            ..self
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

pub type PooledPg<'a> = PooledConnection<'a, AsyncPgConnection>;

/// Cloneable handle over the bb8 pool.
#[derive(Clone)]
pub struct DbPool(Pool<AsyncPgConnection>);

impl DbPool {
    /// # Errors
    ///
    /// [`PoolError::Build`] if bb8 rejects the configuration.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map(Self)
            .map_err(|err| PoolError::build(err.to_string()))
    }

    /// # Errors
    ///
    /// [`PoolError::Checkout`] when no connection frees up before the timeout.
    pub async fn get(&self) -> Result<PooledPg<'_>, PoolError> {
        self.0
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const URL: &str = "postgres://localhost/timecard";

    #[rstest]
    fn unset_limits_use_defaults() {
        let config = PoolConfig::new(URL);
        assert_eq!(
            (config.database_url(), config.max_size(), config.connection_timeout()),
            (URL, DEFAULT_MAX_CONNECTIONS, DEFAULT_CHECKOUT_TIMEOUT)
        );
    }

    #[rstest]
    fn builder_calls_leave_other_fields_alone() {
        let config = PoolConfig::new(URL)
            .with_max_size(2)
            .with_connection_timeout(Duration::from_millis(250));

        assert_eq!(config.database_url(), URL);
        assert_eq!(config.max_size(), 2);
        assert_eq!(config.connection_timeout(), Duration::from_millis(250));
    }

    #[rstest]
    #[case(PoolError::checkout("timed out"), "no pooled connection available: timed out")]
    #[case(PoolError::build("bad url"), "cannot create connection pool: bad url")]
    fn driver_text_is_kept(#[case] err: PoolError, #[case] rendered: &str) {
        assert_eq!(err.to_string(), rendered);
        assert!(rendered.ends_with(err.message()));
    }
}
