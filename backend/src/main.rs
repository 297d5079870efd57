//! Timecard entry point: load settings, prepare the store, serve HTTP.

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use timecard::inbound::http::health::HealthState;
use timecard::outbound::persistence::{DbPool, run_migrations};
use timecard::server::{ServerConfig, create_server, drain_when, shutdown_signal};
use timecard::settings::AppSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load_from_iter(std::env::args_os()).wrap_err("failed to load settings")?;
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr, settings.login_url()?)
        .with_identity_header(settings.identity_header()?)
        .with_admin_emails(settings.admin_emails());

    match settings.pool_config()? {
        Some(pool_config) => {
            run_migrations(pool_config.database_url())
                .await
                .wrap_err("failed to migrate database")?;
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("failed to create database pool")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; records are kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_when(shutdown_signal(), health_state, server.handle()));
    info!(%bind_addr, "timecard listening");
    server.await?;
    Ok(())
}
