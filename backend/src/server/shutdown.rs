//! Graceful shutdown: fail the probes first, then stop the listener.

use std::future::Future;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};

use crate::inbound::http::health::HealthState;

/// Resolves on SIGINT, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }
}

/// Once `signal` resolves, mark the process draining and stop `server`,
/// letting in-flight requests finish.
pub async fn drain_when(
    signal: impl Future<Output = ()>,
    health_state: web::Data<HealthState>,
    server: ServerHandle,
) {
    signal.await;
    health_state.begin_draining();
    info!("draining; probes now fail");
    server.stop(true).await;
}
