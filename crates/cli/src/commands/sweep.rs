//! Long-running staleness sweep.

use std::time::Duration;

use geduc_content::{ContentConfig, ContentStore};
use tracing::info;

/// Load everything once, then refresh stale collections every `interval`
/// seconds until Ctrl-C (or SIGTERM on unix).
///
/// # Errors
///
/// Returns an error if configuration is invalid or the source cannot be
/// constructed.
pub async fn run(interval: u64) -> Result<(), Box<dyn std::error::Error>> {
    let config = ContentConfig::from_env()?;
    let store = ContentStore::new(config.source()?, config.ttl.clone());

    store.load_all().await;
    info!(interval, "initial load complete, sweeping for staleness");

    let guard = store.spawn_sweep(Duration::from_secs(interval));

    shutdown_signal().await;
    guard.stop();
    info!("sweep stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
