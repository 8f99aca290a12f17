//! Graceful shutdown

use tokio::signal;

/// Handler for graceful shutdown
///
/// Resolves on Ctrl+C or SIGTERM, which makes the server stop accepting new
/// connections and finish the in-flight requests
pub async fn handler() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Valid CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Valid terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Terminate signal received, starting graceful shutdown");
}
