//! memo-server - REST API server binary.

use std::sync::Arc;

use memo_core::SqliteMemoStore;
use memo_server::{create_server, init_tracing, AppState, ServerConfig};
use tokio::signal;
use tracing::info;

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing()?;

    let config = ServerConfig::from_env()?;

    // Opening the store runs the schema migration
    let store = SqliteMemoStore::open(&config.store)?;

    if config.not_found_as_404 {
        info!("Missing memos will be reported as 404");
    }
    let state = AppState::new(Arc::new(store)).with_not_found_as_404(config.not_found_as_404);
    let app = create_server(state);

    let addr = config.socket_addr()?;
    info!("Starting memo-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
