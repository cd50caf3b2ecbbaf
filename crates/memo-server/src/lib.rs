//! memo-server - REST API server for memo.
//!
//! This crate exposes the memo store over JSON-over-HTTP.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use memo_core::{SqliteMemoStore, StoreConfig};
//! use memo_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = SqliteMemoStore::open(&StoreConfig::from_env()).unwrap();
//!     let app = create_server(AppState::new(Arc::new(store)));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}

/// Install the global tracing subscriber used by the binaries.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("memo_server=debug".parse()?)
                .add_directive("memo_core=debug".parse()?),
        )
        .try_init()?;
    Ok(())
}
