//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use crate::envelope::{data, Envelope};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
/// GET /health
pub async fn health_check() -> Json<Envelope<HealthResponse>> {
    data(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
