//! Success envelope shared by every endpoint.

use axum::Json;
use serde::Serialize;

/// `{"data": <payload>}`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Wrap a payload in the success envelope.
pub fn data<T: Serialize>(payload: T) -> Json<Envelope<T>> {
    Json(Envelope { data: payload })
}
