//! Server state management.

use std::sync::Arc;

use axum::http::StatusCode;
use memo_core::{MemoError, MemoStore};

use crate::error::ApiError;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn MemoStore>,
    not_found_status: StatusCode,
}

impl AppState {
    /// Create state around a store. Missing memos are reported as 500.
    pub fn new(store: Arc<dyn MemoStore>) -> Self {
        Self {
            store,
            not_found_status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Report missing memos as 404 instead of 500.
    pub fn with_not_found_as_404(mut self, enabled: bool) -> Self {
        self.not_found_status = if enabled {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        self
    }

    pub fn store(&self) -> &dyn MemoStore {
        self.store.as_ref()
    }

    /// Convert a store failure into the response this server reports for it.
    pub fn store_error(&self, err: MemoError) -> ApiError {
        ApiError::from_store(err, self.not_found_status)
    }
}
