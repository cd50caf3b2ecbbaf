//! Route definitions for the REST API.

mod health;
mod memos;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Memo operations
        .route("/memos", get(memos::list_memos).post(memos::create_memo))
        .route(
            "/memos/:id",
            get(memos::get_memo)
                .put(memos::update_memo)
                .delete(memos::delete_memo),
        )
        // Attach state
        .with_state(state)
}

pub use health::*;
pub use memos::*;
