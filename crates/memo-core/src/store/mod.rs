//! Memo storage.
//!
//! [`MemoStore`] is the data-access object the HTTP layer talks to. Every
//! read and write it performs excludes soft-deleted rows, so a memo whose
//! `deleted_at` is set behaves as if it did not exist.

mod sqlite;

pub use sqlite::SqliteMemoStore;

use async_trait::async_trait;

use crate::error::MemoResult;
use crate::types::Memo;

/// Data-access operations over the memo table.
#[async_trait]
pub trait MemoStore: Send + Sync {
    /// Every live memo, ascending by id.
    async fn list_all(&self) -> MemoResult<Vec<Memo>>;

    /// The live memo with this id, or `NotFound`.
    async fn get_by_id(&self, id: i64) -> MemoResult<Memo>;

    /// Insert a memo and return it with its assigned id and timestamps.
    async fn create(&self, content: &str) -> MemoResult<Memo>;

    /// Replace the content of a live memo and refresh `updated_at`.
    async fn update_content(&self, id: i64, content: &str) -> MemoResult<Memo>;

    /// Soft-delete a live memo, returning it with `deleted_at` stamped.
    async fn delete_by_id(&self, id: i64) -> MemoResult<Memo>;
}
