//! Memo entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A memo row as stored and as returned over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// System-assigned identifier. Never reused.
    pub id: i64,
    /// Free text.
    pub content: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete stamp. `None` for live memos.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Memo {
    /// Whether the memo has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Request body for creating or updating a memo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoInput {
    pub content: String,
}
