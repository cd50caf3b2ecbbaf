//! memo-core - Core library for memo.
//!
//! This crate provides the memo entity, its SQLite schema, and the
//! data-access object used by the REST server.
//!
//! # Example
//!
//! ```ignore
//! use memo_core::{MemoStore, SqliteMemoStore, StoreConfig};
//!
//! let store = SqliteMemoStore::open(&StoreConfig::from_env())?;
//!
//! let memo = store.create("Buy milk").await?;
//! let memo = store.update_content(memo.id, "Buy oat milk").await?;
//! store.delete_by_id(memo.id).await?;
//! ```

pub mod config;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::{DatabaseLocation, StoreConfig};
pub use error::{ErrorCode, MemoError, MemoResult};
pub use seed::{seed, SAMPLE_MEMOS};
pub use store::{MemoStore, SqliteMemoStore};
pub use types::{Memo, MemoInput};
