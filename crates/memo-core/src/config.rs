//! Storage configuration.

use std::path::PathBuf;

use crate::error::{MemoError, MemoResult};

/// Connection string used when nothing is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://memos.db";

/// Where the memo table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Private in-memory database, gone when the store is dropped.
    InMemory,
    /// Database file on disk.
    File(PathBuf),
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection string: `sqlite://<path>`, `sqlite::memory:`, `:memory:`
    /// or a bare file path.
    pub database_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a config for the given connection string.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Config for a throwaway in-memory database.
    pub fn in_memory() -> Self {
        Self::new(":memory:")
    }

    /// Load from `MEMO_DATABASE_URL`, falling back to `DATABASE_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let url = std::env::var("MEMO_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL"));
        if let Ok(url) = url {
            if !url.trim().is_empty() {
                config.database_url = url;
            }
        }

        config
    }

    /// Resolve the connection string into a database location.
    pub fn location(&self) -> MemoResult<DatabaseLocation> {
        let url = self.database_url.trim();

        if url.is_empty() {
            return Err(MemoError::configuration("database url is empty"));
        }

        if url == ":memory:" || url == "sqlite::memory:" || url == "sqlite://:memory:" {
            return Ok(DatabaseLocation::InMemory);
        }

        let path = match url.split_once("://") {
            Some(("sqlite", path)) => path,
            Some((scheme, _)) => {
                return Err(MemoError::configuration(format!(
                    "unsupported database scheme '{}', expected sqlite",
                    scheme
                )))
            }
            None => url.strip_prefix("sqlite:").unwrap_or(url),
        };

        if path.is_empty() {
            return Err(MemoError::configuration(format!(
                "database url '{}' has no path",
                url
            )));
        }

        Ok(DatabaseLocation::File(PathBuf::from(path)))
    }
}
