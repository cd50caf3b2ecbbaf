//! SQLite-backed memo store.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use super::MemoStore;
use crate::config::{DatabaseLocation, StoreConfig};
use crate::error::{MemoError, MemoResult};
use crate::types::Memo;

const MEMO_COLUMNS: &str = "id, content, created_at, updated_at, deleted_at";

/// SQLite memo store.
///
/// One connection shared behind a mutex; statement isolation is whatever
/// SQLite gives a single connection.
pub struct SqliteMemoStore {
    conn: Mutex<Connection>,
}

impl SqliteMemoStore {
    /// Open the database named by `config` and migrate it.
    pub fn open(config: &StoreConfig) -> MemoResult<Self> {
        let conn = match config.location()? {
            DatabaseLocation::InMemory => Connection::open_in_memory(),
            DatabaseLocation::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                Connection::open(&path)
            }
        }
        .map_err(MemoError::connection)?;

        info!(database_url = %config.database_url, "Connection opened to database");

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;

        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> MemoResult<Self> {
        Self::open(&StoreConfig::in_memory())
    }

    /// Create the memo table and its indexes if they don't exist.
    pub fn migrate(&self) -> MemoResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS memos (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                content    TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                deleted_at TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_memos_deleted_at
                ON memos(deleted_at);
        "#,
        )
        .map_err(MemoError::migration)?;
        Ok(())
    }

    fn lock(&self) -> MemoResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| MemoError::database(format!("Failed to acquire lock: {}", e)))
    }

    fn format_timestamp(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    fn parse_timestamp(value: &str) -> MemoResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| MemoError::parse(format!("invalid timestamp '{}': {}", value, e)))
    }

    fn row_to_memo(row: &rusqlite::Row<'_>) -> MemoResult<Memo> {
        let id: i64 = row.get(0)?;
        let content: String = row.get(1)?;
        let created_at: String = row.get(2)?;
        let updated_at: String = row.get(3)?;
        let deleted_at: Option<String> = row.get(4)?;

        Ok(Memo {
            id,
            content,
            created_at: Self::parse_timestamp(&created_at)?,
            updated_at: Self::parse_timestamp(&updated_at)?,
            deleted_at: deleted_at
                .as_deref()
                .map(Self::parse_timestamp)
                .transpose()?,
        })
    }

    /// Live row lookup on an already locked connection.
    fn fetch_live(conn: &Connection, id: i64) -> MemoResult<Memo> {
        let sql = format!(
            "SELECT {} FROM memos WHERE id = ?1 AND deleted_at IS NULL",
            MEMO_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let memo = stmt
            .query_row([id], |row| Ok(Self::row_to_memo(row)))
            .optional()?
            .transpose()?;

        memo.ok_or_else(|| MemoError::not_found(id))
    }

    /// Any row, deleted or not.
    fn fetch_any(conn: &Connection, id: i64) -> MemoResult<Memo> {
        let sql = format!("SELECT {} FROM memos WHERE id = ?1", MEMO_COLUMNS);
        conn.query_row(&sql, [id], |row| Ok(Self::row_to_memo(row)))?
    }
}

#[async_trait]
impl MemoStore for SqliteMemoStore {
    async fn list_all(&self) -> MemoResult<Vec<Memo>> {
        let conn = self.lock()?;
        let sql = format!(
            "SELECT {} FROM memos WHERE deleted_at IS NULL ORDER BY id ASC",
            MEMO_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| Ok(Self::row_to_memo(row)))?;

        let mut memos = Vec::new();
        for row in rows {
            memos.push(row??);
        }

        debug!(count = memos.len(), "Listed memos");
        Ok(memos)
    }

    async fn get_by_id(&self, id: i64) -> MemoResult<Memo> {
        let conn = self.lock()?;
        Self::fetch_live(&conn, id)
    }

    async fn create(&self, content: &str) -> MemoResult<Memo> {
        let conn = self.lock()?;
        let now = Utc::now();
        let stamp = Self::format_timestamp(&now);

        conn.execute(
            "INSERT INTO memos (content, created_at, updated_at) VALUES (?1, ?2, ?2)",
            params![content, stamp],
        )?;
        let id = conn.last_insert_rowid();

        debug!(memo_id = id, "Created memo");
        Self::fetch_live(&conn, id)
    }

    async fn update_content(&self, id: i64, content: &str) -> MemoResult<Memo> {
        let conn = self.lock()?;
        let memo = Self::fetch_live(&conn, id)?;

        // Clock steps backwards must not put updated_at behind the stored stamps.
        let now = Utc::now().max(memo.updated_at);

        let changed = conn.execute(
            "UPDATE memos SET content = ?1, updated_at = ?2 \
             WHERE id = ?3 AND deleted_at IS NULL",
            params![content, Self::format_timestamp(&now), id],
        )?;
        if changed == 0 {
            return Err(MemoError::not_found(id));
        }

        debug!(memo_id = id, "Updated memo content");
        Self::fetch_live(&conn, id)
    }

    async fn delete_by_id(&self, id: i64) -> MemoResult<Memo> {
        let conn = self.lock()?;
        let memo = Self::fetch_live(&conn, id)?;
        let now = Utc::now().max(memo.updated_at);

        let changed = conn.execute(
            "UPDATE memos SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
            params![Self::format_timestamp(&now), id],
        )?;
        if changed == 0 {
            return Err(MemoError::not_found(id));
        }

        debug!(memo_id = id, "Soft-deleted memo");
        Self::fetch_any(&conn, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = SqliteMemoStore::in_memory().unwrap();

        let created = store.create("Buy milk").await.unwrap();
        assert_eq!(created.content, "Buy milk");
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.deleted_at.is_none());

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = SqliteMemoStore::in_memory().unwrap();
        let err = store.get_by_id(99).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_keeps_row() {
        let store = SqliteMemoStore::in_memory().unwrap();
        let memo = store.create("gone soon").await.unwrap();

        let deleted = store.delete_by_id(memo.id).await.unwrap();
        assert!(deleted.is_deleted());
        assert_eq!(deleted.content, "gone soon");

        let conn = store.lock().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM memos WHERE id = ?1",
                [memo.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = SqliteMemoStore::in_memory().unwrap();
        let first = store.create("one").await.unwrap();
        store.delete_by_id(first.id).await.unwrap();

        let second = store.create("two").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let store = SqliteMemoStore::in_memory().unwrap();
        store.create("kept").await.unwrap();

        store.migrate().unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_timestamp_is_parse_error() {
        let store = SqliteMemoStore::in_memory().unwrap();
        {
            let conn = store.lock().unwrap();
            conn.execute(
                "INSERT INTO memos (content, created_at, updated_at) \
                 VALUES ('x', 'yesterday', 'today')",
                [],
            )
            .unwrap();
        }

        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, MemoError::Parse { .. }));
    }
}
