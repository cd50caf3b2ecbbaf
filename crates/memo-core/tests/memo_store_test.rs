//! Integration tests for the SQLite memo store.

use std::time::Duration;

use memo_core::{seed, MemoError, MemoStore, SqliteMemoStore, StoreConfig, SAMPLE_MEMOS};

fn store() -> SqliteMemoStore {
    SqliteMemoStore::in_memory().unwrap()
}

#[tokio::test]
async fn test_create_then_get() {
    let store = store();

    let created = store.create("Buy milk").await.unwrap();
    let fetched = store.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.content, "Buy milk");
    assert!(fetched.updated_at >= fetched.created_at);
    assert!(fetched.deleted_at.is_none());
}

#[tokio::test]
async fn test_ids_increase() {
    let store = store();

    let a = store.create("a").await.unwrap();
    let b = store.create("b").await.unwrap();
    let c = store.create("c").await.unwrap();

    assert!(a.id < b.id && b.id < c.id);
}

#[tokio::test]
async fn test_list_excludes_deleted() {
    let store = store();

    let first = store.create("first").await.unwrap();
    let second = store.create("second").await.unwrap();
    let third = store.create("third").await.unwrap();

    store.delete_by_id(second.id).await.unwrap();

    let ids: Vec<i64> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![first.id, third.id]);
}

#[tokio::test]
async fn test_update_advances_updated_at() {
    let store = store();
    let created = store.create("draft").await.unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let updated = store.update_content(created.id, "final").await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "final");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let store = store();

    let err = store.update_content(404, "nothing").await.unwrap_err();
    assert!(matches!(err, MemoError::NotFound { memo_id: Some(404), .. }));
}

#[tokio::test]
async fn test_deleted_memo_is_gone_for_every_operation() {
    let store = store();
    let memo = store.create("temporary").await.unwrap();

    let deleted = store.delete_by_id(memo.id).await.unwrap();
    let stamp = deleted.deleted_at.expect("deleted_at should be set");
    assert!(stamp >= deleted.created_at);

    assert!(store.get_by_id(memo.id).await.unwrap_err().is_not_found());
    assert!(store
        .update_content(memo.id, "revived")
        .await
        .unwrap_err()
        .is_not_found());
    assert!(store.delete_by_id(memo.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_round_trip_sequence() {
    let store = store();

    let created = store.create("v1").await.unwrap();
    assert_eq!(store.get_by_id(created.id).await.unwrap().content, "v1");

    store.update_content(created.id, "v2").await.unwrap();
    assert_eq!(store.get_by_id(created.id).await.unwrap().content, "v2");

    store.delete_by_id(created.id).await.unwrap();
    assert!(store.get_by_id(created.id).await.unwrap_err().is_not_found());
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_content_is_accepted() {
    let store = store();
    let memo = store.create("").await.unwrap();
    assert_eq!(store.get_by_id(memo.id).await.unwrap().content, "");
}

#[tokio::test]
async fn test_seed_inserts_samples() {
    let store = store();

    let seeded = seed(&store).await.unwrap();
    let contents: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.content)
        .collect();

    assert_eq!(seeded.len(), SAMPLE_MEMOS.len());
    assert_eq!(contents, SAMPLE_MEMOS);
}

#[tokio::test]
async fn test_file_database_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("memos.db");
    let config = StoreConfig::new(format!("sqlite://{}", path.display()));

    let id = {
        let store = SqliteMemoStore::open(&config).unwrap();
        let kept = store.create("kept").await.unwrap();
        let dropped = store.create("dropped").await.unwrap();
        store.delete_by_id(dropped.id).await.unwrap();
        kept.id
    };

    let reopened = SqliteMemoStore::open(&config).unwrap();
    let memos = reopened.list_all().await.unwrap();
    assert_eq!(memos.len(), 1);
    assert_eq!(memos[0].id, id);
    assert_eq!(memos[0].content, "kept");
}

#[tokio::test]
async fn test_shared_store_handles_concurrent_creates() {
    let store: std::sync::Arc<dyn MemoStore> = std::sync::Arc::new(store());

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(&format!("memo {}", i)).await.unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list_all().await.unwrap().len(), 8);
}
