//! Sample data for a fresh database.

use tracing::info;

use crate::error::MemoResult;
use crate::store::MemoStore;
use crate::types::Memo;

/// Contents inserted by [`seed`], in order.
pub const SAMPLE_MEMOS: [&str; 3] = ["Memo 1", "Memo 2", "Memo 3"];

/// Insert the sample memos, stopping at the first failure.
pub async fn seed(store: &dyn MemoStore) -> MemoResult<Vec<Memo>> {
    let mut created = Vec::with_capacity(SAMPLE_MEMOS.len());

    for content in SAMPLE_MEMOS {
        created.push(store.create(content).await?);
    }

    info!(count = created.len(), "Seeded sample memos");
    Ok(created)
}
