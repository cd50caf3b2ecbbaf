//! memo-seed - insert the sample memos into the configured database.

use memo_core::{seed, SqliteMemoStore, StoreConfig};
use memo_server::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    init_tracing()?;

    let store = SqliteMemoStore::open(&StoreConfig::from_env())?;

    match seed(&store).await {
        Ok(memos) => {
            info!(count = memos.len(), "Seeder executed successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Seeder failed");
            Err(e.into())
        }
    }
}
