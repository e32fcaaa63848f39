pub(crate) mod counts;
pub(crate) mod ping;
pub(crate) mod serve;

use anyhow::{Context, Result};
use objscope_core::{STARTUP_PING_TIMEOUT, ServiceConfig};
use objscope_storage::{ObjectStore, PgStorage};

/// Opens the pool and refuses to continue unless one ping succeeds.
pub(crate) async fn open_store(config: &ServiceConfig) -> Result<PgStorage> {
    let storage = PgStorage::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    storage.ping(STARTUP_PING_TIMEOUT).await.context("database unreachable at startup")?;
    tracing::info!("database connectivity check passed");
    Ok(storage)
}
