//! PostgreSQL storage backend using sqlx.

mod objects;

use std::future::Future;
use std::time::Duration;

use crate::error::StorageError;
use objscope_core::{
    PACKAGE_TYPE_SEPARATOR, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Opens the connection pool. The schema is owned by the indexer and is
    /// never created or migrated here.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        tracing::info!(max_connections = PG_POOL_MAX_CONNECTIONS, "PgStorage initialized");
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Closes every pooled connection; further queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("PgStorage closed");
    }
}

/// Runs `fut` under `timeout`, mapping an elapsed deadline to [`StorageError::Timeout`].
pub(crate) async fn with_deadline<T, F>(timeout: Duration, fut: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(StorageError::from),
        Err(_) => Err(StorageError::Timeout),
    }
}

/// Builds a `LIKE` pattern matching object types owned by `package_id`.
///
/// `\`, `%` and `_` in the id are escaped so only the literal prefix
/// `"<package_id>::"` matches. Pair with `ESCAPE '\'`.
pub(crate) fn like_prefix_pattern(package_id: &str) -> String {
    let mut pattern = String::with_capacity(package_id.len() + PACKAGE_TYPE_SEPARATOR.len() + 1);
    for ch in package_id.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push_str(PACKAGE_TYPE_SEPARATOR);
    pattern.push('%');
    pattern
}
