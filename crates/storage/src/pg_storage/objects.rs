//! ObjectStore implementation for PgStorage.

use std::time::Duration;

use async_trait::async_trait;
use objscope_core::ObjectTypeCount;

use super::{PgStorage, like_prefix_pattern, with_deadline};
use crate::error::StorageError;
use crate::traits::ObjectStore;

// COLLATE "C" keeps the ordering byte-wise regardless of the database locale.
const COUNT_BY_TYPE_SQL: &str = r#"SELECT object_type, COUNT(*) AS count
    FROM sui_objects
   WHERE object_type LIKE $1 ESCAPE '\'
   GROUP BY object_type
   ORDER BY object_type COLLATE "C""#;

#[async_trait]
impl ObjectStore for PgStorage {
    async fn ping(&self, timeout: Duration) -> Result<(), StorageError> {
        let one: i32 =
            with_deadline(timeout, sqlx::query_scalar("SELECT 1").fetch_one(&self.pool)).await?;
        if one != 1 {
            return Err(StorageError::DataCorruption(format!("ping returned {one}")));
        }
        Ok(())
    }

    async fn count_object_types(
        &self,
        package_id: &str,
        timeout: Duration,
    ) -> Result<Vec<ObjectTypeCount>, StorageError> {
        let pattern = like_prefix_pattern(package_id);
        let rows: Vec<(String, i64)> = with_deadline(
            timeout,
            sqlx::query_as(COUNT_BY_TYPE_SQL).bind(&pattern).fetch_all(&self.pool),
        )
        .await?;

        let counts = rows
            .into_iter()
            .map(|(object_type, count)| {
                let count = u64::try_from(count).map_err(|_| {
                    StorageError::DataCorruption(format!(
                        "negative count {count} for type {object_type}"
                    ))
                })?;
                Ok(ObjectTypeCount { object_type, count })
            })
            .collect::<Result<Vec<_>, StorageError>>()?;
        tracing::debug!(package_id, types = counts.len(), "counted object types");
        Ok(counts)
    }
}
