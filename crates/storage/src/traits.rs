//! Store capability used by the HTTP layer.

use std::time::Duration;

use async_trait::async_trait;
use objscope_core::ObjectTypeCount;

use crate::error::StorageError;

/// Read-only queries against the indexed object table.
///
/// Every call is a single attempt bounded by the caller's `timeout`;
/// an elapsed deadline surfaces as [`StorageError::Timeout`].
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Trivial round trip to the backing store.
    async fn ping(&self, timeout: Duration) -> Result<(), StorageError>;

    /// Count objects per exact type string for every type prefixed `"<package_id>::"`.
    ///
    /// Sorted ascending by `object_type` (byte order). No matches is `Ok(vec![])`.
    async fn count_object_types(
        &self,
        package_id: &str,
        timeout: Duration,
    ) -> Result<Vec<ObjectTypeCount>, StorageError>;
}
