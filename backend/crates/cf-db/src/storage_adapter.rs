use crate::Result as DbErrorResult;

use async_trait::async_trait;

/// Boundary to the backend's object storage.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Store `bytes` at `path` inside `bucket`. Fails with `Conflict` if the
    /// object already exists.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> DbErrorResult<()>;
}
