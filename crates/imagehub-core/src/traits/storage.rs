//! Storage driver trait for pluggable image blob back ends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Persists encoded image bytes by image identifier.
///
/// Implementations live in `imagehub-storage`. Errors are returned as
/// `AppError` and travel through the operation pipeline unchanged.
#[async_trait]
pub trait StorageDriver: Send + Sync + std::fmt::Debug + 'static {
    /// Registered identifier of this driver (e.g. `"filesystem"`).
    fn driver_name(&self) -> &str;

    /// Check whether the back end is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store the bytes of a new image. Fails with `Conflict` if it exists.
    async fn store(&self, hash: &str, data: Bytes) -> AppResult<()>;

    /// Load the bytes of an image. Fails with `NotFound` if missing.
    async fn load(&self, hash: &str) -> AppResult<Bytes>;

    /// Delete an image. Fails with `NotFound` if missing.
    async fn delete(&self, hash: &str) -> AppResult<()>;

    /// Check whether an image is stored.
    async fn exists(&self, hash: &str) -> AppResult<bool>;
}
