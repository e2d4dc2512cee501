//! Database driver trait for image properties and metadata.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::result::AppResult;
use crate::types::image::ImageInfo;

/// Image metadata: a flat JSON object of caller-defined fields.
pub type Metadata = Map<String, Value>;

/// Persists image properties and caller metadata by image identifier.
#[async_trait]
pub trait DatabaseDriver: Send + Sync + std::fmt::Debug + 'static {
    /// Registered identifier of this driver (e.g. `"memory"`).
    fn driver_name(&self) -> &str;

    /// Check whether the back end is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Record a new image. Fails with `Conflict` if the hash is taken.
    async fn insert_image(&self, info: &ImageInfo) -> AppResult<()>;

    /// Remove an image and its metadata. Fails with `NotFound` if missing.
    async fn delete_image(&self, hash: &str) -> AppResult<()>;

    /// Load stored image properties. Fails with `NotFound` if missing.
    async fn load_image(&self, hash: &str) -> AppResult<ImageInfo>;

    /// Merge `metadata` into the image's metadata, overwriting equal keys.
    async fn update_metadata(&self, hash: &str, metadata: Metadata) -> AppResult<()>;

    /// Fetch the image's metadata (empty object when none was set).
    async fn get_metadata(&self, hash: &str) -> AppResult<Metadata>;

    /// Remove all metadata of the image.
    async fn delete_metadata(&self, hash: &str) -> AppResult<()>;
}
