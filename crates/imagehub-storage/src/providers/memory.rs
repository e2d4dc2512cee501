//! In-memory storage driver backed by `DashMap`.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::storage::StorageDriver;

/// Keeps image payloads in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    images: DashMap<String, Bytes>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[async_trait]
impl StorageDriver for MemoryStorage {
    fn driver_name(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn store(&self, hash: &str, data: Bytes) -> AppResult<()> {
        match self.images.entry(hash.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!("Image already exists: {hash}"))),
            Entry::Vacant(slot) => {
                slot.insert(data);
                Ok(())
            }
        }
    }

    async fn load(&self, hash: &str) -> AppResult<Bytes> {
        self.images
            .get(hash)
            .map(|data| data.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Image not found: {hash}")))
    }

    async fn delete(&self, hash: &str) -> AppResult<()> {
        self.images
            .remove(hash)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Image not found: {hash}")))
    }

    async fn exists(&self, hash: &str) -> AppResult<bool> {
        Ok(self.images.contains_key(hash))
    }
}
