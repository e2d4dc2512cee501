//! In-memory database driver backed by `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::database::{DatabaseDriver, Metadata};
use imagehub_core::types::image::ImageInfo;

use crate::record::ImageRecord;

/// Keeps image records in process memory.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    records: DashMap<String, ImageRecord>,
}

impl MemoryDatabase {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(hash: &str) -> AppError {
    AppError::not_found(format!("Image not found: {hash}"))
}

#[async_trait]
impl DatabaseDriver for MemoryDatabase {
    fn driver_name(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn insert_image(&self, info: &ImageInfo) -> AppResult<()> {
        match self.records.entry(info.hash.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Image already exists: {}",
                info.hash
            ))),
            Entry::Vacant(slot) => {
                slot.insert(ImageRecord::new(info.clone()));
                Ok(())
            }
        }
    }

    async fn delete_image(&self, hash: &str) -> AppResult<()> {
        self.records
            .remove(hash)
            .map(|_| ())
            .ok_or_else(|| not_found(hash))
    }

    async fn load_image(&self, hash: &str) -> AppResult<ImageInfo> {
        self.records
            .get(hash)
            .map(|record| record.info.clone())
            .ok_or_else(|| not_found(hash))
    }

    async fn update_metadata(&self, hash: &str, metadata: Metadata) -> AppResult<()> {
        let mut record = self.records.get_mut(hash).ok_or_else(|| not_found(hash))?;
        record.merge_metadata(metadata);
        Ok(())
    }

    async fn get_metadata(&self, hash: &str) -> AppResult<Metadata> {
        self.records
            .get(hash)
            .map(|record| record.metadata.clone())
            .ok_or_else(|| not_found(hash))
    }

    async fn delete_metadata(&self, hash: &str) -> AppResult<()> {
        let mut record = self.records.get_mut(hash).ok_or_else(|| not_found(hash))?;
        record.metadata.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use imagehub_core::error::ErrorKind;
    use serde_json::json;

    fn info(hash: &str) -> ImageInfo {
        ImageInfo {
            hash: hash.to_string(),
            size: 10,
            width: 4,
            height: 2,
            mime_type: Some("image/png".into()),
            extension: Some("png".into()),
            added_at: Utc::now(),
        }
    }

    fn metadata(value: serde_json::Value) -> Metadata {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_load() {
        let db = MemoryDatabase::new();
        db.insert_image(&info("f00d")).await.unwrap();
        let loaded = db.load_image("f00d").await.unwrap();
        assert_eq!(loaded.width, 4);

        let err = db.insert_image(&info("f00d")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_metadata_merge_and_delete() {
        let db = MemoryDatabase::new();
        db.insert_image(&info("f00d")).await.unwrap();
        assert!(db.get_metadata("f00d").await.unwrap().is_empty());

        db.update_metadata("f00d", metadata(json!({"a": 1, "b": "x"})))
            .await
            .unwrap();
        db.update_metadata("f00d", metadata(json!({"b": "y"})))
            .await
            .unwrap();
        let stored = db.get_metadata("f00d").await.unwrap();
        assert_eq!(serde_json::Value::Object(stored), json!({"a": 1, "b": "y"}));

        db.delete_metadata("f00d").await.unwrap();
        assert!(db.get_metadata("f00d").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_image_is_not_found() {
        let db = MemoryDatabase::new();
        assert_eq!(
            db.get_metadata("nope").await.unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert_eq!(
            db.delete_image("nope").await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }
}
