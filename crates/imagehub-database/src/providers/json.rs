//! JSON document database driver: one `<hash>.json` file per image.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use imagehub_core::error::{AppError, ErrorKind};
use imagehub_core::result::AppResult;
use imagehub_core::traits::database::{DatabaseDriver, Metadata};
use imagehub_core::types::image::{ImageInfo, validate_hash};

use crate::record::ImageRecord;

/// Parameters accepted by the `json` driver.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonParams {
    /// Directory holding the documents.
    pub data_dir: String,
}

/// Persists each image record as a JSON document on disk.
///
/// Writes are serialized through a single lock; each document is written
/// to a temporary file and renamed into place.
#[derive(Debug)]
pub struct JsonDatabase {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonDatabase {
    /// Create a driver storing documents in `root_path`.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to create database directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    fn document_path(&self, hash: &str) -> AppResult<PathBuf> {
        validate_hash(hash)?;
        Ok(self.root.join(format!("{hash}.json")))
    }

    async fn read_record(&self, hash: &str) -> AppResult<ImageRecord> {
        let path = self.document_path(hash)?;
        let raw = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Image not found: {hash}"))
            } else {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to read record: {hash}"),
                    e,
                )
            }
        })?;

        serde_json::from_slice(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Corrupt record for image {hash}"),
                e,
            )
        })
    }

    async fn write_record(&self, record: &ImageRecord) -> AppResult<()> {
        let path = self.document_path(&record.info.hash)?;
        let tmp = path.with_extension("json.tmp");
        let raw = serde_json::to_vec_pretty(record)?;

        fs::write(&tmp, raw).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to write record", e)
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit record", e)
        })?;

        debug!(hash = %record.info.hash, "Wrote image record");
        Ok(())
    }
}

#[async_trait]
impl DatabaseDriver for JsonDatabase {
    fn driver_name(&self) -> &str {
        "json"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.is_dir())
    }

    async fn insert_image(&self, info: &ImageInfo) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        if fs::try_exists(self.document_path(&info.hash)?).await? {
            return Err(AppError::conflict(format!(
                "Image already exists: {}",
                info.hash
            )));
        }
        self.write_record(&ImageRecord::new(info.clone())).await
    }

    async fn delete_image(&self, hash: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.document_path(hash)?;
        fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Image not found: {hash}"))
            } else {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to delete record: {hash}"),
                    e,
                )
            }
        })
    }

    async fn load_image(&self, hash: &str) -> AppResult<ImageInfo> {
        Ok(self.read_record(hash).await?.info)
    }

    async fn update_metadata(&self, hash: &str, metadata: Metadata) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut record = self.read_record(hash).await?;
        record.merge_metadata(metadata);
        self.write_record(&record).await
    }

    async fn get_metadata(&self, hash: &str) -> AppResult<Metadata> {
        Ok(self.read_record(hash).await?.metadata)
    }

    async fn delete_metadata(&self, hash: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut record = self.read_record(hash).await?;
        record.metadata.clear();
        self.write_record(&record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn info(hash: &str) -> ImageInfo {
        ImageInfo {
            hash: hash.to_string(),
            size: 3,
            width: 1,
            height: 1,
            mime_type: Some("image/gif".into()),
            extension: Some("gif".into()),
            added_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();

        {
            let db = JsonDatabase::new(root).await.unwrap();
            db.insert_image(&info("cafe")).await.unwrap();
            db.update_metadata("cafe", json!({"title": "Cat"}).as_object().cloned().unwrap())
                .await
                .unwrap();
        }

        let db = JsonDatabase::new(root).await.unwrap();
        assert_eq!(db.load_image("cafe").await.unwrap().extension.as_deref(), Some("gif"));
        assert_eq!(
            db.get_metadata("cafe").await.unwrap().get("title"),
            Some(&json!("Cat"))
        );
    }

    #[tokio::test]
    async fn test_conflict_and_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let db = JsonDatabase::new(dir.path().to_str().unwrap()).await.unwrap();

        db.insert_image(&info("cafe")).await.unwrap();
        assert_eq!(
            db.insert_image(&info("cafe")).await.unwrap_err().kind,
            ErrorKind::Conflict
        );

        db.delete_image("cafe").await.unwrap();
        assert_eq!(
            db.load_image("cafe").await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_delete_metadata_keeps_image() {
        let dir = tempfile::tempdir().unwrap();
        let db = JsonDatabase::new(dir.path().to_str().unwrap()).await.unwrap();

        db.insert_image(&info("cafe")).await.unwrap();
        db.update_metadata("cafe", json!({"k": 1}).as_object().cloned().unwrap())
            .await
            .unwrap();
        db.delete_metadata("cafe").await.unwrap();

        assert!(db.get_metadata("cafe").await.unwrap().is_empty());
        assert_eq!(db.load_image("cafe").await.unwrap().hash, "cafe");
    }
}
