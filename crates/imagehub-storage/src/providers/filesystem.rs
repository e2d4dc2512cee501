//! Filesystem storage driver.
//!
//! Images are sharded by the first three characters of their identifier:
//! `f00d…` is stored at `<data_dir>/f/0/0/f00d…`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use imagehub_core::error::{AppError, ErrorKind};
use imagehub_core::result::AppResult;
use imagehub_core::traits::storage::StorageDriver;
use imagehub_core::types::image::validate_hash;

/// Parameters accepted by the `filesystem` driver.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesystemParams {
    /// Root directory for stored images.
    pub data_dir: String,
}

/// Stores image payloads as plain files below a root directory.
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    root: PathBuf,
}

impl FilesystemStorage {
    /// Create a driver rooted at `root_path`, creating the directory if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve an image identifier to its file path.
    fn resolve(&self, hash: &str) -> AppResult<PathBuf> {
        validate_hash(hash)?;
        let mut path = self.root.clone();
        for c in hash.chars().take(3) {
            path.push(c.to_string());
        }
        path.push(hash);
        Ok(path)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl StorageDriver for FilesystemStorage {
    fn driver_name(&self) -> &str {
        "filesystem"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.is_dir())
    }

    async fn store(&self, hash: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(hash)?;
        if fs::try_exists(&full_path).await? {
            return Err(AppError::conflict(format!("Image already exists: {hash}")));
        }
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write image: {hash}"),
                e,
            )
        })?;

        debug!(hash, bytes = data.len(), "Stored image");
        Ok(())
    }

    async fn load(&self, hash: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(hash)?;
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Image not found: {hash}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read image: {hash}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, hash: &str) -> AppResult<()> {
        let full_path = self.resolve(hash)?;
        fs::remove_file(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Image not found: {hash}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete image: {hash}"),
                    e,
                )
            }
        })?;

        debug!(hash, "Deleted image");
        Ok(())
    }

    async fn exists(&self, hash: &str) -> AppResult<bool> {
        let full_path = self.resolve(hash)?;
        Ok(fs::try_exists(&full_path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_driver(dir: &tempfile::TempDir) -> FilesystemStorage {
        FilesystemStorage::new(dir.path().to_str().unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_store_load_delete() {
        let dir = tempfile::tempdir().unwrap();
        let driver = make_driver(&dir).await;

        let data = Bytes::from("not really a png");
        driver.store("f00dbabe", data.clone()).await.unwrap();

        assert!(driver.exists("f00dbabe").await.unwrap());
        assert!(dir.path().join("f/0/0/f00dbabe").is_file());
        assert_eq!(driver.load("f00dbabe").await.unwrap(), data);

        driver.delete("f00dbabe").await.unwrap();
        assert!(!driver.exists("f00dbabe").await.unwrap());
    }

    #[tokio::test]
    async fn test_store_twice_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let driver = make_driver(&dir).await;

        driver.store("abc", Bytes::from("1")).await.unwrap();
        let err = driver.store("abc", Bytes::from("2")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_missing_image_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let driver = make_driver(&dir).await;

        assert_eq!(
            driver.load("missing").await.unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert_eq!(
            driver.delete("missing").await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let driver = make_driver(&dir).await;

        let err = driver.load("../../etc/passwd").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
