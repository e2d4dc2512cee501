//! Closed registry of storage drivers.
//!
//! Configuration names a driver by identifier; the identifier is resolved
//! here at startup, so an unknown driver fails before the first request.

use std::sync::Arc;

use tracing::info;

use imagehub_core::config::driver::DriverConfig;
use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::storage::StorageDriver;

use crate::providers::filesystem::{FilesystemParams, FilesystemStorage};
use crate::providers::memory::MemoryStorage;

/// Identifiers of all registered storage drivers.
pub const STORAGE_DRIVERS: &[&str] = &["filesystem", "memory"];

/// Instantiate the storage driver named in `config`.
pub async fn build_storage(config: &DriverConfig) -> AppResult<Arc<dyn StorageDriver>> {
    let driver: Arc<dyn StorageDriver> = match config.driver.as_str() {
        "filesystem" => {
            let params: FilesystemParams = config.typed_params()?;
            Arc::new(FilesystemStorage::new(&params.data_dir).await?)
        }
        "memory" => Arc::new(MemoryStorage::new()),
        other => {
            return Err(AppError::configuration(format!(
                "Unknown storage driver '{other}' (available: {})",
                STORAGE_DRIVERS.join(", ")
            )));
        }
    };

    info!(driver = %driver.driver_name(), "Storage driver initialized");
    Ok(driver)
}
