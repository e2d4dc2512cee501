//! Closed registry of database drivers.

use std::sync::Arc;

use tracing::info;

use imagehub_core::config::driver::DriverConfig;
use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::database::DatabaseDriver;

use crate::providers::json::{JsonDatabase, JsonParams};
use crate::providers::memory::MemoryDatabase;

/// Identifiers of all registered database drivers.
pub const DATABASE_DRIVERS: &[&str] = &["json", "memory"];

/// Instantiate the database driver named in `config`.
pub async fn build_database(config: &DriverConfig) -> AppResult<Arc<dyn DatabaseDriver>> {
    let driver: Arc<dyn DatabaseDriver> = match config.driver.as_str() {
        "json" => {
            let params: JsonParams = config.typed_params()?;
            Arc::new(JsonDatabase::new(&params.data_dir).await?)
        }
        "memory" => Arc::new(MemoryDatabase::new()),
        other => {
            return Err(AppError::configuration(format!(
                "Unknown database driver '{other}' (available: {})",
                DATABASE_DRIVERS.join(", ")
            )));
        }
    };

    info!(driver = %driver.driver_name(), "Database driver initialized");
    Ok(driver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagehub_core::error::ErrorKind;

    #[tokio::test]
    async fn test_builds_registered_drivers() {
        let driver = build_database(&DriverConfig::memory()).await.unwrap();
        assert_eq!(driver.driver_name(), "memory");

        let dir = tempfile::tempdir().unwrap();
        let config =
            DriverConfig::new("json").with_param("data_dir", dir.path().to_str().unwrap().into());
        let driver = build_database(&config).await.unwrap();
        assert_eq!(driver.driver_name(), "json");
    }

    #[tokio::test]
    async fn test_unknown_driver_is_configuration_error() {
        let err = build_database(&DriverConfig::new("mongodb"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
