//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod cache_tag;
pub mod driver;
pub mod logging;
pub mod plugin;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::cache_tag::CacheTagConfig;
use self::driver::DriverConfig;
use self::logging::LoggingConfig;
use self::plugin::PluginPathConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay). An
/// operation context keeps an `Arc` of it as its immutable snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Metadata database driver.
    #[serde(default = "DriverConfig::memory")]
    pub database: DriverConfig,
    /// Image blob storage driver.
    #[serde(default = "DriverConfig::memory")]
    pub storage: DriverConfig,
    /// Additional plugin search paths, searched after the built-in one.
    #[serde(default)]
    pub plugins: Vec<PluginPathConfig>,
    /// Cache-tag response header settings.
    #[serde(default)]
    pub cache_tag: CacheTagConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `IMAGEHUB`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("IMAGEHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_memory_drivers() {
        let config = AppConfig::from_toml("").expect("empty config parses");
        assert_eq!(config.database.driver, "memory");
        assert_eq!(config.storage.driver, "memory");
        assert!(config.plugins.is_empty());
        assert_eq!(config.cache_tag.header, "X-HashTwo");
        assert!(config.cache_tag.enabled);
    }

    #[test]
    fn test_full_document() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 9090

            [database]
            driver = "json"
            params = { data_dir = "/var/lib/imagehub/meta" }

            [storage]
            driver = "filesystem"
            params = { data_dir = "/var/lib/imagehub/blobs" }

            [[plugins]]
            path = "watermark"
            prefix = "acme"

            [[plugins]]
            path = "audit"

            [cache_tag]
            header = "X-Cache-Tag"
            "#,
        )
        .expect("config parses");

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.driver, "json");
        assert_eq!(
            config.storage.params.get("data_dir").and_then(|v| v.as_str()),
            Some("/var/lib/imagehub/blobs")
        );
        assert_eq!(config.plugins.len(), 2);
        assert_eq!(config.plugins[0].prefix.as_deref(), Some("acme"));
        assert_eq!(config.plugins[1].prefix, None);
        assert_eq!(config.cache_tag.header, "X-Cache-Tag");
    }
}
