//! Driver selection for the database and storage back ends.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Names a driver by its registered identifier and carries its parameter bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Registered driver identifier (e.g. `"memory"`, `"filesystem"`).
    pub driver: String,
    /// Driver-specific parameters.
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
}

impl DriverConfig {
    /// Configuration for the in-memory driver.
    pub fn memory() -> Self {
        Self::new("memory")
    }

    /// Configuration for `driver` with an empty parameter bag.
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a parameter.
    pub fn with_param(mut self, key: &str, value: serde_json::Value) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    /// Deserializes the parameter bag into a driver's typed parameters.
    pub fn typed_params<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let object: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        serde_json::from_value(serde_json::Value::Object(object)).map_err(|e| {
            AppError::configuration(format!(
                "Invalid parameters for driver '{}': {e}",
                self.driver
            ))
        })
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::memory()
    }
}
