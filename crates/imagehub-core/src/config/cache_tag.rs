//! Cache-tag (HashTwo) header configuration.

use serde::{Deserialize, Serialize};

/// Controls the cache-invalidation tag attached to image responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheTagConfig {
    /// Whether the header is emitted.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Response header name.
    #[serde(default = "default_header")]
    pub header: String,
}

impl Default for CacheTagConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            header: default_header(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_header() -> String {
    "X-HashTwo".to_string()
}
