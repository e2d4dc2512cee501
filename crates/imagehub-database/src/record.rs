//! The document every database driver persists per image.

use serde::{Deserialize, Serialize};

use imagehub_core::traits::database::Metadata;
use imagehub_core::types::image::ImageInfo;

/// Stored image properties plus caller metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Image properties recorded on add.
    pub info: ImageInfo,
    /// Caller metadata.
    #[serde(default)]
    pub metadata: Metadata,
}

impl ImageRecord {
    /// A record with no metadata.
    pub fn new(info: ImageInfo) -> Self {
        Self {
            info,
            metadata: Metadata::new(),
        }
    }

    /// Merges `metadata` into the record, overwriting equal keys.
    pub fn merge_metadata(&mut self, metadata: Metadata) {
        for (key, value) in metadata {
            self.metadata.insert(key, value);
        }
    }
}
