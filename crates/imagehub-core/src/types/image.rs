//! The image record an operation works on.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Checks that an image identifier is non-empty and made of `[A-Za-z0-9_-]`.
///
/// Drivers use identifiers as path segments and keys.
pub fn validate_hash(hash: &str) -> Result<(), AppError> {
    if hash.is_empty() || hash.len() > 128 {
        return Err(AppError::validation("Image identifier must be 1-128 characters"));
    }
    if !hash
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::validation(format!(
            "Invalid image identifier: {hash}"
        )));
    }
    Ok(())
}

/// The mutable image an operation populates and plugins may rewrite.
///
/// Starts empty; the core logic of `AddImage` fills it from the request body,
/// `GetImage` fills it from the drivers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    /// Encoded image bytes.
    pub blob: Bytes,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Media type, e.g. `image/png`.
    pub mime_type: Option<String>,
    /// File extension matching the encoding, e.g. `png`.
    pub extension: Option<String>,
}

impl Image {
    /// An image holding `blob` with no identified properties yet.
    pub fn from_blob(blob: impl Into<Bytes>) -> Self {
        Self {
            blob: blob.into(),
            ..Self::default()
        }
    }

    /// Whether no bytes have been loaded.
    pub fn is_empty(&self) -> bool {
        self.blob.is_empty()
    }

    /// Size of the encoded payload in bytes.
    pub fn size(&self) -> usize {
        self.blob.len()
    }

    /// Replaces the payload and its dimensions.
    pub fn set_blob(&mut self, blob: impl Into<Bytes>, width: u32, height: u32) {
        self.blob = blob.into();
        self.width = width;
        self.height = height;
    }

    /// The stored properties of this image, without the payload.
    pub fn info(&self, hash: &str) -> ImageInfo {
        ImageInfo {
            hash: hash.to_string(),
            size: self.blob.len() as u64,
            width: self.width,
            height: self.height,
            mime_type: self.mime_type.clone(),
            extension: self.extension.clone(),
            added_at: Utc::now(),
        }
    }

    /// Copies stored properties onto this image, leaving the payload alone.
    pub fn apply_info(&mut self, info: &ImageInfo) {
        self.width = info.width;
        self.height = info.height;
        self.mime_type = info.mime_type.clone();
        self.extension = info.extension.clone();
    }
}

/// Properties of a stored image as persisted by the database driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Image identifier.
    pub hash: String,
    /// Payload size in bytes.
    pub size: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Media type.
    pub mime_type: Option<String>,
    /// File extension.
    pub extension: Option<String>,
    /// When the image was added.
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hash() {
        assert!(validate_hash("f00d").is_ok());
        assert!(validate_hash("a1_b-2").is_ok());
        assert!(validate_hash("").is_err());
        assert!(validate_hash("../etc/passwd").is_err());
        assert!(validate_hash("a b").is_err());
    }

    #[test]
    fn test_info_roundtrip_keeps_properties() {
        let mut image = Image::from_blob(vec![1u8, 2, 3]);
        image.width = 40;
        image.height = 30;
        image.mime_type = Some("image/png".into());
        image.extension = Some("png".into());

        let info = image.info("f00d");
        assert_eq!(info.size, 3);

        let mut loaded = Image::default();
        loaded.apply_info(&info);
        assert_eq!(loaded.width, 40);
        assert_eq!(loaded.extension.as_deref(), Some("png"));
        assert!(loaded.is_empty());
    }
}
