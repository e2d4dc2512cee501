//! Transformation error type.

use imagehub_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Errors raised while building or applying a transformation.
#[derive(Debug, Error)]
pub enum TransformationError {
    /// No transformation is registered under this name.
    #[error("Unknown transformation: {0}")]
    UnknownTransformation(String),

    /// The descriptor fragment could not be parsed.
    #[error("Malformed transformation fragment '{0}'")]
    MalformedFragment(String),

    /// A parameter is missing, unknown or out of range.
    #[error("Invalid parameter for {transformation}: {message}")]
    InvalidParameter {
        /// Transformation name.
        transformation: &'static str,
        /// What is wrong with the parameter.
        message: String,
    },

    /// The image format could not be determined or is not supported.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The blob could not be decoded.
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The transformed image could not be encoded.
    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

impl TransformationError {
    pub(crate) fn invalid(transformation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            transformation,
            message: message.into(),
        }
    }

    /// Whether the error stems from caller input rather than the image.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownTransformation(_) | Self::MalformedFragment(_) | Self::InvalidParameter { .. }
        )
    }
}

impl From<TransformationError> for AppError {
    fn from(err: TransformationError) -> Self {
        let kind = if err.is_validation() {
            ErrorKind::Validation
        } else {
            ErrorKind::Transformation
        };
        let message = err.to_string();
        AppError::with_source(kind, message, err)
    }
}
