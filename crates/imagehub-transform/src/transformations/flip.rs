//! Mirroring.

use image::DynamicImage;

use crate::contract::Transformation;
use crate::error::TransformationError;
use crate::spec::TransformationSpec;

/// Mirrors the image left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipHorizontally;

impl FlipHorizontally {
    /// Descriptor name.
    pub const NAME: &'static str = "flipHorizontally";
}

impl Transformation for FlipHorizontally {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&self) -> TransformationSpec {
        TransformationSpec::new(Self::NAME)
    }

    fn process(&self, image: DynamicImage) -> Result<DynamicImage, TransformationError> {
        Ok(image.fliph())
    }
}

/// Mirrors the image top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipVertically;

impl FlipVertically {
    /// Descriptor name.
    pub const NAME: &'static str = "flipVertically";
}

impl Transformation for FlipVertically {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&self) -> TransformationSpec {
        TransformationSpec::new(Self::NAME)
    }

    fn process(&self, image: DynamicImage) -> Result<DynamicImage, TransformationError> {
        Ok(image.flipv())
    }
}
