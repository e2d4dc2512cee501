//! The two-mode transformation contract.

use std::fmt::Debug;

use image::DynamicImage;
use tracing::debug;

use imagehub_core::types::image::Image;

use crate::codec;
use crate::error::TransformationError;
use crate::spec::TransformationSpec;
use crate::url::ImageUrl;

/// A transformation that can rewrite image bytes or describe itself on a URL.
///
/// Implementations are immutable values built from validated, canonical
/// parameters. [`params`](Transformation::params) must capture every input
/// that affects [`process`](Transformation::process).
pub trait Transformation: Send + Sync + Debug {
    /// Name tag used in descriptor fragments.
    fn name(&self) -> &'static str;

    /// Canonical parameters.
    fn params(&self) -> TransformationSpec;

    /// Pixel-level transformation on a decoded image.
    fn process(&self, image: DynamicImage) -> Result<DynamicImage, TransformationError>;

    /// Decodes the blob, transforms it, re-encodes in the original format
    /// and updates the dimensions.
    fn apply_to_image(&self, image: &mut Image) -> Result<(), TransformationError> {
        let (decoded, format) = codec::decode(image)?;
        let transformed = self.process(decoded)?;
        let blob = codec::encode(&transformed, format)?;

        debug!(
            transformation = self.name(),
            width = transformed.width(),
            height = transformed.height(),
            "Applied transformation"
        );
        image.set_blob(blob, transformed.width(), transformed.height());
        Ok(())
    }

    /// Appends this transformation's descriptor fragment to `url`.
    fn apply_to_url(&self, url: &mut ImageUrl) {
        url.append(self.params().fragment());
    }
}
