//! Resizing to exact dimensions.

use image::DynamicImage;
use image::imageops::FilterType;

use crate::contract::Transformation;
use crate::error::TransformationError;
use crate::params::{Params, check_output_size};
use crate::spec::TransformationSpec;

/// Resizes to `width` x `height`. A missing dimension is derived from the
/// other one, keeping the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    width: Option<u32>,
    height: Option<u32>,
}

impl Resize {
    /// Descriptor name.
    pub const NAME: &'static str = "resize";

    /// Creates a resize; at least one dimension is required.
    pub fn new(width: Option<u32>, height: Option<u32>) -> Result<Self, TransformationError> {
        if width.is_none() && height.is_none() {
            return Err(TransformationError::invalid(
                Self::NAME,
                "'width' or 'height' is required",
            ));
        }
        if let (Some(w), Some(h)) = (width, height) {
            check_output_size(Self::NAME, w, h)?;
        }
        Ok(Self { width, height })
    }

    /// Builds from descriptor parameters `width` and `height`.
    pub fn from_params(mut params: Params<'_>) -> Result<Self, TransformationError> {
        let width = params.take_dimension("width")?;
        let height = params.take_dimension("height")?;
        params.finish()?;
        Self::new(width, height)
    }

    fn target(&self, src_w: u32, src_h: u32) -> (u32, u32) {
        let scaled = |value: u32, num: u32, den: u32| {
            let n = (u64::from(value) * u64::from(num) + u64::from(den) / 2) / u64::from(den);
            u32::try_from(n.max(1)).unwrap_or(u32::MAX)
        };
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, scaled(src_h, w, src_w.max(1))),
            (None, Some(h)) => (scaled(src_w, h, src_h.max(1)), h),
            (None, None) => (src_w, src_h),
        }
    }
}

impl Transformation for Resize {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&self) -> TransformationSpec {
        TransformationSpec::new(Self::NAME)
            .param_opt("width", self.width)
            .param_opt("height", self.height)
    }

    fn process(&self, image: DynamicImage) -> Result<DynamicImage, TransformationError> {
        let (width, height) = self.target(image.width(), image.height());
        check_output_size(Self::NAME, width, height)?;
        Ok(image.resize_exact(width, height, FilterType::Triangle))
    }
}
