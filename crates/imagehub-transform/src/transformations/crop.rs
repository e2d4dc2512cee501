//! Cropping to a rectangle.

use image::DynamicImage;

use crate::contract::Transformation;
use crate::error::TransformationError;
use crate::params::Params;
use crate::spec::TransformationSpec;

/// Cuts out the `width` x `height` rectangle whose top-left corner is `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crop {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Crop {
    /// Descriptor name.
    pub const NAME: &'static str = "crop";

    /// Creates a crop rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds from `x`, `y` (default 0), `width` and `height` (required).
    pub fn from_params(mut params: Params<'_>) -> Result<Self, TransformationError> {
        let x = params.take_u32("x")?.unwrap_or(0);
        let y = params.take_u32("y")?.unwrap_or(0);
        let width = params
            .take_dimension("width")?
            .ok_or_else(|| TransformationError::invalid(Self::NAME, "'width' is required"))?;
        let height = params
            .take_dimension("height")?
            .ok_or_else(|| TransformationError::invalid(Self::NAME, "'height' is required"))?;
        params.finish()?;
        Ok(Self::new(x, y, width, height))
    }
}

impl Transformation for Crop {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&self) -> TransformationSpec {
        TransformationSpec::new(Self::NAME)
            .param("x", self.x)
            .param("y", self.y)
            .param("width", self.width)
            .param("height", self.height)
    }

    fn process(&self, image: DynamicImage) -> Result<DynamicImage, TransformationError> {
        let fits_x = self.x.checked_add(self.width).is_some_and(|r| r <= image.width());
        let fits_y = self.y.checked_add(self.height).is_some_and(|b| b <= image.height());
        if !fits_x || !fits_y {
            return Err(TransformationError::invalid(
                Self::NAME,
                format!(
                    "rectangle {}x{}+{}+{} exceeds image bounds {}x{}",
                    self.width,
                    self.height,
                    self.x,
                    self.y,
                    image.width(),
                    image.height()
                ),
            ));
        }
        Ok(image.crop_imm(self.x, self.y, self.width, self.height))
    }
}
