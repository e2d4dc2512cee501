//! Solid borders painted over the image edges.

use image::DynamicImage;

use crate::color::Color;
use crate::contract::Transformation;
use crate::error::TransformationError;
use crate::params::Params;
use crate::spec::TransformationSpec;

/// Paints a `color` frame `width` pixels wide left/right and `height`
/// pixels tall top/bottom. Dimensions are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    color: Color,
    width: u32,
    height: u32,
}

impl Border {
    /// Descriptor name.
    pub const NAME: &'static str = "border";

    /// Creates a border.
    pub fn new(color: Color, width: u32, height: u32) -> Self {
        Self {
            color,
            width,
            height,
        }
    }

    /// Builds from `color` (default `000000`), `width` and `height` (default 1).
    pub fn from_params(mut params: Params<'_>) -> Result<Self, TransformationError> {
        let color = params.take_color("color")?.unwrap_or(Color::BLACK);
        let width = params.take_u32("width")?.unwrap_or(1);
        let height = params.take_u32("height")?.unwrap_or(1);
        params.finish()?;
        Ok(Self::new(color, width, height))
    }
}

impl Transformation for Border {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&self) -> TransformationSpec {
        TransformationSpec::new(Self::NAME)
            .param("color", self.color.to_hex())
            .param("width", self.width)
            .param("height", self.height)
    }

    fn process(&self, image: DynamicImage) -> Result<DynamicImage, TransformationError> {
        let mut pixels = image.to_rgba8();
        let (w, h) = pixels.dimensions();
        let fill = self.color.to_rgba();

        for (x, y, pixel) in pixels.enumerate_pixels_mut() {
            let on_side = x < self.width || x >= w.saturating_sub(self.width);
            let on_edge = y < self.height || y >= h.saturating_sub(self.height);
            if on_side || on_edge {
                *pixel = fill;
            }
        }
        Ok(DynamicImage::ImageRgba8(pixels))
    }
}
