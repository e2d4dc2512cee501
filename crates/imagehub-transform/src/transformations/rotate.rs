//! Rotation by an arbitrary number of degrees, clockwise.

use image::{DynamicImage, Rgba, RgbaImage};

use crate::color::Color;
use crate::contract::Transformation;
use crate::error::TransformationError;
use crate::params::{Params, check_output_size};
use crate::spec::TransformationSpec;

/// Rotates the image clockwise, filling uncovered corners with `bg`.
///
/// Right angles are exact; other angles grow the canvas to the rotated
/// bounding box and sample with nearest-neighbour lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotate {
    angle: u32,
    bg: Color,
}

impl Rotate {
    /// Descriptor name.
    pub const NAME: &'static str = "rotate";

    /// Creates a rotation; the angle is normalised to `0..360`.
    pub fn new(angle: i64, bg: Color) -> Self {
        Self {
            angle: angle.rem_euclid(360) as u32,
            bg,
        }
    }

    /// Builds from descriptor parameters `angle` (required) and `bg`.
    pub fn from_params(mut params: Params<'_>) -> Result<Self, TransformationError> {
        let angle = params
            .take_i64("angle")?
            .ok_or_else(|| TransformationError::invalid(Self::NAME, "'angle' is required"))?;
        let bg = params.take_color("bg")?.unwrap_or(Color::BLACK);
        params.finish()?;
        Ok(Self::new(angle, bg))
    }

    /// Normalised angle.
    pub fn angle(&self) -> u32 {
        self.angle
    }

    /// Size of the rotated canvas for a `width` x `height` source.
    ///
    /// Free angles grow the canvas, so their output is size-checked.
    pub fn canvas(&self, width: u32, height: u32) -> Result<(u32, u32), TransformationError> {
        match self.angle {
            0 | 180 => Ok((width, height)),
            90 | 270 => Ok((height, width)),
            angle => {
                let (sin, cos) = f64::from(angle).to_radians().sin_cos();
                let (w, h) = (f64::from(width), f64::from(height));
                let out_w = (w * cos.abs() + h * sin.abs()).round().max(1.0) as u32;
                let out_h = (w * sin.abs() + h * cos.abs()).round().max(1.0) as u32;
                check_output_size(Self::NAME, out_w, out_h)?;
                Ok((out_w, out_h))
            }
        }
    }
}

impl Transformation for Rotate {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&self) -> TransformationSpec {
        TransformationSpec::new(Self::NAME)
            .param("angle", self.angle)
            .param("bg", self.bg.to_hex())
    }

    fn process(&self, image: DynamicImage) -> Result<DynamicImage, TransformationError> {
        let (out_w, out_h) = self.canvas(image.width(), image.height())?;
        Ok(match self.angle {
            0 => image,
            90 => image.rotate90(),
            180 => image.rotate180(),
            270 => image.rotate270(),
            angle => DynamicImage::ImageRgba8(rotate_free(
                &image.to_rgba8(),
                angle,
                (out_w, out_h),
                self.bg.to_rgba(),
            )),
        })
    }
}

fn rotate_free(src: &RgbaImage, degrees: u32, (out_w, out_h): (u32, u32), bg: Rgba<u8>) -> RgbaImage {
    let (sin, cos) = f64::from(degrees).to_radians().sin_cos();
    let (w, h) = (f64::from(src.width()), f64::from(src.height()));
    let (cx, cy) = (w / 2.0, h / 2.0);
    let (ocx, ocy) = (f64::from(out_w) / 2.0, f64::from(out_h) / 2.0);

    RgbaImage::from_fn(out_w, out_h, |x, y| {
        let dx = f64::from(x) + 0.5 - ocx;
        let dy = f64::from(y) + 0.5 - ocy;
        let sx = dx * cos + dy * sin + cx;
        let sy = -dx * sin + dy * cos + cy;

        if sx >= 0.0 && sy >= 0.0 && sx < w && sy < h {
            *src.get_pixel(sx as u32, sy as u32)
        } else {
            bg
        }
    })
}
