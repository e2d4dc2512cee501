//! Thumbnails.

use std::fmt;

use image::DynamicImage;
use image::imageops::FilterType;

use crate::contract::Transformation;
use crate::error::TransformationError;
use crate::params::{Params, check_output_size};
use crate::spec::TransformationSpec;

/// How a thumbnail fits its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Scale to fit inside the box, keeping the aspect ratio.
    Inset,
    /// Fill the whole box, cropping the overflow.
    Outbound,
}

impl Fit {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "inset" => Some(Self::Inset),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inset => f.write_str("inset"),
            Self::Outbound => f.write_str("outbound"),
        }
    }
}

/// Scales the image into a `width` x `height` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    fit: Fit,
}

impl Default for Thumbnail {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            fit: Fit::Outbound,
        }
    }
}

impl Thumbnail {
    /// Descriptor name.
    pub const NAME: &'static str = "thumbnail";

    /// Creates a thumbnail transformation.
    pub fn new(width: u32, height: u32, fit: Fit) -> Self {
        Self { width, height, fit }
    }

    /// Builds from `width`, `height` (default 50) and `fit` (default `outbound`).
    pub fn from_params(mut params: Params<'_>) -> Result<Self, TransformationError> {
        let defaults = Self::default();
        let width = params.take_dimension("width")?.unwrap_or(defaults.width);
        let height = params.take_dimension("height")?.unwrap_or(defaults.height);
        let fit = match params.take("fit") {
            Some(raw) => Fit::parse(raw).ok_or_else(|| {
                TransformationError::invalid(
                    Self::NAME,
                    format!("'fit' must be 'inset' or 'outbound', got '{raw}'"),
                )
            })?,
            None => defaults.fit,
        };
        params.finish()?;
        check_output_size(Self::NAME, width, height)?;
        Ok(Self::new(width, height, fit))
    }
}

impl Transformation for Thumbnail {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&self) -> TransformationSpec {
        TransformationSpec::new(Self::NAME)
            .param("width", self.width)
            .param("height", self.height)
            .param("fit", self.fit)
    }

    fn process(&self, image: DynamicImage) -> Result<DynamicImage, TransformationError> {
        Ok(match self.fit {
            Fit::Inset => image.resize(self.width, self.height, FilterType::Triangle),
            Fit::Outbound => image.resize_to_fill(self.width, self.height, FilterType::Triangle),
        })
    }
}
