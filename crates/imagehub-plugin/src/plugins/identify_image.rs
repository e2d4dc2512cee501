//! Identification of uploaded images.

use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, ImageReader};
use tracing::debug;

use imagehub_core::context::OperationContext;
use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::plugin::{InterestMap, OperationPlugin};
use imagehub_core::types::image::Image;
use imagehub_core::types::operation::{OperationKind, Phase};

use super::BUILTIN_NAMESPACE;

/// Format and dimensions of an encoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identified {
    /// Detected encoding.
    pub format: ImageFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Reads format and dimensions from the header of `blob`.
pub fn identify(blob: &[u8]) -> AppResult<Identified> {
    let format = image::guess_format(blob)
        .map_err(|_| AppError::validation("Request body is not a supported image"))?;
    let (width, height) = ImageReader::with_format(Cursor::new(blob), format)
        .into_dimensions()
        .map_err(|e| AppError::validation(format!("Unreadable image: {e}")))?;

    Ok(Identified {
        format,
        width,
        height,
    })
}

/// Fills the context image from the request body before `AddImage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifyImagePlugin;

impl IdentifyImagePlugin {
    /// Plugin name.
    pub const NAME: &'static str = "identify-image";
}

#[async_trait]
impl OperationPlugin for IdentifyImagePlugin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn namespace(&self) -> &str {
        BUILTIN_NAMESPACE
    }

    fn interests(&self) -> InterestMap {
        InterestMap::new().with(OperationKind::AddImage, Phase::PreExec, 10)
    }

    async fn exec(&self, ctx: &mut OperationContext) -> AppResult<()> {
        if ctx.request.body.is_empty() {
            return Err(AppError::validation("No image data in request body"));
        }

        let identified = identify(&ctx.request.body)?;

        let mut image = Image::from_blob(ctx.request.body.clone());
        image.width = identified.width;
        image.height = identified.height;
        image.mime_type = Some(identified.format.to_mime_type().to_string());
        image.extension = identified
            .format
            .extensions_str()
            .first()
            .map(|ext| ext.to_string());

        debug!(
            hash = %ctx.hash,
            mime_type = ?image.mime_type,
            width = image.width,
            height = image.height,
            "Identified image"
        );
        ctx.image = image;
        Ok(())
    }
}
