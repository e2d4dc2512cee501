//! Decoding and re-encoding of image payloads.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use imagehub_core::types::image::Image;

use crate::error::TransformationError;

/// Format of `image`, from its extension or else from the payload's magic bytes.
pub fn detect_format(image: &Image) -> Result<ImageFormat, TransformationError> {
    if let Some(format) = image
        .extension
        .as_deref()
        .and_then(ImageFormat::from_extension)
    {
        return Ok(format);
    }

    image::guess_format(&image.blob).map_err(|_| {
        TransformationError::UnsupportedFormat(
            image.extension.clone().unwrap_or_else(|| "unknown".into()),
        )
    })
}

/// Decodes the payload of `image`.
pub fn decode(image: &Image) -> Result<(DynamicImage, ImageFormat), TransformationError> {
    let format = detect_format(image)?;
    let decoded = image::load_from_memory_with_format(&image.blob, format)
        .map_err(TransformationError::Decode)?;
    Ok((decoded, format))
}

/// Encodes `decoded` in `format`.
pub fn encode(decoded: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, TransformationError> {
    let mut buf = Vec::new();
    let mut cursor = Cursor::new(&mut buf);

    // JPEG has no alpha channel.
    let result = if format == ImageFormat::Jpeg && decoded.color().has_alpha() {
        DynamicImage::ImageRgb8(decoded.to_rgb8()).write_to(&mut cursor, format)
    } else {
        decoded.write_to(&mut cursor, format)
    };
    result.map_err(TransformationError::Encode)?;

    Ok(buf)
}
