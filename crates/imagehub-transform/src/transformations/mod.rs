//! Built-in transformations.

pub mod border;
pub mod crop;
pub mod flip;
pub mod resize;
pub mod rotate;
pub mod thumbnail;

pub use border::Border;
pub use crop::Crop;
pub use flip::{FlipHorizontally, FlipVertically};
pub use resize::Resize;
pub use rotate::Rotate;
pub use thumbnail::{Fit, Thumbnail};

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};
    use imagehub_core::types::image::Image;

    /// A PNG with a distinct colour per quadrant.
    pub fn png(width: u32, height: u32) -> Image {
        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            let left = x < width / 2;
            let top = y < height / 2;
            match (left, top) {
                (true, true) => Rgba([255, 0, 0, 255]),
                (false, true) => Rgba([0, 255, 0, 255]),
                (true, false) => Rgba([0, 0, 255, 255]),
                (false, false) => Rgba([255, 255, 255, 255]),
            }
        });

        let mut blob = Vec::new();
        pixels
            .write_to(&mut Cursor::new(&mut blob), ImageFormat::Png)
            .unwrap();

        let mut image = Image::from_blob(blob);
        image.width = width;
        image.height = height;
        image.mime_type = Some("image/png".into());
        image.extension = Some("png".into());
        image
    }

    /// Decodes a fixture back to RGBA pixels.
    pub fn pixels(image: &Image) -> RgbaImage {
        image::load_from_memory(&image.blob).unwrap().to_rgba8()
    }
}
